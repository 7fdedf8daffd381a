// src/handlers/geojson.rs
// DOCUMENTATION: HTTP handler for the map data endpoint
// PURPOSE: Serve every POI as a GeoJSON FeatureCollection

use crate::config::Config;
use crate::db::PoiStore;
use crate::errors::ApiError;
use crate::services::GeoJsonService;
use actix_web::{web, HttpResponse, Responder};

/// Media type of a GeoJSON document (RFC 7946)
pub const GEOJSON_CONTENT_TYPE: &str = "application/geo+json";

/// GET /api/geojson
/// Return the full POI dataset as a FeatureCollection
pub async fn get_geojson(
    store: web::Data<dyn PoiStore>,
    config: web::Data<Config>,
) -> Result<impl Responder, ApiError> {
    let collection = GeoJsonService::feature_collection(store.get_ref())
        .await
        .map_err(|e| {
            // Full diagnostics stay server-side whatever the mode
            log::error!("GeoJSON request failed: {:?}", e);
            ApiError::new(e, config.is_development())
        })?;

    Ok(HttpResponse::Ok()
        .content_type(GEOJSON_CONTENT_TYPE)
        .json(collection))
}

/// Configuration for map data routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api").route("/geojson", web::get().to(get_geojson)));
}
