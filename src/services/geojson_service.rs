// src/services/geojson_service.rs
// DOCUMENTATION: Business logic for the map endpoint
// PURPOSE: Compose the data access gateway with the assembler

use crate::db::PoiStore;
use crate::errors::MapError;
use crate::models::FeatureCollection;
use crate::services::FeatureAssembler;

pub struct GeoJsonService;

impl GeoJsonService {
    /// Fetch every POI and assemble the FeatureCollection
    pub async fn feature_collection(store: &dyn PoiStore) -> Result<FeatureCollection, MapError> {
        let rows = store.fetch_all_pois().await?;
        let collection = FeatureAssembler::assemble(rows)?;

        log::debug!("Assembled {} features", collection.features.len());
        Ok(collection)
    }
}
