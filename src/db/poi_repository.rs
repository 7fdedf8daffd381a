// src/db/poi_repository.rs
// DOCUMENTATION: Data access gateway for the POI table
// PURPOSE: Fetch every POI with its geometry already rendered as GeoJSON text

use crate::errors::MapError;
use crate::models::{PoiId, PoiRow};
use async_trait::async_trait;
use serde_json::Value;
use sqlx::{FromRow, PgPool};

/// Read access to the points of interest
/// DOCUMENTATION: Injected into handlers as `web::Data<dyn PoiStore>` so tests
/// can substitute an in-memory store for PostgreSQL
#[async_trait]
pub trait PoiStore: Send + Sync {
    /// Every POI ordered by id ascending
    async fn fetch_all_pois(&self) -> Result<Vec<PoiRow>, MapError>;
}

/// Internal struct for mapping database rows
/// DOCUMENTATION: `id` arrives as JSON (to_jsonb) so integer and text keys
/// both decode, `geometry` comes from ST_AsGeoJSON(), `properties` stays `json`
/// so the stored key order survives
#[derive(Debug, FromRow)]
struct PoiRecord {
    pub id: Value,
    pub geometry: Option<String>,
    pub properties: Option<Value>,
}

impl PoiRecord {
    /// Convert PoiRecord to PoiRow
    fn to_poi(self) -> Result<PoiRow, MapError> {
        let id = PoiId::try_from(self.id).map_err(MapError::DataAccess)?;
        Ok(PoiRow {
            id,
            geometry: self.geometry,
            properties: self.properties.unwrap_or(Value::Null),
        })
    }
}

/// PostgreSQL/PostGIS implementation of PoiStore
pub struct PgPoiStore {
    pool: PgPool,
    table: String,
}

impl PgPoiStore {
    /// `table` must already be validated as a plain identifier (see Config::validate)
    pub fn new(pool: PgPool, table: impl Into<String>) -> Self {
        PgPoiStore {
            pool,
            table: table.into(),
        }
    }
}

/// Full-table read, geometry rendered by PostGIS
fn select_all_sql(table: &str) -> String {
    format!(
        r#"
        SELECT
            to_jsonb(id) AS id,
            ST_AsGeoJSON(geometry) AS geometry,
            properties::json AS properties
        FROM {}
        ORDER BY id
        "#,
        table
    )
}

#[async_trait]
impl PoiStore for PgPoiStore {
    async fn fetch_all_pois(&self) -> Result<Vec<PoiRow>, MapError> {
        // The connection goes back to the pool when `conn` drops, on every path
        let mut conn = self.pool.acquire().await.map_err(|e| {
            log::error!("Failed to acquire database connection: {}", e);
            MapError::from(e)
        })?;

        let sql = select_all_sql(&self.table);
        let records = sqlx::query_as::<_, PoiRecord>(&sql)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                log::error!("Failed to fetch POIs from {}: {}", self.table, e);
                MapError::from(e)
            })?;

        log::debug!("Fetched {} POIs from {}", records.len(), self.table);

        records.into_iter().map(PoiRecord::to_poi).collect()
    }
}
