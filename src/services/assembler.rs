// src/services/assembler.rs
// DOCUMENTATION: Feature collection assembler
// PURPOSE: Turn POI rows into a GeoJSON FeatureCollection, failing on any bad geometry

use crate::errors::MapError;
use crate::models::{Feature, FeatureCollection, PoiRow};
use geojson::{GeoJson, Geometry};
use serde_json::Value;

pub struct FeatureAssembler;

impl FeatureAssembler {
    /// Build one Feature per row, in input order
    /// DOCUMENTATION: A single unparseable geometry aborts the whole collection,
    /// no partial document is ever produced
    pub fn assemble(rows: Vec<PoiRow>) -> Result<FeatureCollection, MapError> {
        let features = rows
            .into_iter()
            .map(Self::to_feature)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(FeatureCollection::new(features))
    }

    fn to_feature(row: PoiRow) -> Result<Feature, MapError> {
        let geometry = Self::parse_geometry(&row)?;
        Ok(Feature::new(row.id, geometry, row.properties))
    }

    /// Parse the geometry text, checked against the GeoJSON geometry grammar
    /// DOCUMENTATION: The JSON value itself is kept, not the `geojson` model,
    /// since that model would rewrite `[2,48]` as `[2.0,48.0]`
    fn parse_geometry(row: &PoiRow) -> Result<Value, MapError> {
        let invalid = |message: String| MapError::Assembly {
            id: row.id.to_string(),
            message,
        };

        let text = row.geometry.as_deref().unwrap_or_default();
        if text.trim().is_empty() {
            return Err(invalid("geometry is empty".to_string()));
        }

        let value: Value = serde_json::from_str(text).map_err(|e| invalid(e.to_string()))?;
        GeoJson::from_json_value(value.clone())
            .and_then(Geometry::try_from)
            .map_err(|e| invalid(e.to_string()))?;

        Ok(value)
    }
}
