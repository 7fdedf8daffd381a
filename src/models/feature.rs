// src/models/feature.rs
// DOCUMENTATION: GeoJSON documents returned by the API

use serde::Serialize;
use serde_json::Value;

use super::PoiId;

/// A single GeoJSON Feature built from one POI row
/// DOCUMENTATION: Field order mirrors RFC 7946 examples: type, id, geometry, properties.
/// `geometry` is the store's GeoJSON geometry as parsed JSON, so integral
/// coordinates and foreign members come back exactly as stored.
/// `properties` may be any JSON value, it is passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub type_field: &'static str,
    pub id: PoiId,
    pub geometry: Value,
    pub properties: Value,
}

impl Feature {
    pub fn new(id: PoiId, geometry: Value, properties: Value) -> Self {
        Feature {
            type_field: "Feature",
            id,
            geometry,
            properties,
        }
    }
}

/// Response body of GET /api/geojson
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub type_field: &'static str,
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        FeatureCollection {
            type_field: "FeatureCollection",
            features,
        }
    }
}
