// src/models/poi.rs
// DOCUMENTATION: Point of interest rows as read from the spatial store
// PURPOSE: Typed boundary between the database layer and the assembler

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Identifier of a point of interest
/// DOCUMENTATION: Stores may key rows by integer or by string,
/// either form is copied verbatim into the Feature `id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PoiId {
    Number(i64),
    Text(String),
}

impl TryFrom<Value> for PoiId {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => n
                .as_i64()
                .map(PoiId::Number)
                .ok_or_else(|| format!("id {} is not an integer", n)),
            Value::String(s) => Ok(PoiId::Text(s)),
            other => Err(format!("unsupported id value: {}", other)),
        }
    }
}

impl fmt::Display for PoiId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoiId::Number(n) => write!(f, "{}", n),
            PoiId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for PoiId {
    fn from(id: i64) -> Self {
        PoiId::Number(id)
    }
}

impl From<&str> for PoiId {
    fn from(id: &str) -> Self {
        PoiId::Text(id.to_string())
    }
}

/// One row of the POI table
/// DOCUMENTATION: `geometry` is the store's own GeoJSON rendering (ST_AsGeoJSON),
/// `None` when the column is NULL. `properties` is opaque and never inspected.
#[derive(Debug, Clone, PartialEq)]
pub struct PoiRow {
    pub id: PoiId,
    pub geometry: Option<String>,
    pub properties: Value,
}

impl PoiRow {
    #[cfg(test)]
    pub fn new(id: impl Into<PoiId>, geometry: impl Into<String>, properties: Value) -> Self {
        PoiRow {
            id: id.into(),
            geometry: Some(geometry.into()),
            properties,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_id_from_json_number_and_string() {
        assert_eq!(PoiId::try_from(json!(42)), Ok(PoiId::Number(42)));
        assert_eq!(
            PoiId::try_from(json!("camino-frances-1")),
            Ok(PoiId::Text("camino-frances-1".to_string()))
        );
    }

    #[test]
    fn test_id_rejects_other_json_types() {
        assert!(PoiId::try_from(json!(1.5)).is_err());
        assert!(PoiId::try_from(json!(null)).is_err());
        assert!(PoiId::try_from(json!({"id": 1})).is_err());
    }

    #[test]
    fn test_id_serializes_verbatim() {
        assert_eq!(serde_json::to_string(&PoiId::Number(3)).unwrap(), "3");
        assert_eq!(serde_json::to_string(&PoiId::from("a")).unwrap(), "\"a\"");
    }
}
