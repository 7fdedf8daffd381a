// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components

pub mod geojson;
pub mod health;

pub use geojson::config as geojson_config;
pub use health::config as health_config;
