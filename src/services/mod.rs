// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod assembler;
pub mod geojson_service;

pub use assembler::*;
pub use geojson_service::*;
