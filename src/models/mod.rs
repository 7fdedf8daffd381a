// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod feature;
pub mod poi;

pub use feature::*;
pub use poi::*;
