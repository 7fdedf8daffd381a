// src/db/mod.rs
// DOCUMENTATION: Database module organization
// PURPOSE: Re-export database components

#[cfg(test)]
pub mod memory_store;
pub mod poi_repository;

#[cfg(test)]
pub use memory_store::*;
pub use poi_repository::*;
