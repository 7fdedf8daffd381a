// src/db/memory_store.rs
// DOCUMENTATION: In-memory PoiStore used by handler and service tests

use super::PoiStore;
use crate::errors::MapError;
use crate::models::PoiRow;
use async_trait::async_trait;

pub enum MemoryPoiStore {
    Rows(Vec<PoiRow>),
    Failing(String),
}

#[async_trait]
impl PoiStore for MemoryPoiStore {
    async fn fetch_all_pois(&self) -> Result<Vec<PoiRow>, MapError> {
        match self {
            MemoryPoiStore::Rows(rows) => Ok(rows.clone()),
            MemoryPoiStore::Failing(message) => Err(MapError::DataAccess(message.clone())),
        }
    }
}
