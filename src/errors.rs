// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Failure kinds of the GeoJSON pipeline and the client-facing envelope

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde::Serialize;
use thiserror::Error;

/// Fixed, human-readable label carried by every error envelope
pub const ERROR_LABEL: &str = "Erreur serveur";

/// Failures of the GeoJSON pipeline
/// DOCUMENTATION: Both kinds reach the client as the same 500 envelope,
/// the variants only matter for server-side logging and diagnostics
#[derive(Error, Debug)]
pub enum MapError {
    /// Store unreachable, pool exhausted, query rejected or row undecodable
    #[error("Database error: {0}")]
    DataAccess(String),

    /// A row's geometry text is not a GeoJSON geometry
    #[error("Invalid geometry for feature {id}: {message}")]
    Assembly { id: String, message: String },
}

impl From<sqlx::Error> for MapError {
    fn from(err: sqlx::Error) -> Self {
        MapError::DataAccess(err.to_string())
    }
}

/// Body of every failed response
/// DOCUMENTATION: `details` is only present in development mode
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorEnvelope {
    pub fn new(err: &MapError, expose_details: bool) -> Self {
        ErrorEnvelope {
            error: ERROR_LABEL,
            message: err.to_string(),
            details: expose_details.then(|| format!("{:#?}", err)),
        }
    }
}

/// HTTP-facing wrapper that knows whether diagnostics may leave the server
#[derive(Error, Debug)]
#[error("{error}")]
pub struct ApiError {
    pub error: MapError,
    pub expose_details: bool,
}

impl ApiError {
    pub fn new(error: MapError, expose_details: bool) -> Self {
        ApiError {
            error,
            expose_details,
        }
    }
}

/// Convert ApiError to HTTP response
/// DOCUMENTATION: Every failure kind maps to 500 with the same envelope shape
impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(ErrorEnvelope::new(&self.error, self.expose_details))
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}
