//! Welcome, health and discovery handlers.

use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use crate::mcp::manifest::{self, Manifest};

pub const WELCOME_MESSAGE: &str =
    "Welcome to the Todo List API! Visit /docs for API documentation.";

/// Welcome payload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WelcomeResponse {
    #[schema(example = "Welcome to the Todo List API! Visit /docs for API documentation.")]
    pub message: String,
}

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    #[schema(example = "ok")]
    pub status: String,
}

/// Welcome endpoint
#[utoipa::path(
    get,
    path = "/",
    tag = "system",
    responses(
        (status = 200, description = "Static welcome message", body = WelcomeResponse)
    )
)]
#[instrument]
pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE.to_string(),
    })
}

/// Health check endpoint
///
/// Returns the current health status of the API
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses(
        (status = 200, description = "Health check successful", body = HealthResponse)
    )
)]
#[instrument]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Operation manifest for automated clients.
///
/// Lists the CRUD operations with their input and output JSON schemas.
#[instrument]
pub async fn discovery_manifest() -> Json<Manifest> {
    Json(manifest::manifest())
}
