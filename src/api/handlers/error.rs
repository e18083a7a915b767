//! Request error mapping.
//!
//! The only place service errors and extractor rejections become HTTP
//! statuses.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::service::ServiceError;

/// Error body returned for every non-2xx response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Todo not found")]
    pub detail: String,
}

/// Everything a todo handler can fail with.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("{}", .0.body_text())]
    Body(#[from] JsonRejection),

    #[error("{}", .0.body_text())]
    Path(#[from] PathRejection),
}

impl RequestError {
    fn status_and_detail(&self) -> (StatusCode, String) {
        match self {
            RequestError::Service(ServiceError::Validation { message }) => {
                (StatusCode::UNPROCESSABLE_ENTITY, message.clone())
            }
            RequestError::Service(e @ ServiceError::NotFound { .. }) => {
                (StatusCode::NOT_FOUND, e.to_string())
            }
            RequestError::Service(ServiceError::StoreUnavailable { .. }) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Store unavailable".to_string(),
            ),
            RequestError::Body(rejection) => (rejection.status(), rejection.body_text()),
            RequestError::Path(rejection) => (rejection.status(), rejection.body_text()),
        }
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let (status, detail) = self.status_and_detail();
        (status, Json(ErrorResponse { detail })).into_response()
    }
}
