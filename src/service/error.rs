//! Service error taxonomy.

use miette::Diagnostic;
use thiserror::Error;
use tracing::error;

use crate::db::{DbError, TodoId};

/// Errors surfaced to transports. Each transport owns its own mapping
/// (HTTP status, MCP error code).
#[derive(Error, Diagnostic, Debug)]
pub enum ServiceError {
    #[error("{message}")]
    #[diagnostic(code(todos::service::validation))]
    Validation { message: String },

    #[error("Todo not found")]
    #[diagnostic(code(todos::service::not_found))]
    NotFound { id: TodoId },

    #[error("Store unavailable: {message}")]
    #[diagnostic(
        code(todos::service::store_unavailable),
        help("The request was not retried; check the store and try again")
    )]
    StoreUnavailable { message: String },
}

impl ServiceError {
    /// Missing required field.
    pub fn missing_field(field: &str) -> Self {
        ServiceError::Validation {
            message: format!("{}: field required", field),
        }
    }
}

impl From<DbError> for ServiceError {
    fn from(e: DbError) -> Self {
        if let DbError::NotFound { id, .. } = &e
            && let Ok(id) = id.parse()
        {
            return ServiceError::NotFound { id };
        }

        error!(error = %e, "Store operation failed");
        ServiceError::StoreUnavailable {
            message: e.to_string(),
        }
    }
}

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;
