use miette::Diagnostic;
use thiserror::Error;

use crate::api::ApiError as ServerError;
use crate::db::DbError;

#[derive(Error, Diagnostic, Debug)]
pub enum CliError {
    #[error("Failed to connect to API server")]
    #[diagnostic(
        code(todos::cli::connection_failed),
        help("Is the API server running? Try: todos serve\nOr pass --api-url to point to the correct server.")
    )]
    ConnectionFailed {
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid response from API server: {message}")]
    #[diagnostic(
        code(todos::cli::invalid_response),
        help(
            "The server returned data in an unexpected format. This might indicate a version mismatch."
        )
    )]
    InvalidResponse { message: String },

    #[error("API error ({status}): {message}")]
    #[diagnostic(code(todos::cli::api_error))]
    ApiError { status: u16, message: String },

    #[error("Store error: {0}")]
    #[diagnostic(code(todos::cli::store))]
    Store(#[from] DbError),

    #[error("API server error: {0}")]
    #[diagnostic(code(todos::cli::server))]
    Server(#[from] ServerError),
}

impl From<reqwest::Error> for CliError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            CliError::ConnectionFailed { source: e }
        } else {
            CliError::InvalidResponse {
                message: e.to_string(),
            }
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::InvalidResponse {
            message: e.to_string(),
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
