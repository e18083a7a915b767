use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::api::ErrorResponse;
use crate::cli::error::{CliError, CliResult};

/// Default base URL of the todo API.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// API client for communicating with the todo REST API
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    /// Create a new API client for the given base URL.
    ///
    /// A trailing slash on the URL is ignored.
    pub fn new(api_url: impl Into<String>) -> Self {
        let base_url = api_url.into().trim_end_matches('/').to_string();

        Self {
            base_url,
            client: Client::new(),
        }
    }

    /// Get the base URL being used
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Create a GET request builder
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.get(self.url(path))
    }

    /// Create a POST request builder
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.post(self.url(path))
    }

    /// Create a PUT request builder
    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.put(self.url(path))
    }

    /// Create a DELETE request builder
    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.delete(self.url(path))
    }

    /// Handle API response with standardized error handling
    ///
    /// Returns the deserialized response body on success,
    /// or a CliError::ApiError on non-success status codes.
    pub async fn handle_response<T: DeserializeOwned>(response: Response) -> CliResult<T> {
        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| CliError::InvalidResponse {
                    message: e.to_string(),
                })
        } else {
            Err(Self::api_error(response).await)
        }
    }

    /// Like [`handle_response`](Self::handle_response) for responses without a body.
    pub async fn handle_empty_response(response: Response) -> CliResult<()> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::api_error(response).await)
        }
    }

    /// Build an ApiError, preferring the server's `detail` over the raw body.
    async fn api_error(response: Response) -> CliError {
        let status = response.status().as_u16();
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let message = serde_json::from_str::<ErrorResponse>(&error_text)
            .map(|e| e.detail)
            .unwrap_or(error_text);
        CliError::ApiError { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_with_explicit_url() {
        let client = ApiClient::new("http://custom:8080");
        assert_eq!(client.base_url(), "http://custom:8080");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://custom:8080/");
        assert_eq!(client.base_url(), "http://custom:8080");
        assert_eq!(client.url("/todos"), "http://custom:8080/todos");
    }

    #[test]
    fn test_default_url() {
        let client = ApiClient::new(DEFAULT_API_URL);
        assert_eq!(client.base_url(), "http://127.0.0.1:8000");
    }

    // handle_response is tested via integration tests with real API
}
