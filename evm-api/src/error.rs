/// Error types for API calls
use evm_model::NormalizeError;
use thiserror::Error;

/// Anything that can go wrong talking to the backend.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The fetch promise rejected (network unreachable, CORS, etc.).
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP error! status: {status} - {status_text}")]
    Http { status: u16, status_text: String },

    /// The body was not valid JSON, or did not match the expected type.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// The body parsed but matched no recognized schema, or carried an
    /// explicit error field.
    #[error(transparent)]
    Shape(#[from] NormalizeError),

    /// A browser API was unavailable or refused a well-formed call.
    #[error("JavaScript interop failed: {0}")]
    Js(String),
}

impl ApiError {
    /// Categorized user-facing message for a failed load.
    ///
    /// 404 points at URL configuration, 500 at the server, a transport
    /// failure at connectivity; everything else carries the raw error text.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Http { status: 404, .. } => {
                "API endpoints not found. Please check your URLs configuration.".to_owned()
            }
            ApiError::Http { status: 500, .. } => {
                "Server error. Please check your API views and database.".to_owned()
            }
            ApiError::Network(_) => {
                "Network error. Please check if the server is running.".to_owned()
            }
            other => format!("Error loading events: {other}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_a_configuration_error() {
        let error = ApiError::Http {
            status: 404,
            status_text: "Not Found".to_owned(),
        };
        assert!(error.user_message().contains("URLs configuration"));
    }

    #[test]
    fn internal_error_blames_the_server() {
        let error = ApiError::Http {
            status: 500,
            status_text: "Internal Server Error".to_owned(),
        };
        assert!(error.user_message().contains("Server error"));
    }

    #[test]
    fn transport_failure_is_a_connectivity_error() {
        let error = ApiError::Network("Failed to fetch".to_owned());
        assert!(error.user_message().contains("server is running"));
    }

    #[test]
    fn other_failures_surface_the_underlying_text() {
        let error = ApiError::Shape(NormalizeError::Api("boom".to_owned()));
        assert_eq!(error.user_message(), "Error loading events: API Error: boom");

        let error = ApiError::Http {
            status: 403,
            status_text: "Forbidden".to_owned(),
        };
        assert!(error.user_message().contains("403"));
    }
}
