//! predictform error types

/// predictform error types
#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    // Transport errors
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    // Data errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    // Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl PredictError {
    /// Whether the error happened on the way to or from the endpoint.
    ///
    /// These are the errors the submit handler renders as a failed request:
    /// connection problems, unreadable bodies and bodies that are not JSON.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            PredictError::Http(_) | PredictError::Api { .. } | PredictError::Json(_)
        )
    }
}

impl From<reqwest::Error> for PredictError {
    fn from(err: reqwest::Error) -> Self {
        PredictError::Http(err.to_string())
    }
}

/// Result type alias for predictform operations
pub type Result<T> = std::result::Result<T, PredictError>;
