use thiserror::Error;

/// Main error type for the itinerary fetcher
#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("Rate limit exceeded: retry after {retry_after}s")]
    RateLimit { retry_after: u64 },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Model returned invalid JSON: {diagnostic}. Raw output: {raw}")]
    InvalidJson { diagnostic: String, raw: String },

    #[error("Missing required keys. Got: [{}]", .present.join(", "))]
    MissingKeys { present: Vec<String> },

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ScoutError>;

impl ScoutError {
    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            ScoutError::Http(_) => true,
            ScoutError::Api(_) => true,
            ScoutError::RateLimit { .. } => true,
            ScoutError::InvalidJson { .. } => true,
            _ => false,
        }
    }

    /// Get the error code for structured responses
    pub fn error_code(&self) -> &'static str {
        match self {
            ScoutError::Config(_) => "CONFIG_ERROR",
            ScoutError::Http(_) => "HTTP_ERROR",
            ScoutError::Api(_) => "API_ERROR",
            ScoutError::RateLimit { .. } => "RATE_LIMIT_ERROR",
            ScoutError::Serialization(_) => "SERIALIZATION_ERROR",
            ScoutError::InvalidJson { .. } => "INVALID_JSON",
            ScoutError::MissingKeys { .. } => "MISSING_KEYS",
            ScoutError::Validation(_) => "VALIDATION_ERROR",
        }
    }

    /// Convert to a structured error payload
    pub fn to_error_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
                "retryable": self.is_retryable()
            }
        })
    }
}
