use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("API key is not a valid UUID: {0}")]
    MalformedKey(String),

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Hypixel API returned {status}: {cause}")]
    BadResponse { status: u16, cause: String },

    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Maps the `cause` field of a failed Hypixel reply
    pub fn from_cause(status: u16, cause: impl Into<String>) -> Self {
        let cause = cause.into();
        if cause.contains("Invalid API key") {
            ApiError::InvalidApiKey
        } else {
            ApiError::BadResponse { status, cause }
        }
    }

    pub fn is_invalid_key(&self) -> bool {
        matches!(self, ApiError::InvalidApiKey)
    }
}
