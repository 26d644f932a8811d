use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl LookupError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            LookupError::ApiError(_)
            | LookupError::SerializationError(_)
            | LookupError::ProcessingError { .. } => "Connection error.".to_string(),
            LookupError::ConfigError { message } => format!("Configuration problem: {}", message),
            LookupError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration problem: {} ({})", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, LookupError>;
