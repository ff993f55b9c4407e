use thiserror::Error;

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("Backend request failed: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("Authentication error: {message}")]
    AuthError { message: String },

    #[error("Authorization error: {message}")]
    AuthorizationError { message: String },

    #[error("Malformed backend data: {message}")]
    DataError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid configuration value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl MenuError {
    /// Short text suitable for a user-facing notice; details stay in the logs.
    pub fn user_message(&self) -> &'static str {
        match self {
            MenuError::TransportError(_) => "Could not reach the menu backend",
            MenuError::AuthError { .. } => "Authentication error",
            MenuError::AuthorizationError { .. } => {
                "You need admin privileges to access this page"
            }
            MenuError::DataError { .. } | MenuError::SerializationError(_) => {
                "Failed to load menu"
            }
            MenuError::IoError(_) => "Local storage error",
            MenuError::InvalidConfigValueError { .. } => "Invalid configuration",
        }
    }
}

pub type Result<T> = std::result::Result<T, MenuError>;
