use std::fmt;

/// Custom error types for the bleeper engine
#[derive(Debug)]
pub enum BleeperError {
    /// Configuration validation errors
    Config { field: String, message: String },

    /// Transcript parsing errors
    Transcript { message: String },

    /// Wordset parsing errors
    WordSet { message: String },
}

impl fmt::Display for BleeperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BleeperError::Config { field, message } => {
                write!(f, "Configuration error in '{}': {}", field, message)
            }
            BleeperError::Transcript { message } => {
                write!(f, "Transcript error: {}", message)
            }
            BleeperError::WordSet { message } => {
                write!(f, "Wordset error: {}", message)
            }
        }
    }
}

impl std::error::Error for BleeperError {}

/// Result type alias for bleeper operations
pub type Result<T> = std::result::Result<T, BleeperError>;

/// Helper function to create configuration errors
pub fn config_error(field: impl Into<String>, message: impl Into<String>) -> BleeperError {
    BleeperError::Config {
        field: field.into(),
        message: message.into(),
    }
}

/// Helper function to create transcript errors
pub fn transcript_error(message: impl Into<String>) -> BleeperError {
    BleeperError::Transcript {
        message: message.into(),
    }
}

/// Helper function to create wordset errors
pub fn wordset_error(message: impl Into<String>) -> BleeperError {
    BleeperError::WordSet {
        message: message.into(),
    }
}
