use thiserror::Error;

#[derive(Error, Debug)]
pub enum FindError {
    #[error("Usage error: {0}")]
    Usage(String),

    #[error("Failed to establish AWS session: {0}")]
    Session(String),

    #[error("{operation} failed: {message}")]
    Api {
        operation: &'static str,
        message: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FindError {
    pub fn api(operation: &'static str, message: impl Into<String>) -> Self {
        FindError::Api {
            operation,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FindError>;
