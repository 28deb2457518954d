use std::io;

/// Errors that can occur during kernel-runner operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Discovery error: {0}")]
    Discovery(String),

    #[error("Dependency install error: {0}")]
    Install(String),

    #[error("Selection storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("No usable Python interpreter found")]
    InterpreterNotFound,

    #[error("Not a usable interpreter: {0}")]
    InvalidInterpreter(String),

    #[error("Interpreter lookup was cancelled")]
    Cancelled,

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for kernel-runner operations
pub type Result<T> = std::result::Result<T, Error>;
