use thiserror::Error;

#[derive(Error, Debug)]
pub enum JsonError {
    #[error("Conversion error: {0}")]
    ConversionError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Mapper is already initialized")]
    MapperAlreadyInitialized,

    #[error("Logger initialization failed: {message}")]
    LoggerError { message: String },
}

pub type Result<T> = std::result::Result<T, JsonError>;
