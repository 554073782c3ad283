use thiserror::Error;

#[derive(Error, Debug)]
pub enum StringToolsError {
    #[error("{operation} requires a non-empty input")]
    EmptyInput { operation: &'static str },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl StringToolsError {
    /// 給終端使用者看的單行訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            StringToolsError::EmptyInput { operation } => {
                format!("Nothing to do: `{}` needs at least one character", operation)
            }
            StringToolsError::IoError(e) => format!("Could not read the file: {}", e),
            StringToolsError::TomlError(_) | StringToolsError::ConfigValidationError { .. } => {
                format!("The configuration file is malformed: {}", self)
            }
            StringToolsError::InvalidConfigValueError { field, reason, .. } => {
                format!("Please fix '{}' in the configuration: {}", field, reason)
            }
            StringToolsError::SerializationError(e) => format!("Could not format output: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, StringToolsError>;
