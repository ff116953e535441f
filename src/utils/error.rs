use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeoError {
    #[error("Invalid input for {field} ({value}): {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in {field}: {message}")]
    ConfigError { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl GeoError {
    pub fn invalid_input(field: &str, value: impl Into<String>, reason: impl Into<String>) -> Self {
        GeoError::InvalidInput {
            field: field.to_string(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn config(field: &str, message: impl Into<String>) -> Self {
        GeoError::ConfigError {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// 只有輸入錯誤會中止單次比較，其他錯誤都是致命的
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GeoError::InvalidInput { .. })
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GeoError::InvalidInput { reason, .. } => reason.clone(),
            GeoError::ConfigError { field, message } => {
                format!("Invalid configuration `{}`: {}", field, message)
            }
            GeoError::IoError(e) => format!("Terminal I/O failed: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GeoError::InvalidInput { .. } => "Enter positive numbers for a, r and n",
            GeoError::ConfigError { .. } => {
                "Check the configuration file and command line overrides"
            }
            GeoError::IoError(_) => "Make sure standard input and output are available",
        }
    }
}

pub type Result<T> = std::result::Result<T, GeoError>;
