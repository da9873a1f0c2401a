use thiserror::Error;

#[derive(Error, Debug)]
pub enum LogoError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Failed to load {url}: {reason}")]
    LoadFailed { url: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    System,
}

impl LogoError {
    pub fn load_failed(url: &str, reason: impl Into<String>) -> Self {
        LogoError::LoadFailed {
            url: url.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            LogoError::HttpError(_) | LogoError::LoadFailed { .. } => ErrorCategory::Network,
            LogoError::ConfigError { .. }
            | LogoError::MissingConfigError { .. }
            | LogoError::InvalidConfigValueError { .. }
            | LogoError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            LogoError::IoError(_) | LogoError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            LogoError::HttpError(_) | LogoError::LoadFailed { .. } => {
                "Check network connectivity or increase loader.timeout_seconds"
            }
            LogoError::MissingConfigError { .. } => "Add the missing field to the config file",
            LogoError::InvalidConfigValueError { .. } | LogoError::ConfigValidationError { .. } => {
                "Fix the reported value in the config file and try again"
            }
            LogoError::ConfigError { .. } => "Check the config file syntax",
            LogoError::IoError(_) => "Check that the path exists and is readable",
            LogoError::SerializationError(_) => "Report this as a bug",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Network problem: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, LogoError>;
