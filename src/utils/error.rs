use thiserror::Error;

#[derive(Error, Debug)]
pub enum BootError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Entrypoint file not found: {path}")]
    MissingEntrypointError { path: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Handoff to '{program}' failed: {source}")]
    HandoffError {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, BootError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Config,
    Precondition,
    Io,
    Handoff,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BootError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BootError::IoError(_) | BootError::SerializationError(_) => ErrorCategory::Io,
            BootError::MissingEntrypointError { .. } => ErrorCategory::Precondition,
            BootError::InvalidConfigValueError { .. } => ErrorCategory::Config,
            BootError::HandoffError { .. } => ErrorCategory::Handoff,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            BootError::IoError(_) | BootError::SerializationError(_) => ErrorSeverity::Medium,
            BootError::MissingEntrypointError { .. } | BootError::InvalidConfigValueError { .. } => {
                ErrorSeverity::High
            }
            BootError::HandoffError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            BootError::IoError(_) => {
                "Check that the working directory exists and is readable".to_string()
            }
            BootError::SerializationError(_) => {
                "Re-run with --verbose to see the diagnostic payload".to_string()
            }
            BootError::MissingEntrypointError { path } => format!(
                "Make sure '{}' is present in the container working directory",
                path
            ),
            BootError::InvalidConfigValueError { field, .. } => {
                format!("Set {} to a valid value and restart the container", field)
            }
            BootError::HandoffError { program, .. } => format!(
                "Verify that '{}' is installed and the port is not already bound",
                program
            ),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            BootError::MissingEntrypointError { path } => {
                format!("Entrypoint file not found: {}", path)
            }
            BootError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("{}='{}' is invalid: {}", field, value, reason),
            other => other.to_string(),
        }
    }
}
