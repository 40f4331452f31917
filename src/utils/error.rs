use thiserror::Error;

#[derive(Error, Debug)]
pub enum LessonError {
    #[error("{message}")]
    DomainError { message: String },

    #[error("Unknown speaker kind: {kind}")]
    UnknownSpeaker { kind: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Domain,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl LessonError {
    pub fn divide_by_zero() -> Self {
        Self::DomainError {
            message: "divisor must not be zero".to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DomainError { .. } => ErrorCategory::Domain,
            Self::UnknownSpeaker { .. }
            | Self::TomlError(_)
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Domain => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::DomainError { message } => message.clone(),
            Self::UnknownSpeaker { kind } => format!("No speaker named '{}'", kind),
            Self::IoError(e) => format!("Could not read or write a file: {}", e),
            Self::SerializationError(e) => format!("Could not encode output: {}", e),
            Self::TomlError(e) => format!("Config file is not valid TOML: {}", e),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::DomainError { .. } => "Use a non-zero divisor",
            Self::UnknownSpeaker { .. } => "Available speakers: dog",
            Self::IoError(_) => "Check that the path exists and is readable",
            Self::SerializationError(_) => "Retry without --json",
            Self::TomlError(_) => "Fix the config file and try again",
            Self::InvalidConfigValueError { .. } => "Correct the value and try again",
        }
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, LessonError>;
