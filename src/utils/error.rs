use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Failed to convert {entity}: {message}")]
    ConversionFailure { entity: String, message: String },

    #[error("{converter} does not support converting {direction}")]
    UnsupportedConversion {
        converter: String,
        direction: ConversionDirection,
    },

    #[error("No route mapping registered for '{route}'")]
    MappingNotFound { route: String },

    #[error(
        "Record {id} was updated by another transaction \
         (expected lock version {expected}, found {actual})"
    )]
    OptimisticLock { id: i32, expected: i32, actual: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionDirection {
    /// Domain to transfer model.
    To,
    /// Transfer to domain model.
    From,
}

impl std::fmt::Display for ConversionDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionDirection::To => write!(f, "to the transfer model"),
            ConversionDirection::From => write!(f, "from the transfer model"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Conversion,
    Validation,
    Concurrency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ConvertError {
    pub fn conversion(entity: &str, message: impl Into<String>) -> Self {
        ConvertError::ConversionFailure {
            entity: entity.to_string(),
            message: message.into(),
        }
    }

    pub fn unsupported(converter: &str, direction: ConversionDirection) -> Self {
        ConvertError::UnsupportedConversion {
            converter: converter.to_string(),
            direction,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        ConvertError::ConfigError {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ConvertError::ValidationError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ConvertError::IoError(_) | ConvertError::SerializationError(_) => ErrorCategory::Io,
            ConvertError::TomlError(_)
            | ConvertError::ConfigError { .. }
            | ConvertError::InvalidConfigValueError { .. }
            | ConvertError::MappingNotFound { .. } => ErrorCategory::Configuration,
            ConvertError::ConversionFailure { .. } | ConvertError::UnsupportedConversion { .. } => {
                ErrorCategory::Conversion
            }
            ConvertError::ValidationError { .. } => ErrorCategory::Validation,
            ConvertError::OptimisticLock { .. } => ErrorCategory::Concurrency,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation => ErrorSeverity::Low,
            ErrorCategory::Concurrency => ErrorSeverity::Medium,
            ErrorCategory::Conversion => ErrorSeverity::High,
            ErrorCategory::Io | ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ConvertError::IoError(e) => format!("Could not read or write a file: {}", e),
            ConvertError::SerializationError(e) => format!("Input is not valid JSON: {}", e),
            ConvertError::TomlError(e) => format!("Configuration file is not valid TOML: {}", e),
            ConvertError::MappingNotFound { route } => format!("Unknown route '{}'", route),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => {
                "Check that the input path exists and the output path is writable"
            }
            ErrorCategory::Configuration => {
                "Check the [[routes]] entries and converter names in the configuration file"
            }
            ErrorCategory::Conversion => {
                "Check the input record and the converter bound to the route"
            }
            ErrorCategory::Validation => "Fix the request data and try again",
            ErrorCategory::Concurrency => {
                "Reload the record to get the current lock version and retry"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
