use thiserror::Error;

#[derive(Error, Debug)]
pub enum AttrInitError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Diagnostic channel failed: {message}")]
    ReportChannel { message: String },

    #[error("Generation failed with {fatals} fatal diagnostic(s)")]
    GenerationFailed { fatals: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Model,
    Configuration,
    Reporting,
    Schema,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AttrInitError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError(_) => ErrorCategory::Io,
            Self::SerializationError(_) => ErrorCategory::Model,
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::ReportChannel { .. } => ErrorCategory::Reporting,
            Self::GenerationFailed { .. } => ErrorCategory::Schema,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorSeverity::Medium,
            Self::SerializationError(_) | Self::GenerationFailed { .. } => ErrorSeverity::High,
            Self::IoError(_) | Self::ReportChannel { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::IoError(_) => "Check that the input file exists and the output directory is writable".to_string(),
            Self::SerializationError(_) => {
                "Make sure the model file is a JSON document with a top-level \"classes\" array".to_string()
            }
            Self::ConfigValidationError { field, .. } | Self::MissingConfigError { field } => {
                format!("Review the `{}` setting in the configuration file or command line", field)
            }
            Self::InvalidConfigValueError { field, .. } => {
                format!("Provide a valid value for `{}`", field)
            }
            Self::ReportChannel { .. } => {
                "The diagnostic sink is broken; rerun with --verbose to see where it failed".to_string()
            }
            Self::GenerationFailed { .. } => {
                "Move the attrinit customization onto an attribute declaration that has a default value"
                    .to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("Could not read or write a file: {}", e),
            Self::SerializationError(e) => format!("The class model could not be parsed: {}", e),
            Self::GenerationFailed { fatals } => {
                format!("Initializer generation failed ({} error(s) reported above)", fatals)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AttrInitError>;
