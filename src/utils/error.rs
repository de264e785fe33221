use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReverseError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Missing element count on the first line")]
    MissingCountError,

    #[error("Invalid element count '{value}': {reason}")]
    InvalidCountError { value: String, reason: String },

    #[error("Missing element line: expected {declared} integers")]
    MissingElementsError { declared: usize },

    #[error("Invalid integer '{token}' at position {position}")]
    InvalidElementError { position: usize, token: String },

    #[error("Element count mismatch: declared {declared}, found {found}")]
    CountMismatchError { declared: usize, found: usize },

    #[error("Unexpected input on line {line}")]
    TrailingInputError { line: usize },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for '{field}' ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Io,
    Configuration,
    Serialization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ReverseError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ReverseError::IoError(_) => ErrorCategory::Io,
            ReverseError::SerializationError(_) => ErrorCategory::Serialization,
            ReverseError::ConfigError { .. }
            | ReverseError::MissingConfigError { .. }
            | ReverseError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            _ => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Io => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    /// True for errors caused by malformed count/element input.
    pub fn is_parse_error(&self) -> bool {
        self.category() == ErrorCategory::Input
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Could not read the input sequence: {}", self),
            ErrorCategory::Io => format!("Could not read or write data: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Serialization => format!("Could not encode or decode data: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ReverseError::MissingCountError | ReverseError::InvalidCountError { .. } => {
                "Put a single non-negative integer on the first line"
            }
            ReverseError::MissingElementsError { .. }
            | ReverseError::CountMismatchError { .. } => {
                "Make sure the second line holds exactly as many integers as the first line declares"
            }
            ReverseError::InvalidElementError { .. } => {
                "Separate the elements with whitespace and write each one as a decimal integer"
            }
            ReverseError::TrailingInputError { .. } => {
                "Remove everything after the second line"
            }
            ReverseError::IoError(_) => "Check that the input and output paths exist and are accessible",
            ReverseError::SerializationError(_) => "Check that the file is valid JSON",
            _ => "Check the command-line flags and the configuration file",
        }
    }
}

pub type Result<T> = std::result::Result<T, ReverseError>;
