use thiserror::Error;

#[derive(Error, Debug)]
pub enum PetError {
    #[error("A pet with the name {name} already exists")]
    DuplicateName { name: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Format error: {0}")]
    FormatError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Registry,
    Storage,
    Data,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PetError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PetError::DuplicateName { .. } => ErrorCategory::Registry,
            PetError::IoError(_) => ErrorCategory::Storage,
            PetError::FormatError(_) => ErrorCategory::Data,
            PetError::ConfigError { .. }
            | PetError::ConfigValidationError { .. }
            | PetError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Registry => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            PetError::DuplicateName { name } => {
                format!("Choose a different name, or delete '{}' first", name)
            }
            PetError::IoError(_) => {
                "Check that the data file path exists and is readable/writable".to_string()
            }
            PetError::FormatError(_) => {
                "The data file must be a JSON array of objects with name, species and owner"
                    .to_string()
            }
            PetError::ConfigError { .. } | PetError::ConfigValidationError { .. } => {
                "Check the configuration file syntax".to_string()
            }
            PetError::InvalidConfigValueError { field, .. } => {
                format!("Provide a valid value for '{}'", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PetError::DuplicateName { name } => format!("'{}' is already registered", name),
            PetError::IoError(e) => format!("Could not access the data file: {}", e),
            PetError::FormatError(e) => format!("The data file is not valid pet data: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PetError>;
