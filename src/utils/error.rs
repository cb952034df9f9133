use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("No CSV folder found (searched: {})", .searched.join(", "))]
    NoInputFolder { searched: Vec<String> },

    #[error("No CSV files found in {folder}")]
    NoCsvFiles { folder: String },

    #[error("No products were converted")]
    NoProducts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Processing,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    High,
    Critical,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::NoInputFolder { .. } | EtlError::NoCsvFiles { .. } | EtlError::NoProducts => {
                ErrorCategory::Input
            }
            EtlError::ConfigValidationError { .. } | EtlError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            EtlError::CsvError(_) => ErrorCategory::Processing,
            EtlError::IoError(_) | EtlError::SerializationError(_) => ErrorCategory::System,
        }
    }

    /// Input errors end the run without output but are not failures.
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Configuration | ErrorCategory::Processing => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            EtlError::NoInputFolder { .. } => {
                "Place CSV files in data/csv/ or pass the folder path: csv-to-json <path-to-csv-folder>"
                    .to_string()
            }
            EtlError::NoCsvFiles { folder } => {
                format!("Please place your CSV files in: {}", folder)
            }
            EtlError::NoProducts => {
                "Check that the CSV headers contain a name and a price column".to_string()
            }
            EtlError::CsvError(_) => {
                "Make sure the file is UTF-8 encoded and has a header row".to_string()
            }
            EtlError::IoError(_) => {
                "Check that the input files are readable and the output path is writable"
                    .to_string()
            }
            EtlError::SerializationError(_) => {
                "Inspect the input rows for values that cannot be represented in JSON".to_string()
            }
            EtlError::ConfigValidationError { .. } | EtlError::InvalidConfigValueError { .. } => {
                "Review the command line arguments and the TOML configuration file".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::NoInputFolder { .. } => "No CSV files found!".to_string(),
            EtlError::NoCsvFiles { folder } => format!("No CSV files found in {}", folder),
            EtlError::NoProducts => "No products were converted.".to_string(),
            EtlError::CsvError(e) => format!("Could not read CSV data: {}", e),
            EtlError::IoError(e) => format!("File system error: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
