use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("No data: the pasted text is empty")]
    EmptyInput,

    #[error("Required columns missing: need 'Number' or 'Short description' (headers seen: {})", .headers.join(", "))]
    SchemaMismatch { headers: Vec<String> },

    #[error("Copy failed: primary clipboard ({primary}); fallback ({fallback})")]
    CopyFailure { primary: String, fallback: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

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

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Schema,
    Clipboard,
    Io,
    Configuration,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::EmptyInput => ErrorCategory::Input,
            EtlError::SchemaMismatch { .. } => ErrorCategory::Schema,
            EtlError::CopyFailure { .. } => ErrorCategory::Clipboard,
            EtlError::IoError(_) => ErrorCategory::Io,
            EtlError::ConfigValidationError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::MissingConfigError { .. } => ErrorCategory::Configuration,
            EtlError::CsvError(_)
            | EtlError::SerializationError(_)
            | EtlError::ProcessingError { .. } => ErrorCategory::Processing,
        }
    }

    /// 嚴重程度決定 CLI 的退出碼
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 輸出已經顯示，只是沒有複製成功
            EtlError::CopyFailure { .. } => ErrorSeverity::Low,
            EtlError::EmptyInput | EtlError::SchemaMismatch { .. } => ErrorSeverity::Medium,
            EtlError::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    /// Low still exits 0: the table was already printed.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::EmptyInput => "Please paste some data first.".to_string(),
            EtlError::SchemaMismatch { .. } => {
                "Could not find the 'Number' or 'Short description' column in the header row."
                    .to_string()
            }
            EtlError::CopyFailure { .. } => "Failed to copy the table to the clipboard.".to_string(),
            EtlError::IoError(e) => format!("Could not read or write data: {}", e),
            EtlError::MissingConfigError { field } => {
                format!("Configuration is missing '{}'.", field)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Copy the table including its header row and paste it again",
            ErrorCategory::Schema => {
                "Make sure the first line is the tab-separated header row exported from the ticket list"
            }
            ErrorCategory::Clipboard => {
                "Copy the printed table manually, or pass --clipboard-command with a working clipboard tool"
            }
            ErrorCategory::Io => "Check that the input file exists and is readable",
            ErrorCategory::Configuration => "Fix the configuration value and run again",
            ErrorCategory::Processing => "Re-run with --verbose and inspect the log output",
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
