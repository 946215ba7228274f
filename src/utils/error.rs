use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid contact '{contact}': {reason}")]
    InvalidContact { contact: String, reason: String },

    #[error("Invalid verification code: {reason}")]
    InvalidCode { reason: String },

    #[error("Verification code delivery failed: {reason}")]
    DeliveryFailed { reason: String },

    #[error("Verification code rejected")]
    VerificationRejected,

    #[error("Verification gateway timed out after {millis}ms")]
    GatewayTimeout { millis: u64 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Session storage error: {message}")]
    StorageError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Delivery,
    Verification,
    Storage,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AppError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::InvalidContact { .. } | AppError::InvalidCode { .. } => {
                ErrorCategory::Validation
            }
            AppError::DeliveryFailed { .. } | AppError::GatewayTimeout { .. } => {
                ErrorCategory::Delivery
            }
            AppError::VerificationRejected => ErrorCategory::Verification,
            AppError::IoError(_)
            | AppError::SerializationError(_)
            | AppError::StorageError { .. } => ErrorCategory::Storage,
            AppError::ConfigError { .. }
            | AppError::ConfigValidationError { .. }
            | AppError::InvalidConfigValueError { .. }
            | AppError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation | ErrorCategory::Verification => ErrorSeverity::Low,
            ErrorCategory::Delivery => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    /// 對應到文本資源中給使用者看的訊息鍵
    pub fn message_key(&self) -> Option<&'static str> {
        match self {
            AppError::InvalidContact { .. } => Some("login.phone.error"),
            AppError::InvalidCode { .. } => Some("login.verify.error"),
            AppError::VerificationRejected => Some("login.verify.wrong"),
            AppError::DeliveryFailed { .. } | AppError::GatewayTimeout { .. } => {
                Some("login.phone.send_failed")
            }
            _ => None,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Validation => "Check the phone number or code format and submit again",
            ErrorCategory::Delivery => "Request a new code; check the gateway endpoint if this persists",
            ErrorCategory::Verification => "Re-enter the code from the latest SMS",
            ErrorCategory::Storage => "Check that the data directory is writable",
            ErrorCategory::Configuration => "Fix the configuration file and run again",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::InvalidContact { contact, .. } => {
                format!("'{}' is not a valid phone number", contact)
            }
            AppError::InvalidCode { .. } => "Please enter the 6-digit verification code".to_string(),
            AppError::VerificationRejected => "Incorrect verification code".to_string(),
            AppError::DeliveryFailed { .. } => "Failed to send verification code".to_string(),
            AppError::GatewayTimeout { .. } => "The verification service did not respond".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<toml::de::Error> for AppError {
    fn from(e: toml::de::Error) -> Self {
        AppError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_and_rejection_are_distinct() {
        let delivery = AppError::DeliveryFailed {
            reason: "503".to_string(),
        };
        let rejected = AppError::VerificationRejected;

        assert_ne!(delivery.category(), rejected.category());
        assert_ne!(delivery.message_key(), rejected.message_key());
        assert_eq!(rejected.message_key(), Some("login.verify.wrong"));
    }

    #[test]
    fn test_validation_errors_are_low_severity() {
        let err = AppError::InvalidCode {
            reason: "expected 6 digits".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.message_key(), Some("login.verify.error"));
    }
}
