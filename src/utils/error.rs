use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Backend returned {status} for {table}: {body}")]
    RemoteStatusError {
        table: String,
        status: u16,
        body: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Checkout error: {message}")]
    CheckoutError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Storage,
    Configuration,
    Input,
    Checkout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl QuoteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            QuoteError::ApiError(_) | QuoteError::RemoteStatusError { .. } => {
                ErrorCategory::Network
            }
            QuoteError::IoError(_) | QuoteError::SerializationError(_) => ErrorCategory::Storage,
            QuoteError::TomlError(_)
            | QuoteError::MissingConfigError { .. }
            | QuoteError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            QuoteError::ValidationError { .. } => ErrorCategory::Input,
            QuoteError::CheckoutError { .. } => ErrorCategory::Checkout,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Checkout => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Storage => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            QuoteError::ApiError(_) => "Check network connectivity and the backend URL",
            QuoteError::RemoteStatusError { status, .. } if *status == 401 || *status == 403 => {
                "Check that backend.anon_key is valid for this project"
            }
            QuoteError::RemoteStatusError { .. } => "The backend rejected the request, try again later",
            QuoteError::IoError(_) => "Check that the output path exists and is writable",
            QuoteError::SerializationError(_) => "The payload could not be encoded or decoded",
            QuoteError::TomlError(_) => "Fix the TOML syntax in the configuration or request file",
            QuoteError::MissingConfigError { .. } => "Add the missing field to quote-cart.toml",
            QuoteError::InvalidConfigValueError { .. } => "Correct the configuration value",
            QuoteError::ValidationError { .. } => "Correct the input and try again",
            QuoteError::CheckoutError { .. } => "Open the cart and add at least one service",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not reach the service backend ({})", self),
            ErrorCategory::Storage => format!("Could not save your quote request ({})", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Input => self.to_string(),
            ErrorCategory::Checkout => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, QuoteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_follows_category() {
        let err = QuoteError::MissingConfigError {
            field: "backend.url".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::Critical);

        let err = QuoteError::ValidationError {
            message: "email is required".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.user_friendly_message(), "Validation error: email is required");
    }

    #[test]
    fn test_auth_status_gets_key_hint() {
        let err = QuoteError::RemoteStatusError {
            table: "services".to_string(),
            status: 401,
            body: String::new(),
        };
        assert!(err.recovery_suggestion().contains("anon_key"));
        assert_eq!(err.category(), ErrorCategory::Network);
    }
}
