use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RdwError {
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Timeout occurred while connecting to the RDW open data API (after {timeout:?})")]
    TimeoutError { timeout: Duration },

    #[error("Error occurred while communicating with the RDW open data API: {0}")]
    ConnectionError(#[source] reqwest::Error),

    #[error("RDW open data API responded with HTTP status {status}")]
    HttpStatusError { status: u16 },

    #[error("Unexpected response from the RDW open data API (Content-Type: {content_type:?})")]
    UnexpectedResponseError { content_type: String, body: String },

    #[error("Could not decode response from the RDW open data API: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("License plate {license_plate} not found in RDW database")]
    UnknownLicensePlateError { license_plate: String },

    #[error("Invalid value for field {field}: {message}")]
    ParseError { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<reqwest::Error> for RdwError {
    fn from(err: reqwest::Error) -> Self {
        RdwError::ConnectionError(err)
    }
}

/// Broad classification callers can match on without caring about the exact variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Connectivity,
    Protocol,
    NotFound,
    Parse,
}

impl RdwError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RdwError::ConfigError { .. }
            | RdwError::InvalidConfigValueError { .. }
            | RdwError::IoError(_) => ErrorKind::Configuration,
            RdwError::TimeoutError { .. }
            | RdwError::ConnectionError(_)
            | RdwError::HttpStatusError { .. } => ErrorKind::Connectivity,
            RdwError::UnexpectedResponseError { .. } | RdwError::DecodeError(_) => {
                ErrorKind::Protocol
            }
            RdwError::UnknownLicensePlateError { .. } => ErrorKind::NotFound,
            RdwError::ParseError { .. } => ErrorKind::Parse,
        }
    }

    /// Only connectivity failures are worth retrying; the client itself never does.
    pub fn is_retryable(&self) -> bool {
        self.kind() == ErrorKind::Connectivity
    }

    pub fn parse(field: impl Into<String>, message: impl Into<String>) -> Self {
        RdwError::ParseError {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.kind() {
            ErrorKind::Configuration => format!("Invalid setup: {}", self),
            ErrorKind::Connectivity => format!("Could not reach RDW: {}", self),
            ErrorKind::Protocol => format!("RDW returned something unexpected: {}", self),
            ErrorKind::NotFound => self.to_string(),
            ErrorKind::Parse => format!("RDW returned a vehicle we could not read: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.kind() {
            ErrorKind::Configuration => "Pass a license plate or check the configuration file",
            ErrorKind::Connectivity => "Check your network connection and try again",
            ErrorKind::Protocol => "The API contract may have changed; try again later",
            ErrorKind::NotFound => "Check the license plate for typos",
            ErrorKind::Parse => "Report the license plate so the field mapping can be updated",
        }
    }
}

pub type Result<T> = std::result::Result<T, RdwError>;
