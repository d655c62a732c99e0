//! Domain error types

use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur in the port picker
#[derive(Error, Debug)]
pub enum PortError {
    #[error("Unknown port record: {0}")]
    UnknownRecord(Uuid),

    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("Invalid port payload: {0}")]
    InvalidPayload(String),

    #[error("Not in a call")]
    NotInCall,

    #[error("Passcode cannot be empty")]
    InvalidPasscode,

    #[error("Failed to open link: {0}")]
    Opener(String),

    #[error("QR render error: {0}")]
    Render(String),
}

impl From<serde_json::Error> for PortError {
    fn from(e: serde_json::Error) -> Self {
        PortError::Encoding(e.to_string())
    }
}

/// Result type alias for port picker operations
pub type PortResult<T> = Result<T, PortError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_failures_become_encoding_errors() {
        let err: PortError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, PortError::Encoding(_)));
        assert!(err.to_string().starts_with("Encoding error: "));
    }

    #[test]
    fn messages_name_the_failure() {
        let id = Uuid::nil();
        assert_eq!(
            PortError::UnknownRecord(id).to_string(),
            format!("Unknown port record: {id}")
        );
        assert_eq!(PortError::NotInCall.to_string(), "Not in a call");
    }
}
