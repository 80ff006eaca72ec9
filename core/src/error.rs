use serde::Serialize;
use thiserror::Error;

/// Error type for the fallible surfaces around the classifier.
///
/// Classification itself never fails; these cover configuration, binding
/// the listener and reading input.
#[derive(Error, Debug, Serialize)]
#[serde(tag = "type", content = "details")]
pub enum AppError {
    #[error("Config error: {message}")]
    Config { message: String },

    #[error("Failed to bind {addr}: {message}")]
    Bind { addr: String, message: String },

    #[error("IO error: {message}")]
    Io { message: String },
}

impl AppError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn bind(addr: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Bind {
            addr: addr.into(),
            message: message.into(),
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Whether retrying the same operation might succeed.
    pub fn is_recoverable(&self) -> bool {
        match self {
            // Port may be freed, IO may be transient
            Self::Bind { .. } | Self::Io { .. } => true,
            Self::Config { .. } => false,
        }
    }

    /// Process exit code for a binary that stops on this error:
    /// `EX_TEMPFAIL` (75) when a restart may succeed, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.is_recoverable() {
            75
        } else {
            1
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::io(err.to_string())
    }
}
