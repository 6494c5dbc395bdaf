//! Error types for checking API responses.

use ovirt_core::ReadError;
use ovirt_types::Fault;
use thiserror::Error;

/// Error type for API responses.
#[derive(Debug, Error)]
pub enum SdkError {
    /// The engine rejected the credentials (HTTP 401 or 403).
    #[error("{message}")]
    Auth {
        /// Description built from the response.
        message: String,
        /// HTTP status code.
        code: u16,
        /// Fault returned by the engine, if any.
        fault: Option<Box<Fault>>,
    },

    /// The requested object does not exist (HTTP 404).
    #[error("{message}")]
    NotFound {
        /// Description built from the response.
        message: String,
        /// HTTP status code.
        code: u16,
        /// Fault returned by the engine, if any.
        fault: Option<Box<Fault>>,
    },

    /// Any other failed request.
    #[error("{message}")]
    Fault {
        /// Description built from the response.
        message: String,
        /// HTTP status code.
        code: u16,
        /// Fault returned by the engine, if any.
        fault: Option<Box<Fault>>,
    },

    /// The response body could not be read.
    #[error("XML read error: {0}")]
    Read(#[from] ReadError),
}

impl SdkError {
    /// Creates the error matching an HTTP status code.
    pub fn from_status(code: u16, message: impl Into<String>, fault: Option<Fault>) -> Self {
        let message = message.into();
        let fault = fault.map(Box::new);
        match code {
            401 | 403 => Self::Auth {
                message,
                code,
                fault,
            },
            404 => Self::NotFound {
                message,
                code,
                fault,
            },
            _ => Self::Fault {
                message,
                code,
                fault,
            },
        }
    }

    /// Returns the HTTP status code, if the error came from a response.
    #[must_use]
    pub fn code(&self) -> Option<u16> {
        match self {
            Self::Auth { code, .. } | Self::NotFound { code, .. } | Self::Fault { code, .. } => {
                Some(*code)
            }
            Self::Read(_) => None,
        }
    }

    /// Returns the fault sent by the engine, if any.
    #[must_use]
    pub fn fault(&self) -> Option<&Fault> {
        match self {
            Self::Auth { fault, .. } | Self::NotFound { fault, .. } | Self::Fault { fault, .. } => {
                fault.as_deref()
            }
            Self::Read(_) => None,
        }
    }
}

/// Result type for API responses.
pub type Result<T> = std::result::Result<T, SdkError>;
