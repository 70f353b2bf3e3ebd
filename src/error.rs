use std::io;
use thiserror::Error;

use crate::protocol::RemoteException;

pub type WebHdfsResult<T> = Result<T, Error>;

/// Enum for client errors
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The server answered with a status outside the success range
    #[error("Remote: {status}: {body}")]
    Remote { status: u16, body: String },
    /// The transport failed to deliver the request or receive the response
    #[error("Transport: {0}")]
    Transport(String),
    /// Any errors related to local I/O
    #[error("I/O: {0}")]
    IO(String),
    /// The response body could not be decoded into the expected shape
    #[error("Deserialize: {0}")]
    Deserialize(String),
    /// The caller cancelled the operation
    #[error("Cancelled")]
    Cancelled,
    /// Invalid construction parameters
    #[error("Config: {0}")]
    Config(String),
}

impl Error {
    /// Status code of a remote failure.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Parses the `RemoteException` carried in the body of a remote failure.
    #[must_use]
    pub fn remote_exception(&self) -> Option<RemoteException> {
        match self {
            Self::Remote { body, .. } => RemoteException::from_body(body),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        let cancelled = err
            .get_ref()
            .and_then(|inner| inner.downcast_ref::<Error>())
            .is_some_and(Error::is_cancelled);

        if cancelled {
            Self::Cancelled
        } else {
            Self::IO(err.to_string())
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Deserialize(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
