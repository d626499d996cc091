use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::capabilities::HttpError;

/// A fetch that failed for a reason other than cancellation. Surfaced to the
/// presentation layer as an `Error` view state.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum FetchError {
    #[error("HTTP {status}")]
    Status { status: u16 },

    #[error("{0}")]
    Transport(String),

    #[error("{0}")]
    Decode(String),
}

impl From<HttpError> for FetchError {
    fn from(e: HttpError) -> Self {
        match e {
            HttpError::InvalidResponse { .. } => FetchError::Decode(e.to_string()),
            other => FetchError::Transport(other.to_string()),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse catalog config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    InvalidUrl(#[from] HttpError),

    #[error("page limit must be between 1 and {max}, got {value}")]
    InvalidPageLimit { value: u32, max: u32 },
}
