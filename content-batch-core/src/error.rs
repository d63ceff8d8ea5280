//! Error types shared by the pipelines and API clients.

use std::path::PathBuf;

use thiserror::Error;

/// A single request against the content API failed.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The API answered with a status other than the expected one.
    #[error("status code {status}: {detail}")]
    Status { status: u16, detail: String },

    /// The request never produced a response (connection refused, timeout, ...).
    #[error("request failed: {0}")]
    Transport(String),

    /// A file to be uploaded could not be read.
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The response body was not the JSON the caller expected.
    #[error("could not decode response: {0}")]
    Decode(String),

    /// No request URL could be built for the target.
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// HTTP status carried by this error, if a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Conditions that end a run before any item is processed.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("No folder selected.")]
    NoFolderSelected,

    #[error("Invalid folder path: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("No {rule} found in {}.", .folder.display())]
    NoCandidates { folder: PathBuf, rule: &'static str },

    #[error("Could not read folder {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to fetch {plural}: {source}")]
    Listing {
        plural: &'static str,
        #[source]
        source: ApiError,
    },

    #[error("Unexpected response format: expected a list.")]
    UnexpectedFormat,
}
