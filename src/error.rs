use thiserror::Error;

/// Failures of a single request cycle against the backend.
#[derive(Debug, Error)]
pub enum ClientError {
    /// No response arrived (connect, TLS, body read).
    #[error("network request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// `/plan-week` answered with a non-success status. Detail is dropped.
    #[error("Server error")]
    Server,

    /// `/image-nutrition` answered with a non-success status.
    #[error("Upload failed ({status}): {body}")]
    Upload { status: u16, body: String },

    #[error("invalid response from server: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("could not read image '{locator}': {source}")]
    LocalImage {
        locator: String,
        #[source]
        source: std::io::Error,
    },

    #[error("image locator is not a valid data URI")]
    InvalidDataUri,
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Upload { status, .. } => Some(*status),
            ClientError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
