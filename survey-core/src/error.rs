use thiserror::Error;

/// Failure of the comment mutation. Every variant displays as its bare
/// message; that text is what the user sees in the error toast.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Request never got a response (offline, CORS, DNS).
    #[error("{0}")]
    Transport(String),
    /// Server answered with a non-success status.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// Request body could not be encoded.
    #[error("{0}")]
    Encode(String),
}

impl SubmitError {
    pub fn message(&self) -> String {
        self.to_string()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid api base url '{0}': expected http:// or https://")]
    InvalidBaseUrl(String),
    #[error("comment path '{0}' must start with '/'")]
    InvalidCommentPath(String),
}
