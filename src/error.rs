use thiserror::Error;

/// Errors surfaced by the helper operations and their collaborators
#[derive(Error, Debug)]
pub enum HelperError {
    #[error("Failed to launch browser: {0}")]
    LaunchFailed(String),

    #[error("Failed to connect to browser: {0}")]
    ConnectionFailed(String),

    #[error("Tab operation failed: {0}")]
    TabOperationFailed(String),

    #[error("JavaScript evaluation failed: {0}")]
    EvaluationFailed(String),

    /// The host browser API could not service the call (missing API, no extension page, permission denied)
    #[error("Host browser API unavailable: {0}")]
    HostUnavailable(String),

    #[error("Settings store error: {0}")]
    Settings(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, HelperError>;
