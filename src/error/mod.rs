use thiserror::Error;

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Backend transport errors for the upstream analysis service
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// User-facing failures surfaced by the checker controller.
///
/// The display strings are part of the presentation contract; the UI shows
/// them verbatim.
#[derive(Debug, Error)]
pub enum CheckerError {
    #[error("Please enter some text to analyze.")]
    EmptyInput,

    #[error("Demo mode error. Please try again.")]
    DemoAuth,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Failed to get a response from the server.")]
    Server,

    /// An `error` field carried inside a 2xx body; shown verbatim.
    #[error("{message}")]
    Upstream { message: String },

    #[error("{message}")]
    Transport { message: String },
}

impl From<CheckerError> for AppError {
    fn from(err: CheckerError) -> Self {
        AppError::Internal {
            message: err.to_string(),
        }
    }
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

/// Result type alias for backend transport operations
pub type BackendResult<T> = Result<T, BackendError>;

/// Result type alias for checker controller operations
pub type CheckerResult<T> = Result<T, CheckerError>;
