use thiserror::Error;

/// Client-side failure taxonomy for one submission cycle.
///
/// The `Display` output is the exact message shown to the user. Clipboard
/// failures are deliberately absent: copying is best-effort and only logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Rate limit exceeded. Please try again later (5 requests per 12 hours).")]
    RateLimited,

    #[error("Failed to process prompt. Please try again.")]
    RequestFailed,

    #[error("{0}")]
    Network(String),
}
