//! Error types for the Flick Player core

use crate::types::VideoId;
use thiserror::Error;

/// Result type alias using [`FlickError`]
pub type Result<T> = std::result::Result<T, FlickError>;

/// Core error type for catalog queries and the flag registry
///
/// Every variant is non-fatal and recoverable; callers decide how a failure
/// kind is surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlickError {
    /// The requested video does not exist in the library
    #[error("Video not found: {0}")]
    VideoNotFound(VideoId),

    /// A search produced no results
    #[error("No results for: {0}")]
    NoMatches(String),

    /// The video already carries a flag
    #[error("Video already flagged: {0}")]
    AlreadyFlagged(VideoId),

    /// The video carries no flag
    #[error("Video is not flagged: {0}")]
    NotFlagged(VideoId),
}
