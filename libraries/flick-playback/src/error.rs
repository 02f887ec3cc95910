//! Error types for playback management

use flick_core::VideoId;
use thiserror::Error;

/// Playback errors
///
/// Every variant is non-fatal; the state machine is left unchanged by a
/// failed operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    /// The requested video does not exist in the library
    #[error("Video not found: {0}")]
    VideoNotFound(VideoId),

    /// No video is currently playing
    #[error("No video is currently playing")]
    NothingPlaying,

    /// The current video is already paused
    #[error("Video is already paused")]
    AlreadyPaused,

    /// The current video is not paused
    #[error("Video is not paused")]
    NotPaused,

    /// The library holds no videos to pick from
    #[error("The library is empty")]
    EmptyLibrary,
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
