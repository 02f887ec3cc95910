//! Core types for playback management

use flick_core::Video;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// No video in the playback slot
    Stopped,

    /// Currently playing
    Playing,

    /// Paused mid-video
    Paused,
}

/// The current video and its pause flag
///
/// Snapshot returned by [`PlaybackManager::now_playing`]; rendering it with
/// `Display` yields the catalog line with a ` - PAUSED` suffix when paused.
///
/// [`PlaybackManager::now_playing`]: crate::PlaybackManager::now_playing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NowPlaying {
    /// The video in the playback slot
    pub video: Video,

    /// Whether playback is paused
    pub paused: bool,
}

impl fmt::Display for NowPlaying {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.paused {
            write!(f, "{} - PAUSED", self.video)
        } else {
            write!(f, "{}", self.video)
        }
    }
}
