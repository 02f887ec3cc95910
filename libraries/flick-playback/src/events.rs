//! Playback events
//!
//! Event-based communication for caller synchronization. Every successful
//! state transition queues exactly one event; callers drain the queue in
//! emission order and derive their own user-facing text from the payload.

use flick_core::Video;
use serde::{Deserialize, Serialize};

/// Events emitted by the playback state machine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// The current video is being stopped, either explicitly or because a
    /// new video replaces it
    Stopping {
        /// The video leaving the playback slot
        video: Video,
    },

    /// A video started playing
    Playing {
        /// The video now occupying the playback slot
        video: Video,
    },

    /// The current video was paused
    Paused {
        /// The paused video
        video: Video,
    },

    /// The current video resumed playing
    Resumed {
        /// The resumed video
        video: Video,
    },
}
