//! Flick Player - Playback Management
//!
//! Single-slot playback state machine for Flick Player.
//!
//! This crate provides:
//! - Play/stop/pause/resume over one "current" video
//! - Uniform random playback across the library
//! - A queryable now-playing snapshot
//! - Event emission for caller synchronization
//!
//! # Architecture
//!
//! `flick-playback` is completely platform-agnostic: the video catalog is
//! consumed through the [`flick_core::VideoLibrary`] trait and never mutated.
//! The manager is a plain owned struct; every session constructs its own
//! instance and drives it through `&mut self` operations. Failed operations
//! return a typed [`PlaybackError`] and leave the state machine untouched.
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use std::sync::Arc;
//! use flick_core::{InMemoryVideoLibrary, Video, VideoId};
//! use flick_playback::{PlaybackManager, PlaybackState};
//!
//! let library = Arc::new(InMemoryVideoLibrary::from_videos([
//!     Video::new("amazing_cats_video_id", "Amazing Cats", ["#cat", "#animal"]),
//! ]));
//!
//! let mut manager = PlaybackManager::new(library);
//!
//! manager.play(&VideoId::new("amazing_cats_video_id")).unwrap();
//! assert_eq!(manager.state(), PlaybackState::Playing);
//!
//! manager.pause().unwrap();
//! assert_eq!(manager.state(), PlaybackState::Paused);
//!
//! // Drain the queued notifications for display.
//! for event in manager.drain_events() {
//!     println!("{:?}", event);
//! }
//! ```

#![forbid(unsafe_code)]

mod error;
mod events;
mod manager;
pub mod types;

// Public exports
pub use error::{PlaybackError, Result};
pub use events::PlaybackEvent;
pub use manager::PlaybackManager;
pub use types::{NowPlaying, PlaybackState};
