//! Playback manager - the single-slot playback state machine
//!
//! Owns the "currently playing" video and its pause flag. All operations
//! mutate through `&mut self` and queue [`PlaybackEvent`]s for the caller to
//! drain; a failed operation leaves both the state and the event queue
//! untouched.

use crate::error::{PlaybackError, Result};
use crate::events::PlaybackEvent;
use crate::types::{NowPlaying, PlaybackState};
use flick_core::{Video, VideoId, VideoLibrary};
use rand::Rng;
use std::sync::Arc;
use tracing::{debug, warn};

/// Single-slot playback state machine over a read-only video library
///
/// Invariant: the pause flag is set only while a video occupies the slot.
/// Construct one instance per session; instances are fully independent.
pub struct PlaybackManager {
    /// Read-only catalog used to validate and resolve video IDs
    library: Arc<dyn VideoLibrary>,

    /// The video currently occupying the playback slot
    current: Option<VideoId>,

    /// Whether the current video is paused
    paused: bool,

    /// Event queue for caller synchronization
    pending_events: Vec<PlaybackEvent>,
}

impl PlaybackManager {
    /// Create a new playback manager with nothing playing
    pub fn new(library: Arc<dyn VideoLibrary>) -> Self {
        Self {
            library,
            current: None,
            paused: false,
            pending_events: Vec::new(),
        }
    }

    // ===== Playback Control =====

    /// Play a video by ID
    ///
    /// Stops the current video first when one is playing or paused. Fails
    /// with [`PlaybackError::VideoNotFound`] when the ID is not in the
    /// library, leaving the state machine untouched.
    pub fn play(&mut self, id: &VideoId) -> Result<()> {
        let video = self
            .library
            .video(id)
            .ok_or_else(|| PlaybackError::VideoNotFound(id.clone()))?;

        if self.current.is_some() {
            self.emit_stopping();
        }

        debug!("Playing video {}", video.id);
        self.current = Some(video.id.clone());
        self.paused = false;
        self.pending_events.push(PlaybackEvent::Playing { video });
        Ok(())
    }

    /// Play a uniformly random video from the library
    ///
    /// Every call is an independent draw over the full library; the current
    /// video is not excluded. Fails with [`PlaybackError::EmptyLibrary`]
    /// when there is nothing to pick from. Returns the chosen ID.
    pub fn play_random(&mut self) -> Result<VideoId> {
        let videos = self.library.all_videos();
        if videos.is_empty() {
            return Err(PlaybackError::EmptyLibrary);
        }

        let index = rand::thread_rng().gen_range(0..videos.len());
        let id = videos[index].id.clone();
        self.play(&id)?;
        Ok(id)
    }

    /// Stop the current video
    ///
    /// Fails with [`PlaybackError::NothingPlaying`] when the slot is empty.
    pub fn stop(&mut self) -> Result<()> {
        if self.current.is_none() {
            return Err(PlaybackError::NothingPlaying);
        }

        self.emit_stopping();
        self.current = None;
        self.paused = false;
        Ok(())
    }

    /// Pause the current video
    ///
    /// Fails with [`PlaybackError::NothingPlaying`] when the slot is empty
    /// and [`PlaybackError::AlreadyPaused`] when already paused; neither
    /// failure changes any state.
    pub fn pause(&mut self) -> Result<()> {
        let video = self.current_video().ok_or(PlaybackError::NothingPlaying)?;
        if self.paused {
            return Err(PlaybackError::AlreadyPaused);
        }

        debug!("Pausing video {}", video.id);
        self.paused = true;
        self.pending_events.push(PlaybackEvent::Paused { video });
        Ok(())
    }

    /// Resume the paused video
    ///
    /// Fails with [`PlaybackError::NothingPlaying`] when the slot is empty
    /// and [`PlaybackError::NotPaused`] when the video is playing.
    pub fn resume(&mut self) -> Result<()> {
        let video = self.current_video().ok_or(PlaybackError::NothingPlaying)?;
        if !self.paused {
            return Err(PlaybackError::NotPaused);
        }

        debug!("Resuming video {}", video.id);
        self.paused = false;
        self.pending_events.push(PlaybackEvent::Resumed { video });
        Ok(())
    }

    // ===== Queries =====

    /// Snapshot of the current video and its pause flag
    ///
    /// Pure read; fails with [`PlaybackError::NothingPlaying`] when the slot
    /// is empty.
    pub fn now_playing(&self) -> Result<NowPlaying> {
        let video = self.current_video().ok_or(PlaybackError::NothingPlaying)?;
        Ok(NowPlaying {
            video,
            paused: self.paused,
        })
    }

    /// Current playback state
    pub fn state(&self) -> PlaybackState {
        match (&self.current, self.paused) {
            (None, _) => PlaybackState::Stopped,
            (Some(_), false) => PlaybackState::Playing,
            (Some(_), true) => PlaybackState::Paused,
        }
    }

    /// ID of the video occupying the playback slot, if any
    pub fn current_video_id(&self) -> Option<&VideoId> {
        self.current.as_ref()
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns the events queued since the last drain, in emission order.
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    fn current_video(&self) -> Option<Video> {
        self.current.as_ref().and_then(|id| self.library.video(id))
    }

    fn emit_stopping(&mut self) {
        if let Some(video) = self.current_video() {
            debug!("Stopping video {}", video.id);
            self.pending_events.push(PlaybackEvent::Stopping { video });
        } else if let Some(id) = &self.current {
            // Membership was validated when the video entered the slot; the
            // library is fixed for the process lifetime.
            warn!("Current video {} no longer resolves in the library", id);
        }
    }
}
