//! Flag registry
//!
//! Out-of-band moderation state: a video can be flagged with an optional
//! reason, which withholds it from default-scope catalog searches until the
//! flag is lifted. The registry never touches the library itself.

use crate::error::{FlickError, Result};
use crate::library::VideoLibrary;
use crate::types::VideoId;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::debug;

/// Flag state keyed by video ID
#[derive(Debug, Default)]
pub struct FlagRegistry {
    reasons: HashMap<VideoId, Option<String>>,
}

impl FlagRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Flag a video, withholding it from default-scope searches
    ///
    /// Fails with [`FlickError::VideoNotFound`] when the ID is not in the
    /// library and [`FlickError::AlreadyFlagged`] when a flag is already
    /// present; the existing reason is never overwritten.
    pub fn flag(
        &mut self,
        library: &dyn VideoLibrary,
        id: &VideoId,
        reason: Option<&str>,
    ) -> Result<()> {
        if library.video(id).is_none() {
            return Err(FlickError::VideoNotFound(id.clone()));
        }

        match self.reasons.entry(id.clone()) {
            Entry::Occupied(_) => Err(FlickError::AlreadyFlagged(id.clone())),
            Entry::Vacant(slot) => {
                debug!("Flagging video {}", id);
                slot.insert(reason.map(str::to_string));
                Ok(())
            }
        }
    }

    /// Lift the flag from a video
    ///
    /// Fails with [`FlickError::VideoNotFound`] when the ID is not in the
    /// library and [`FlickError::NotFlagged`] when no flag exists.
    pub fn allow(&mut self, library: &dyn VideoLibrary, id: &VideoId) -> Result<()> {
        if library.video(id).is_none() {
            return Err(FlickError::VideoNotFound(id.clone()));
        }
        if self.reasons.remove(id).is_none() {
            return Err(FlickError::NotFlagged(id.clone()));
        }

        debug!("Lifted flag from video {}", id);
        Ok(())
    }

    /// Whether the video is currently flagged
    pub fn is_flagged(&self, id: &VideoId) -> bool {
        self.reasons.contains_key(id)
    }

    /// The reason recorded when the video was flagged, if any
    pub fn reason(&self, id: &VideoId) -> Option<&str> {
        self.reasons.get(id).and_then(|reason| reason.as_deref())
    }

    /// Number of flagged videos
    pub fn len(&self) -> usize {
        self.reasons.len()
    }

    /// Whether no videos are flagged
    pub fn is_empty(&self) -> bool {
        self.reasons.is_empty()
    }
}
