//! Playlist domain type

use chrono::{DateTime, Utc};
use flick_core::VideoId;
use serde::{Deserialize, Serialize};

/// A named, ordered collection of video IDs
///
/// The display name keeps the casing supplied at creation; identity and
/// lookup use the lowercased key owned by the store. Membership is ordered
/// by insertion and free of duplicates — the mutating methods are crate
/// private so the store alone upholds that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Display name, casing as supplied at creation
    pub name: String,

    /// When the playlist was created
    pub created_at: DateTime<Utc>,

    video_ids: Vec<VideoId>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            created_at: Utc::now(),
            video_ids: Vec::new(),
        }
    }

    /// Member video IDs in insertion order
    pub fn video_ids(&self) -> &[VideoId] {
        &self.video_ids
    }

    /// Whether the video is a member
    pub fn contains(&self, id: &VideoId) -> bool {
        self.video_ids.contains(id)
    }

    /// Number of member videos
    pub fn len(&self) -> usize {
        self.video_ids.len()
    }

    /// Whether the playlist has no members
    pub fn is_empty(&self) -> bool {
        self.video_ids.is_empty()
    }

    pub(crate) fn push(&mut self, id: VideoId) {
        self.video_ids.push(id);
    }

    pub(crate) fn remove(&mut self, id: &VideoId) -> bool {
        match self.video_ids.iter().position(|member| member == id) {
            Some(index) => {
                self.video_ids.remove(index);
                true
            }
            None => false,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.video_ids.clear();
    }
}
