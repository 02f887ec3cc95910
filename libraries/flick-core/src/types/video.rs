//! Video domain type

use crate::types::VideoId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A video in the catalog
///
/// Videos are immutable for the lifetime of the process; all mutable state
/// (playback, playlists, flags) lives outside this type, keyed by [`VideoId`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// Unique video identifier
    pub id: VideoId,

    /// Video title
    pub title: String,

    /// Ordered descriptive tags
    pub tags: Vec<String>,
}

impl Video {
    /// Create a new video
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        tags: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            id: VideoId::new(id),
            title: title.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for Video {
    /// Renders the catalog line: `title (id) [tag1 tag2]`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) [{}]", self.title, self.id, self.tags.join(" "))
    }
}
