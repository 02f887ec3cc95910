//! Video library contract and in-memory implementation
//!
//! The library is the read-only authority on which videos exist. Playback and
//! playlist management validate every incoming ID against it and resolve IDs
//! back to full [`Video`] records for display.

use crate::types::{Video, VideoId};
use std::collections::HashMap;

/// Read-only catalog of all known videos
///
/// Implementations must never mutate the catalog after construction; the
/// playback and playlist layers rely on membership staying stable for the
/// process lifetime.
pub trait VideoLibrary: Send + Sync {
    /// All videos in the library, in no particular order
    fn all_videos(&self) -> Vec<Video>;

    /// Look up a single video by ID
    fn video(&self, id: &VideoId) -> Option<Video>;

    /// Number of videos in the library
    fn len(&self) -> usize;

    /// Whether the library holds no videos
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory video library backed by a fixed list
///
/// Insertion order is preserved; the first occurrence of an ID wins when the
/// input contains duplicates.
#[derive(Debug, Default)]
pub struct InMemoryVideoLibrary {
    videos: Vec<Video>,
    by_id: HashMap<VideoId, usize>,
}

impl InMemoryVideoLibrary {
    /// Build a library from a fixed set of videos
    pub fn from_videos(videos: impl IntoIterator<Item = Video>) -> Self {
        let mut library = Self::default();
        for video in videos {
            if library.by_id.contains_key(&video.id) {
                continue;
            }
            library.by_id.insert(video.id.clone(), library.videos.len());
            library.videos.push(video);
        }
        library
    }
}

impl VideoLibrary for InMemoryVideoLibrary {
    fn all_videos(&self) -> Vec<Video> {
        self.videos.clone()
    }

    fn video(&self, id: &VideoId) -> Option<Video> {
        self.by_id.get(id).map(|&index| self.videos[index].clone())
    }

    fn len(&self) -> usize {
        self.videos.len()
    }
}
