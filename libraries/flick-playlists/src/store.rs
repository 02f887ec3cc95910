//! Playlist store - named playlist management
//!
//! Owns every playlist, keyed by the lowercased display name. Mutations
//! validate video membership against the read-only library at insertion
//! time; the library is never re-checked afterwards.

use crate::error::{PlaylistError, Result};
use crate::playlist::Playlist;
use flick_core::{Video, VideoId, VideoLibrary};
use serde::{Deserialize, Serialize};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info};

/// A playlist resolved for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistView {
    /// Display name of the playlist
    pub name: String,

    /// Member videos in insertion order
    pub videos: Vec<Video>,
}

/// Named playlist management over a read-only video library
///
/// Playlist names are unique ignoring case: the store keys every playlist by
/// its lowercased name, so map iteration already yields the case-insensitive
/// alphabetical order [`PlaylistStore::playlists`] promises. Construct one
/// instance per session; instances are fully independent.
pub struct PlaylistStore {
    /// Read-only catalog used to validate and resolve video IDs
    library: Arc<dyn VideoLibrary>,

    /// Playlists keyed by lowercased name
    playlists: BTreeMap<String, Playlist>,
}

impl PlaylistStore {
    /// Create an empty store
    pub fn new(library: Arc<dyn VideoLibrary>) -> Self {
        Self {
            library,
            playlists: BTreeMap::new(),
        }
    }

    // ===== Mutations =====

    /// Create a new empty playlist
    ///
    /// Fails with [`PlaylistError::DuplicateName`] when a playlist with the
    /// same name already exists, ignoring case.
    pub fn create(&mut self, name: &str) -> Result<()> {
        match self.playlists.entry(Self::key(name)) {
            Entry::Occupied(_) => Err(PlaylistError::DuplicateName(name.to_string())),
            Entry::Vacant(slot) => {
                debug!("Creating playlist {}", name);
                slot.insert(Playlist::new(name));
                Ok(())
            }
        }
    }

    /// Add a video to a playlist, returning the resolved video
    ///
    /// The duplicate-membership check precedes the library check, so an ID
    /// that is already a member reports [`PlaylistError::AlreadyInPlaylist`]
    /// regardless of its library status.
    pub fn add(&mut self, name: &str, id: &VideoId) -> Result<Video> {
        let playlist = self
            .playlists
            .get_mut(&Self::key(name))
            .ok_or_else(|| PlaylistError::PlaylistNotFound(name.to_string()))?;

        if playlist.contains(id) {
            return Err(PlaylistError::AlreadyInPlaylist {
                playlist: playlist.name.clone(),
                video: id.clone(),
            });
        }

        let video = self
            .library
            .video(id)
            .ok_or_else(|| PlaylistError::VideoNotFound(id.clone()))?;

        debug!("Adding video {} to playlist {}", video.id, playlist.name);
        playlist.push(video.id.clone());
        Ok(video)
    }

    /// Remove a video from a playlist, returning the resolved video
    ///
    /// Fails with [`PlaylistError::VideoNotFound`] when the ID is not in the
    /// library and [`PlaylistError::NotInPlaylist`] when it is not a member.
    pub fn remove(&mut self, name: &str, id: &VideoId) -> Result<Video> {
        let playlist = self
            .playlists
            .get_mut(&Self::key(name))
            .ok_or_else(|| PlaylistError::PlaylistNotFound(name.to_string()))?;

        let video = self
            .library
            .video(id)
            .ok_or_else(|| PlaylistError::VideoNotFound(id.clone()))?;

        if !playlist.remove(id) {
            return Err(PlaylistError::NotInPlaylist {
                playlist: playlist.name.clone(),
                video: id.clone(),
            });
        }

        debug!("Removed video {} from playlist {}", id, playlist.name);
        Ok(video)
    }

    /// Remove every member from a playlist, keeping the playlist itself
    pub fn clear(&mut self, name: &str) -> Result<()> {
        let playlist = self
            .playlists
            .get_mut(&Self::key(name))
            .ok_or_else(|| PlaylistError::PlaylistNotFound(name.to_string()))?;

        playlist.clear();
        info!("Playlist {} has been cleared", playlist.name);
        Ok(())
    }

    /// Delete a playlist entirely, returning it
    pub fn delete(&mut self, name: &str) -> Result<Playlist> {
        let playlist = self
            .playlists
            .remove(&Self::key(name))
            .ok_or_else(|| PlaylistError::PlaylistNotFound(name.to_string()))?;

        info!("Deleted playlist {}", playlist.name);
        Ok(playlist)
    }

    // ===== Queries =====

    /// All playlists, sorted case-insensitively by name
    ///
    /// Fails with [`PlaylistError::NoPlaylists`] when the store is empty.
    pub fn playlists(&self) -> Result<Vec<&Playlist>> {
        if self.playlists.is_empty() {
            return Err(PlaylistError::NoPlaylists);
        }
        Ok(self.playlists.values().collect())
    }

    /// A playlist resolved for display, members in insertion order
    ///
    /// An empty playlist yields a view with an empty video list; the caller
    /// owns any "no videos here yet" phrasing.
    pub fn playlist(&self, name: &str) -> Result<PlaylistView> {
        let playlist = self
            .playlists
            .get(&Self::key(name))
            .ok_or_else(|| PlaylistError::PlaylistNotFound(name.to_string()))?;

        let videos = playlist
            .video_ids()
            .iter()
            .filter_map(|id| self.library.video(id))
            .collect();

        Ok(PlaylistView {
            name: playlist.name.clone(),
            videos,
        })
    }

    /// Number of playlists
    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    /// Whether the store holds no playlists
    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }

    /// Whether a playlist with the name exists, ignoring case
    pub fn contains(&self, name: &str) -> bool {
        self.playlists.contains_key(&Self::key(name))
    }

    fn key(name: &str) -> String {
        name.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flick_core::InMemoryVideoLibrary;

    fn test_library() -> Arc<InMemoryVideoLibrary> {
        Arc::new(InMemoryVideoLibrary::from_videos([
            Video::new("amazing_cats_video_id", "Amazing Cats", ["#cat", "#animal"]),
            Video::new("funny_dogs_video_id", "Funny Dogs", ["#dog", "#animal"]),
            Video::new("life_at_google_video_id", "Life at Google", ["#google", "#career"]),
        ]))
    }

    fn cats() -> VideoId {
        VideoId::new("amazing_cats_video_id")
    }

    fn dogs() -> VideoId {
        VideoId::new("funny_dogs_video_id")
    }

    #[test]
    fn create_and_look_up_playlist() {
        let mut store = PlaylistStore::new(test_library());

        store.create("my_playlist").unwrap();

        assert!(store.contains("my_playlist"));
        assert_eq!(store.len(), 1);
        let view = store.playlist("my_playlist").unwrap();
        assert_eq!(view.name, "my_playlist");
        assert!(view.videos.is_empty());
    }

    #[test]
    fn duplicate_names_are_rejected_ignoring_case() {
        let mut store = PlaylistStore::new(test_library());

        store.create("Movies").unwrap();
        assert_eq!(
            store.create("movies"),
            Err(PlaylistError::DuplicateName("movies".to_string()))
        );
        assert_eq!(store.len(), 1);

        // The display name keeps the original casing.
        let names: Vec<&str> = store
            .playlists()
            .unwrap()
            .iter()
            .map(|playlist| playlist.name.as_str())
            .collect();
        assert_eq!(names, vec!["Movies"]);
    }

    #[test]
    fn add_resolves_the_video() {
        let mut store = PlaylistStore::new(test_library());
        store.create("fun").unwrap();

        let video = store.add("fun", &cats()).unwrap();

        assert_eq!(video.title, "Amazing Cats");
        assert_eq!(store.playlist("fun").unwrap().videos.len(), 1);
    }

    #[test]
    fn add_to_missing_playlist() {
        let mut store = PlaylistStore::new(test_library());

        assert_eq!(
            store.add("fun", &cats()),
            Err(PlaylistError::PlaylistNotFound("fun".to_string()))
        );
    }

    #[test]
    fn add_unknown_video() {
        let mut store = PlaylistStore::new(test_library());
        store.create("fun").unwrap();
        let missing = VideoId::new("no_such_video_id");

        assert_eq!(
            store.add("fun", &missing),
            Err(PlaylistError::VideoNotFound(missing))
        );
        assert!(store.playlist("fun").unwrap().videos.is_empty());
    }

    #[test]
    fn add_duplicate_video_keeps_length() {
        let mut store = PlaylistStore::new(test_library());
        store.create("fun").unwrap();
        store.add("fun", &cats()).unwrap();

        assert_eq!(
            store.add("fun", &cats()),
            Err(PlaylistError::AlreadyInPlaylist {
                playlist: "fun".to_string(),
                video: cats(),
            })
        );
        assert_eq!(store.playlist("fun").unwrap().videos.len(), 1);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let mut store = PlaylistStore::new(test_library());
        store.create("fun").unwrap();

        store.add("FUN", &cats()).unwrap();
        store.add("Fun", &dogs()).unwrap();

        let view = store.playlist("fUn").unwrap();
        assert_eq!(view.name, "fun");
        assert_eq!(view.videos.len(), 2);
    }

    #[test]
    fn remove_restores_the_prior_sequence() {
        let mut store = PlaylistStore::new(test_library());
        store.create("fun").unwrap();
        store.add("fun", &cats()).unwrap();
        store.add("fun", &dogs()).unwrap();

        store.add("fun", &VideoId::new("life_at_google_video_id")).unwrap();
        store
            .remove("fun", &VideoId::new("life_at_google_video_id"))
            .unwrap();

        let view = store.playlist("fun").unwrap();
        let titles: Vec<&str> = view
            .videos
            .iter()
            .map(|video| video.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Amazing Cats", "Funny Dogs"]);
    }

    #[test]
    fn remove_checks_library_before_membership() {
        let mut store = PlaylistStore::new(test_library());
        store.create("fun").unwrap();
        let missing = VideoId::new("no_such_video_id");

        assert_eq!(
            store.remove("fun", &missing),
            Err(PlaylistError::VideoNotFound(missing))
        );
        assert_eq!(
            store.remove("fun", &dogs()),
            Err(PlaylistError::NotInPlaylist {
                playlist: "fun".to_string(),
                video: dogs(),
            })
        );
    }

    #[test]
    fn clear_keeps_the_playlist() {
        let mut store = PlaylistStore::new(test_library());
        store.create("fun").unwrap();
        store.add("fun", &cats()).unwrap();

        store.clear("fun").unwrap();

        assert!(store.contains("fun"));
        assert!(store.playlist("fun").unwrap().videos.is_empty());
        assert_eq!(
            store.clear("gone"),
            Err(PlaylistError::PlaylistNotFound("gone".to_string()))
        );
    }

    #[test]
    fn delete_removes_the_playlist() {
        let mut store = PlaylistStore::new(test_library());
        store.create("fun").unwrap();
        store.add("fun", &cats()).unwrap();

        let playlist = store.delete("FUN").unwrap();
        assert_eq!(playlist.name, "fun");

        assert!(!store.contains("fun"));
        assert_eq!(
            store.playlist("fun"),
            Err(PlaylistError::PlaylistNotFound("fun".to_string()))
        );
        assert_eq!(
            store.delete("fun"),
            Err(PlaylistError::PlaylistNotFound("fun".to_string()))
        );
    }

    #[test]
    fn playlists_are_sorted_case_insensitively() {
        let mut store = PlaylistStore::new(test_library());
        store.create("sports").unwrap();
        store.create("Funny").unwrap();
        store.create("another_one").unwrap();

        let names: Vec<&str> = store
            .playlists()
            .unwrap()
            .iter()
            .map(|playlist| playlist.name.as_str())
            .collect();
        assert_eq!(names, vec!["another_one", "Funny", "sports"]);
    }

    #[test]
    fn empty_store_reports_no_playlists() {
        let store = PlaylistStore::new(test_library());
        assert_eq!(store.playlists(), Err(PlaylistError::NoPlaylists));
        assert!(store.is_empty());
    }
}
