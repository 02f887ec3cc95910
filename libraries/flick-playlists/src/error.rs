//! Error types for playlist management

use flick_core::VideoId;
use thiserror::Error;

/// Playlist errors
///
/// Every variant is non-fatal; a failed operation leaves the store
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaylistError {
    /// No playlist matches the name, ignoring case
    #[error("Playlist not found: {0}")]
    PlaylistNotFound(String),

    /// A playlist with the same name already exists, ignoring case
    #[error("A playlist named {0} already exists")]
    DuplicateName(String),

    /// The video does not exist in the library
    #[error("Video not found: {0}")]
    VideoNotFound(VideoId),

    /// The video is already a member of the playlist
    #[error("Video {video} is already in playlist {playlist}")]
    AlreadyInPlaylist {
        /// Display name of the playlist
        playlist: String,
        /// The rejected video ID
        video: VideoId,
    },

    /// The video is not a member of the playlist
    #[error("Video {video} is not in playlist {playlist}")]
    NotInPlaylist {
        /// Display name of the playlist
        playlist: String,
        /// The rejected video ID
        video: VideoId,
    },

    /// The store holds no playlists
    #[error("No playlists exist yet")]
    NoPlaylists,
}

/// Result type for playlist operations
pub type Result<T> = std::result::Result<T, PlaylistError>;
