//! Flick Player - Playlist Management
//!
//! Named playlist management for Flick Player.
//!
//! This crate provides:
//! - Create/delete of named playlists, unique ignoring case
//! - Ordered, duplicate-free membership of library videos
//! - Case-insensitive lookup with original display casing preserved
//! - Display-ready views with members resolved through the library
//!
//! # Architecture
//!
//! `flick-playlists` is completely platform-agnostic: the video catalog is
//! consumed through the [`flick_core::VideoLibrary`] trait and never mutated.
//! The store is a plain owned struct driven through `&mut self` operations;
//! failed operations return a typed [`PlaylistError`] and leave the store
//! unchanged.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use flick_core::{InMemoryVideoLibrary, Video, VideoId};
//! use flick_playlists::PlaylistStore;
//!
//! let library = Arc::new(InMemoryVideoLibrary::from_videos([
//!     Video::new("amazing_cats_video_id", "Amazing Cats", ["#cat", "#animal"]),
//! ]));
//!
//! let mut store = PlaylistStore::new(library);
//!
//! store.create("fun").unwrap();
//! store.add("FUN", &VideoId::new("amazing_cats_video_id")).unwrap();
//!
//! let view = store.playlist("fun").unwrap();
//! assert_eq!(view.videos[0].title, "Amazing Cats");
//! ```

#![forbid(unsafe_code)]

mod error;
mod playlist;
mod store;

// Public exports
pub use error::{PlaylistError, Result};
pub use playlist::Playlist;
pub use store::{PlaylistStore, PlaylistView};
