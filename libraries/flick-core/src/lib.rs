//! Flick Player Core
//!
//! Platform-agnostic core types, the video library contract, and catalog
//! queries for Flick Player.
//!
//! This crate provides the foundational building blocks used by the playback
//! and playlist crates:
//! - **Domain Types**: [`Video`], [`VideoId`]
//! - **Library Contract**: [`VideoLibrary`] with an in-memory implementation
//! - **Catalog Queries**: sorted listings, title and tag searches
//! - **Flags**: [`FlagRegistry`] for withholding videos from search results
//! - **Error Handling**: [`FlickError`] and the crate [`Result`] type
//!
//! # Example
//!
//! ```rust
//! use flick_core::{catalog, InMemoryVideoLibrary, Video, VideoLibrary};
//!
//! let library = InMemoryVideoLibrary::from_videos([
//!     Video::new("funny_dogs_video_id", "Funny Dogs", ["#dog", "#animal"]),
//!     Video::new("amazing_cats_video_id", "Amazing Cats", ["#cat", "#animal"]),
//! ]);
//!
//! assert_eq!(library.len(), 2);
//!
//! let listing = catalog::all_videos_sorted(&library);
//! assert_eq!(
//!     listing[0].to_string(),
//!     "Amazing Cats (amazing_cats_video_id) [#cat #animal]"
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod error;
pub mod flags;
pub mod library;
pub mod types;

pub use catalog::SearchScope;
pub use error::{FlickError, Result};
pub use flags::FlagRegistry;
pub use library::{InMemoryVideoLibrary, VideoLibrary};
pub use types::{Video, VideoId};
