//! Catalog query helpers
//!
//! Read-only queries over a [`VideoLibrary`]: sorted listings and title/tag
//! searches. Searches hide flagged videos unless the caller opts into
//! [`SearchScope::IncludeFlagged`]; the full listing always shows everything.

use crate::error::{FlickError, Result};
use crate::flags::FlagRegistry;
use crate::library::VideoLibrary;
use crate::types::Video;

/// Whether a search includes flagged videos
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchScope {
    /// Hide flagged videos from the results
    #[default]
    ExcludeFlagged,

    /// Include flagged videos in the results
    IncludeFlagged,
}

/// All videos in the library, sorted by title ascending
pub fn all_videos_sorted(library: &dyn VideoLibrary) -> Vec<Video> {
    let mut videos = library.all_videos();
    videos.sort_by(|a, b| a.title.cmp(&b.title));
    videos
}

/// Videos whose title contains the term, case-insensitively
///
/// Results are sorted by title; an empty result set is reported as
/// [`FlickError::NoMatches`].
pub fn search_by_title(
    library: &dyn VideoLibrary,
    flags: &FlagRegistry,
    scope: SearchScope,
    term: &str,
) -> Result<Vec<Video>> {
    let needle = term.to_lowercase();
    search(library, flags, scope, term, |video| {
        video.title.to_lowercase().contains(&needle)
    })
}

/// Videos carrying the exact tag, case-insensitively
///
/// The tag must match a whole entry in the video's tag list; substring
/// matches do not count. Same result contract as [`search_by_title`].
pub fn search_by_tag(
    library: &dyn VideoLibrary,
    flags: &FlagRegistry,
    scope: SearchScope,
    tag: &str,
) -> Result<Vec<Video>> {
    let needle = tag.to_lowercase();
    search(library, flags, scope, tag, |video| {
        video.tags.iter().any(|t| t.to_lowercase() == needle)
    })
}

fn search(
    library: &dyn VideoLibrary,
    flags: &FlagRegistry,
    scope: SearchScope,
    term: &str,
    matches: impl Fn(&Video) -> bool,
) -> Result<Vec<Video>> {
    let mut results: Vec<Video> = library
        .all_videos()
        .into_iter()
        .filter(|video| scope == SearchScope::IncludeFlagged || !flags.is_flagged(&video.id))
        .filter(|video| matches(video))
        .collect();

    if results.is_empty() {
        return Err(FlickError::NoMatches(term.to_string()));
    }

    results.sort_by(|a, b| a.title.cmp(&b.title));
    Ok(results)
}
