//! Domain types for Flick Player

mod ids;
mod video;

pub use ids::VideoId;
pub use video::Video;
