//! Data model for the video catalog
//!
//! This module defines the immutable catalog structures. Mutable player
//! state (playlists, flags, playback) lives in the player module.

mod video;
mod library;

pub use video::Video;
pub use library::Library;
