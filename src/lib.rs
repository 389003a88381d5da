//! vidbox - an interactive video player shell
//!
//! This library implements an in-memory command interpreter over a fixed
//! catalog of videos: playback state, user playlists, video flagging and
//! case-insensitive search with interactive selection.

pub mod catalog;
pub mod model;
pub mod player;
pub mod shell;

pub use model::{Library, Video};
pub use player::{Player, PlayerError};
pub use shell::Shell;
