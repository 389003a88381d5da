//! The command processor
//!
//! `Player` owns the three mutable state containers (playback, playlists,
//! flags) plus the immutable catalog, and exposes every user-facing
//! operation as a method returning a structured result. No operation leaves
//! state partially mutated on failure.

mod error;
mod flags;
mod playback;
mod playlists;
mod search;

pub use error::{PlayerError, PlayerResult};
pub use flags::{FlagRegistry, DEFAULT_FLAG_REASON};
pub use playback::{NowPlaying, PauseOutcome, PlaybackState};
pub use playlists::{Playlist, PlaylistStore};
pub use search::{SearchHit, TAG_SIGIL};

use crate::model::{Library, Video};
use rand::seq::SliceRandom;

/// Successful play: the new title, plus the title of the video that was
/// implicitly stopped to make way for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome {
    pub stopped: Option<String>,
    pub title: String,
}

/// Successful flag: the video title, the reason as stored, and the title of
/// the video stopped as a side effect (when the flagged video was playing)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagOutcome {
    pub title: String,
    pub reason: String,
    pub stopped: Option<String>,
}

pub struct Player {
    library: Library,
    flags: FlagRegistry,
    playlists: PlaylistStore,
    playback: PlaybackState,
    /// Results of the most recent search, for interactive selection
    last_results: Vec<SearchHit>,
}

impl Player {
    pub fn new(library: Library) -> Self {
        let flags = FlagRegistry::for_library(&library);
        Self {
            library,
            flags,
            playlists: PlaylistStore::new(),
            playback: PlaybackState::new(),
            last_results: Vec::new(),
        }
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn video_count(&self) -> usize {
        self.library.len()
    }

    /// Display lines for every catalog video, sorted, with flagged entries
    /// annotated rather than hidden
    pub fn all_videos(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .library
            .videos()
            .iter()
            .map(|video| self.annotated_line(video))
            .collect();
        lines.sort();
        lines
    }

    fn annotated_line(&self, video: &Video) -> String {
        match self.flags.reason(&video.id) {
            Some(reason) => format!("{} - FLAGGED (reason: {})", video.display_line(), reason),
            None => video.display_line(),
        }
    }

    // ---- playback -------------------------------------------------------

    pub fn play(&mut self, video_id: &str) -> PlayerResult<PlayOutcome> {
        let video = self
            .library
            .get(video_id)
            .ok_or(PlayerError::VideoNotFound)?
            .clone();
        if let Some(reason) = self.flags.reason(video_id) {
            return Err(PlayerError::VideoFlagged(reason.to_string()));
        }

        let title = video.title.clone();
        let stopped = self.playback.load(video);
        log::debug!("Playing video {}", video_id);
        Ok(PlayOutcome { stopped, title })
    }

    /// Play a uniformly random unflagged video; None when every video is
    /// flagged (or the catalog is empty), which is a silent no-op
    pub fn play_random(&mut self) -> Option<PlayOutcome> {
        let candidates: Vec<String> = self
            .library
            .videos()
            .iter()
            .filter(|video| !self.flags.is_flagged(&video.id))
            .map(|video| video.id.clone())
            .collect();
        let chosen = candidates.choose(&mut rand::thread_rng())?.clone();

        // The chosen id exists and is unflagged, so play cannot fail
        self.play(&chosen).ok()
    }

    pub fn stop(&mut self) -> PlayerResult<String> {
        self.playback.stop()
    }

    pub fn pause(&mut self) -> PlayerResult<PauseOutcome> {
        self.playback.pause()
    }

    pub fn resume(&mut self) -> PlayerResult<String> {
        self.playback.resume()
    }

    pub fn now_playing(&self) -> PlayerResult<&NowPlaying> {
        self.playback.current().ok_or(PlayerError::NothingPlaying)
    }

    // ---- playlists ------------------------------------------------------

    /// Create a playlist, returning its display name
    pub fn create_playlist(&mut self, name: &str) -> PlayerResult<String> {
        let playlist = self.playlists.create(name)?;
        Ok(playlist.name().to_string())
    }

    /// Add a video to a playlist, returning the video title
    ///
    /// Check order: playlist existence, then video existence, then flag,
    /// then membership.
    pub fn add_to_playlist(&mut self, name: &str, video_id: &str) -> PlayerResult<String> {
        let playlist = self.playlists.get_mut(name)?;
        let title = self
            .library
            .get(video_id)
            .ok_or(PlayerError::VideoNotFound)?
            .title
            .clone();
        if let Some(reason) = self.flags.reason(video_id) {
            return Err(PlayerError::VideoFlagged(reason.to_string()));
        }
        if playlist.contains(video_id) {
            return Err(PlayerError::AlreadyInPlaylist);
        }

        playlist.push(video_id.to_string());
        Ok(title)
    }

    /// Remove a video from a playlist, returning the video title
    pub fn remove_from_playlist(&mut self, name: &str, video_id: &str) -> PlayerResult<String> {
        let playlist = self.playlists.get_mut(name)?;
        let title = self
            .library
            .get(video_id)
            .ok_or(PlayerError::VideoNotFound)?
            .title
            .clone();
        if !playlist.remove(video_id) {
            return Err(PlayerError::NotInPlaylist);
        }
        Ok(title)
    }

    pub fn clear_playlist(&mut self, name: &str) -> PlayerResult<()> {
        self.playlists.get_mut(name)?.clear();
        Ok(())
    }

    pub fn delete_playlist(&mut self, name: &str) -> PlayerResult<()> {
        self.playlists.delete(name)?;
        Ok(())
    }

    pub fn has_playlists(&self) -> bool {
        !self.playlists.is_empty()
    }

    /// Playlist display names, sorted case-insensitively
    pub fn playlist_names(&self) -> Vec<String> {
        self.playlists
            .names()
            .into_iter()
            .map(|name| name.to_string())
            .collect()
    }

    /// Ordered display lines for a playlist, flagged entries annotated
    pub fn show_playlist(&self, name: &str) -> PlayerResult<Vec<String>> {
        let playlist = self.playlists.get(name)?;
        Ok(playlist
            .video_ids()
            .iter()
            .filter_map(|id| self.library.get(id))
            .map(|video| self.annotated_line(video))
            .collect())
    }

    // ---- search ---------------------------------------------------------

    /// Title search; the ranked results are retained for selection
    pub fn search_titles(&mut self, term: &str) -> &[SearchHit] {
        self.last_results = search::search_titles(&self.library, &self.flags, term);
        &self.last_results
    }

    /// Tag search; the ranked results are retained for selection
    pub fn search_tags(&mut self, tag: &str) -> &[SearchHit] {
        self.last_results = search::search_tags(&self.library, &self.flags, tag);
        &self.last_results
    }

    /// Interpret a reply to the search prompt
    ///
    /// Plays result N when the reply is an integer in range; anything else
    /// (empty, non-numeric, zero, negative, too large) is "no selection".
    pub fn select_from_last_results(&mut self, reply: &str) -> Option<PlayerResult<PlayOutcome>> {
        let n: usize = reply.trim().parse().ok()?;
        if n == 0 || n > self.last_results.len() {
            return None;
        }
        let video_id = self.last_results[n - 1].video_id.clone();
        Some(self.play(&video_id))
    }

    // ---- flags ----------------------------------------------------------

    /// Flag a video
    ///
    /// When the caller supplies a non-empty reason and the target is the
    /// currently loaded video, playback stops as a side effect and the
    /// outcome carries the stopped title.
    pub fn flag(&mut self, video_id: &str, reason: &str) -> PlayerResult<FlagOutcome> {
        let title = self
            .library
            .get(video_id)
            .ok_or(PlayerError::VideoNotFound)?
            .title
            .clone();
        let stored = self.flags.flag(video_id, reason)?;
        log::debug!("Flagged video {} (reason: {})", video_id, stored);

        let stopped = if !reason.is_empty() && self.playback.current_id() == Some(video_id) {
            self.playback.stop().ok()
        } else {
            None
        };

        Ok(FlagOutcome {
            title,
            reason: stored,
            stopped,
        })
    }

    /// Clear the flag on a video, returning its title
    pub fn allow(&mut self, video_id: &str) -> PlayerResult<String> {
        let title = self
            .library
            .get(video_id)
            .ok_or(PlayerError::VideoNotFound)?
            .title
            .clone();
        self.flags.allow(video_id)?;
        log::debug!("Removed flag from video {}", video_id);
        Ok(title)
    }
}
