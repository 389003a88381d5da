//! Playback state machine
//!
//! Three states: stopped (no current video), playing, paused. Pausing is
//! only representable while a video is loaded, so the invariant
//! "paused implies playing" holds structurally.

use super::error::{PlayerError, PlayerResult};
use crate::model::Video;

/// The currently loaded video and its paused flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NowPlaying {
    pub video: Video,
    pub paused: bool,
}

/// Outcome of a pause request; pausing an already-paused video is a soft
/// outcome, not an error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PauseOutcome {
    Paused(String),
    AlreadyPaused(String),
}

#[derive(Debug, Default)]
pub struct PlaybackState {
    current: Option<NowPlaying>,
}

impl PlaybackState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently loaded video, if any
    pub fn current(&self) -> Option<&NowPlaying> {
        self.current.as_ref()
    }

    /// Id of the currently loaded video, if any
    pub fn current_id(&self) -> Option<&str> {
        self.current.as_ref().map(|now| now.video.id.as_str())
    }

    /// Load a video and enter the playing state
    ///
    /// Returns the title of the previously loaded video, if one was playing
    /// or paused, so the caller can report the implicit stop.
    pub fn load(&mut self, video: Video) -> Option<String> {
        let previous = self.current.take().map(|now| now.video.title);
        self.current = Some(NowPlaying { video, paused: false });
        previous
    }

    /// Stop playback, returning the title of the stopped video
    pub fn stop(&mut self) -> PlayerResult<String> {
        match self.current.take() {
            Some(now) => Ok(now.video.title),
            None => Err(PlayerError::NothingPlaying),
        }
    }

    pub fn pause(&mut self) -> PlayerResult<PauseOutcome> {
        match self.current.as_mut() {
            None => Err(PlayerError::NothingPlaying),
            Some(now) if now.paused => Ok(PauseOutcome::AlreadyPaused(now.video.title.clone())),
            Some(now) => {
                now.paused = true;
                Ok(PauseOutcome::Paused(now.video.title.clone()))
            }
        }
    }

    /// Resume a paused video, returning its title
    pub fn resume(&mut self) -> PlayerResult<String> {
        match self.current.as_mut() {
            None => Err(PlayerError::NothingPlaying),
            Some(now) if !now.paused => Err(PlayerError::NotPaused),
            Some(now) => {
                now.paused = false;
                Ok(now.video.title.clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id: &str, title: &str) -> Video {
        Video {
            id: id.to_string(),
            title: title.to_string(),
            tags: vec![],
        }
    }

    #[test]
    fn test_load_reports_previous() {
        let mut state = PlaybackState::new();
        assert_eq!(state.load(video("a", "First")), None);
        assert_eq!(state.load(video("b", "Second")), Some("First".to_string()));
        assert_eq!(state.current_id(), Some("b"));
    }

    #[test]
    fn test_stop_when_stopped() {
        let mut state = PlaybackState::new();
        assert_eq!(state.stop(), Err(PlayerError::NothingPlaying));
    }

    #[test]
    fn test_pause_resume_cycle() {
        let mut state = PlaybackState::new();
        assert_eq!(state.pause(), Err(PlayerError::NothingPlaying));

        state.load(video("a", "First"));
        assert_eq!(state.pause(), Ok(PauseOutcome::Paused("First".to_string())));
        assert_eq!(state.pause(), Ok(PauseOutcome::AlreadyPaused("First".to_string())));
        assert_eq!(state.resume(), Ok("First".to_string()));
        assert_eq!(state.resume(), Err(PlayerError::NotPaused));
    }

    #[test]
    fn test_load_clears_paused() {
        let mut state = PlaybackState::new();
        state.load(video("a", "First"));
        state.pause().unwrap();

        state.load(video("b", "Second"));
        assert!(!state.current().unwrap().paused);
    }

    #[test]
    fn test_stop_clears_current() {
        let mut state = PlaybackState::new();
        state.load(video("a", "First"));
        assert_eq!(state.stop(), Ok("First".to_string()));
        assert!(state.current().is_none());
    }
}
