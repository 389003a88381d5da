//! Flag registry
//!
//! One entry per catalog video, created at startup; only the reason ever
//! mutates. A flagged video is blocked from playback, playlist addition and
//! search candidacy until allowed again.

use super::error::{PlayerError, PlayerResult};
use crate::model::Library;
use std::collections::HashMap;

/// Reason stored when a video is flagged without one
pub const DEFAULT_FLAG_REASON: &str = "Not supplied";

#[derive(Debug, Default)]
pub struct FlagRegistry {
    /// Reason per video id; None means not flagged
    reasons: HashMap<String, Option<String>>,
}

impl FlagRegistry {
    /// Seed the registry with one unflagged entry per catalog video
    pub fn for_library(library: &Library) -> Self {
        let reasons = library
            .videos()
            .iter()
            .map(|video| (video.id.clone(), None))
            .collect();
        Self { reasons }
    }

    /// Active flag reason for a video, if any
    pub fn reason(&self, video_id: &str) -> Option<&str> {
        self.reasons.get(video_id).and_then(|reason| reason.as_deref())
    }

    pub fn is_flagged(&self, video_id: &str) -> bool {
        self.reason(video_id).is_some()
    }

    /// Flag a video, normalizing an empty reason to the default
    ///
    /// Returns the reason as stored.
    pub fn flag(&mut self, video_id: &str, reason: &str) -> PlayerResult<String> {
        let entry = self
            .reasons
            .get_mut(video_id)
            .ok_or(PlayerError::VideoNotFound)?;
        if entry.is_some() {
            return Err(PlayerError::AlreadyFlagged);
        }

        let stored = if reason.is_empty() {
            DEFAULT_FLAG_REASON.to_string()
        } else {
            reason.to_string()
        };
        *entry = Some(stored.clone());
        Ok(stored)
    }

    /// Clear the flag on a video
    pub fn allow(&mut self, video_id: &str) -> PlayerResult<()> {
        let entry = self
            .reasons
            .get_mut(video_id)
            .ok_or(PlayerError::VideoNotFound)?;
        if entry.is_none() {
            return Err(PlayerError::NotFlagged);
        }
        *entry = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Video;

    fn library() -> Library {
        let mut lib = Library::new();
        lib.add_video(Video {
            id: "v1".to_string(),
            title: "First".to_string(),
            tags: vec![],
        });
        lib
    }

    #[test]
    fn test_seeded_unflagged() {
        let flags = FlagRegistry::for_library(&library());
        assert!(!flags.is_flagged("v1"));
        assert_eq!(flags.reason("v1"), None);
    }

    #[test]
    fn test_flag_and_allow() {
        let mut flags = FlagRegistry::for_library(&library());

        assert_eq!(flags.flag("v1", "dont like it"), Ok("dont like it".to_string()));
        assert_eq!(flags.reason("v1"), Some("dont like it"));
        assert_eq!(flags.flag("v1", "again"), Err(PlayerError::AlreadyFlagged));

        assert_eq!(flags.allow("v1"), Ok(()));
        assert!(!flags.is_flagged("v1"));
        assert_eq!(flags.allow("v1"), Err(PlayerError::NotFlagged));
    }

    #[test]
    fn test_empty_reason_normalized_at_flag_time() {
        let mut flags = FlagRegistry::for_library(&library());
        assert_eq!(flags.flag("v1", ""), Ok(DEFAULT_FLAG_REASON.to_string()));
        assert_eq!(flags.reason("v1"), Some(DEFAULT_FLAG_REASON));
    }

    #[test]
    fn test_unknown_video() {
        let mut flags = FlagRegistry::for_library(&library());
        assert_eq!(flags.flag("missing", "x"), Err(PlayerError::VideoNotFound));
        assert_eq!(flags.allow("missing"), Err(PlayerError::VideoNotFound));
    }
}
