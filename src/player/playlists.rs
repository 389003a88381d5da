//! Playlist store
//!
//! Playlists are keyed by a case-folded form of their name; the casing given
//! at creation is preserved for display. Membership is a set invariant
//! enforced at add time, so the video list never holds duplicates.

use super::error::{PlayerError, PlayerResult};
use std::collections::HashMap;

/// Case-folded lookup key for a playlist name
fn fold(name: &str) -> String {
    name.to_lowercase()
}

/// A named, ordered list of video ids
#[derive(Debug, Clone)]
pub struct Playlist {
    /// Display name, exactly as first created
    name: String,

    /// Member video ids in insertion order
    videos: Vec<String>,
}

impl Playlist {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            videos: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn video_ids(&self) -> &[String] {
        &self.videos
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    pub fn contains(&self, video_id: &str) -> bool {
        self.videos.iter().any(|id| id == video_id)
    }

    /// Append a video id; the store enforces no-duplicates before calling
    pub(super) fn push(&mut self, video_id: String) {
        self.videos.push(video_id);
    }

    /// Remove a video id, returning whether it was present
    pub(super) fn remove(&mut self, video_id: &str) -> bool {
        match self.videos.iter().position(|id| id == video_id) {
            Some(index) => {
                self.videos.remove(index);
                true
            }
            None => false,
        }
    }

    pub(super) fn clear(&mut self) {
        self.videos.clear();
    }
}

#[derive(Debug, Default)]
pub struct PlaylistStore {
    /// Playlists keyed by folded name
    playlists: HashMap<String, Playlist>,
}

impl PlaylistStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty playlist, preserving the given casing for display
    pub fn create(&mut self, name: &str) -> PlayerResult<&Playlist> {
        let key = fold(name);
        if self.playlists.contains_key(&key) {
            return Err(PlayerError::PlaylistExists);
        }
        Ok(self.playlists.entry(key).or_insert_with(|| Playlist::new(name)))
    }

    pub fn get(&self, name: &str) -> PlayerResult<&Playlist> {
        self.playlists
            .get(&fold(name))
            .ok_or(PlayerError::PlaylistNotFound)
    }

    pub fn get_mut(&mut self, name: &str) -> PlayerResult<&mut Playlist> {
        self.playlists
            .get_mut(&fold(name))
            .ok_or(PlayerError::PlaylistNotFound)
    }

    pub fn delete(&mut self, name: &str) -> PlayerResult<Playlist> {
        self.playlists
            .remove(&fold(name))
            .ok_or(PlayerError::PlaylistNotFound)
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }

    /// Display names sorted case-insensitively, ties broken by the original
    /// string ordering
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.playlists.values().map(|p| p.name()).collect();
        names.sort_by(|a, b| {
            a.to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b))
        });
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_preserves_casing() {
        let mut store = PlaylistStore::new();
        store.create("My_PLAYlist").unwrap();

        assert_eq!(store.get("my_playlist").unwrap().name(), "My_PLAYlist");
        assert_eq!(store.get("MY_PLAYLIST").unwrap().name(), "My_PLAYlist");
    }

    #[test]
    fn test_create_case_insensitive_conflict() {
        let mut store = PlaylistStore::new();
        store.create("X").unwrap();

        assert_eq!(store.create("x").unwrap_err(), PlayerError::PlaylistExists);
        assert_eq!(store.get("x").unwrap().name(), "X");
    }

    #[test]
    fn test_delete_then_recreate() {
        let mut store = PlaylistStore::new();
        store.create("mix").unwrap();
        store.delete("MIX").unwrap();

        assert_eq!(store.get("mix").unwrap_err(), PlayerError::PlaylistNotFound);
        assert!(store.create("mix").is_ok());
    }

    #[test]
    fn test_names_sorted_case_insensitively() {
        let mut store = PlaylistStore::new();
        store.create("beta").unwrap();
        store.create("Alpha").unwrap();
        store.create("ALPHA2").unwrap();

        assert_eq!(store.names(), vec!["Alpha", "ALPHA2", "beta"]);
    }

    #[test]
    fn test_membership_mutation() {
        let mut store = PlaylistStore::new();
        store.create("mix").unwrap();

        let playlist = store.get_mut("mix").unwrap();
        playlist.push("v1".to_string());
        playlist.push("v2".to_string());
        assert_eq!(playlist.len(), 2);
        assert!(playlist.contains("v1"));

        assert!(playlist.remove("v1"));
        assert!(!playlist.remove("v1"));
        assert_eq!(playlist.video_ids(), &["v2".to_string()]);

        playlist.clear();
        assert!(playlist.is_empty());
        assert!(store.get("mix").is_ok());
    }
}
