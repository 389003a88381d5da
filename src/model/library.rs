use super::Video;
use std::collections::HashMap;

/// The immutable video catalog
///
/// Videos keep their insertion order for iteration; an id index provides
/// O(1) lookup. The library is read-only to the player once loaded.
#[derive(Debug, Clone, Default)]
pub struct Library {
    /// All videos in insertion order
    videos: Vec<Video>,

    /// Index from video id to position in `videos`
    index: HashMap<String, usize>,
}

impl Library {
    /// Create a new empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a video to the library
    ///
    /// Returns false (and leaves the library unchanged) if a video with the
    /// same id is already present.
    pub fn add_video(&mut self, video: Video) -> bool {
        if self.index.contains_key(&video.id) {
            return false;
        }
        self.index.insert(video.id.clone(), self.videos.len());
        self.videos.push(video);
        true
    }

    /// Get a video by id
    pub fn get(&self, id: &str) -> Option<&Video> {
        self.index.get(id).map(|&i| &self.videos[i])
    }

    /// Whether the catalog contains the given id
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All videos, in insertion order
    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    /// Total number of videos
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}
