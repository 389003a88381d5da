//! Title and tag search over the catalog
//!
//! Both searches are case-insensitive substring matches; flagged videos are
//! excluded from the candidate set entirely, unlike playlist display which
//! annotates them.

use super::flags::FlagRegistry;
use crate::model::{Library, Video};

/// Tag searches must start with this sigil to match anything
pub const TAG_SIGIL: char = '#';

/// One ranked search result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub video_id: String,
    /// Rendered result line: `Title (id) [#tag1 #tag2]`
    pub line: String,
}

fn matches(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Videos whose title contains `term`, sorted case-insensitively by title
pub fn search_titles(library: &Library, flags: &FlagRegistry, term: &str) -> Vec<SearchHit> {
    let mut found: Vec<&Video> = library
        .videos()
        .iter()
        .filter(|video| !flags.is_flagged(&video.id))
        .filter(|video| matches(&video.title, term))
        .collect();
    found.sort_by(|a, b| {
        a.title
            .to_lowercase()
            .cmp(&b.title.to_lowercase())
            .then_with(|| a.title.cmp(&b.title))
    });

    found
        .into_iter()
        .map(|video| SearchHit {
            video_id: video.id.clone(),
            line: video.display_line(),
        })
        .collect()
}

/// Videos whose rendered tag list contains `tag`, sorted case-insensitively
/// by result line
///
/// An empty result is returned outright when the tag is missing its sigil.
pub fn search_tags(library: &Library, flags: &FlagRegistry, tag: &str) -> Vec<SearchHit> {
    if !tag.starts_with(TAG_SIGIL) {
        return Vec::new();
    }

    let mut hits: Vec<SearchHit> = library
        .videos()
        .iter()
        .filter(|video| !flags.is_flagged(&video.id))
        .filter(|video| matches(&video.tag_line(), tag))
        .map(|video| SearchHit {
            video_id: video.id.clone(),
            line: video.display_line(),
        })
        .collect();
    hits.sort_by(|a, b| {
        a.line
            .to_lowercase()
            .cmp(&b.line.to_lowercase())
            .then_with(|| a.line.cmp(&b.line))
    });
    hits
}
