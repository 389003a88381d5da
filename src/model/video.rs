use serde::{Deserialize, Serialize};

/// A single catalog video with its metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// Unique identifier for this video
    pub id: String,

    /// Video title
    pub title: String,

    /// Tags, each carrying the `#` sigil (e.g. "#cat")
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Video {
    /// Tags joined by single spaces, e.g. "#cat #animal"
    pub fn tag_line(&self) -> String {
        self.tags.join(" ")
    }

    /// Canonical display line: `Title (id) [#tag1 #tag2]`
    pub fn display_line(&self) -> String {
        format!("{} ({}) [{}]", self.title, self.id, self.tag_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_line() {
        let video = Video {
            id: "cat_video_id".to_string(),
            title: "Amazing Cats".to_string(),
            tags: vec!["#cat".to_string(), "#animal".to_string()],
        };
        assert_eq!(video.display_line(), "Amazing Cats (cat_video_id) [#cat #animal]");
    }

    #[test]
    fn test_display_line_no_tags() {
        let video = Video {
            id: "bare_id".to_string(),
            title: "Untagged".to_string(),
            tags: vec![],
        };
        assert_eq!(video.display_line(), "Untagged (bare_id) []");
    }
}
