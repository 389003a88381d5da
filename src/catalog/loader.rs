//! Catalog file (catalog.json) parser

use crate::model::{Library, Video};
use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Parse a catalog file and build the video library
///
/// The file is a JSON array of `{id, title, tags}` records; `tags` may be
/// omitted. Ids must be unique and non-empty.
pub fn load_catalog(path: &Path) -> Result<Library> {
    let file =
        File::open(path).with_context(|| format!("Failed to open catalog file: {:?}", path))?;

    let records: Vec<Video> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse catalog file: {:?}", path))?;

    let mut library = Library::new();
    for video in records {
        if video.id.trim().is_empty() {
            bail!("Catalog entry {:?} has an empty video id", video.title);
        }
        if !library.add_video(video.clone()) {
            bail!("Duplicate video id in catalog: {}", video.id);
        }
    }

    log::info!("Loaded catalog: {} videos", library.len());
    Ok(library)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_catalog(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(contents.as_bytes()).expect("Failed to write catalog");
        file
    }

    #[test]
    fn test_load_valid_catalog() {
        let file = write_catalog(
            r##"[
                {"id": "cat_video_id", "title": "Amazing Cats", "tags": ["#cat", "#animal"]},
                {"id": "bare_id", "title": "No Tags Here"}
            ]"##,
        );

        let library = load_catalog(file.path()).unwrap();
        assert_eq!(library.len(), 2);
        assert_eq!(library.get("cat_video_id").unwrap().title, "Amazing Cats");
        assert!(library.get("bare_id").unwrap().tags.is_empty());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let file = write_catalog(
            r#"[
                {"id": "dup", "title": "One"},
                {"id": "dup", "title": "Two"}
            ]"#,
        );

        let err = load_catalog(file.path()).unwrap_err();
        assert!(err.to_string().contains("Duplicate video id"));
    }

    #[test]
    fn test_empty_id_rejected() {
        let file = write_catalog(r#"[{"id": "  ", "title": "Blank"}]"#);

        let err = load_catalog(file.path()).unwrap_err();
        assert!(err.to_string().contains("empty video id"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_catalog(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to open catalog file"));
    }

    #[test]
    fn test_malformed_json() {
        let file = write_catalog("not json at all");

        let err = load_catalog(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse catalog file"));
    }
}
