use crate::error::{EcoindexError, Result};
use crate::types::metrics::PageMetrics;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// One page awaiting scoring, as found in a metric file.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchEntry {
    pub url: Option<String>,
    #[serde(flatten)]
    pub metrics: PageMetrics,
}

#[derive(Debug)]
pub struct SourcedEntry {
    pub source: PathBuf,
    pub entry: BatchEntry,
}

#[derive(Debug, Default)]
pub struct BatchInput {
    pub entries: Vec<SourcedEntry>,
    pub skipped: usize,
}

/// Gathers batch entries from a metric file or a directory tree of `*.json`
/// metric files. Unreadable files and invalid entries are skipped with a
/// warning and counted, never fatal.
pub fn collect(path: &Path) -> Result<BatchInput> {
    if !path.exists() {
        return Err(EcoindexError::PathNotFound(path.display().to_string()));
    }

    let files = if path.is_dir() {
        list_metric_files(path)
    } else {
        vec![path.to_path_buf()]
    };
    if files.is_empty() {
        return Err(EcoindexError::EmptyBatch(path.display().to_string()));
    }
    debug!(count = files.len(), "collecting batch metric files");

    let mut input = BatchInput::default();
    for file in files {
        match parse_file(&file) {
            Ok(entries) => {
                for entry in entries {
                    match entry.metrics.validate() {
                        Ok(()) => input.entries.push(SourcedEntry {
                            source: file.clone(),
                            entry,
                        }),
                        Err(e) => {
                            warn!(file = %file.display(), error = %e, "skipping invalid entry");
                            input.skipped += 1;
                        }
                    }
                }
            }
            Err(e) => {
                warn!(file = %file.display(), error = %e, "skipping unreadable metric file");
                input.skipped += 1;
            }
        }
    }
    Ok(input)
}

fn list_metric_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .filter(|path| {
            path.extension()
                .map(|extension| extension == "json")
                .unwrap_or(false)
        })
        .collect();
    // walkdir order is platform-dependent; sort for stable reports
    files.sort();
    files
}

fn parse_file(path: &Path) -> Result<Vec<BatchEntry>> {
    let content = std::fs::read_to_string(path)?;
    if let Ok(many) = serde_json::from_str::<Vec<BatchEntry>>(&content) {
        return Ok(many);
    }
    Ok(vec![serde_json::from_str::<BatchEntry>(&content)?])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn collects_a_single_object_file() {
        let dir = TempDir::new().expect("temp dir should be created");
        let file = dir.path().join("page.json");
        fs::write(
            &file,
            r#"{"url": "https://example.org", "nodes": 693, "size": 2410.0, "requests": 78}"#,
        )
        .expect("metric file should write");

        let input = collect(&file).expect("collect should succeed");
        assert_eq!(input.entries.len(), 1);
        assert_eq!(input.skipped, 0);
        assert_eq!(
            input.entries[0].entry.url.as_deref(),
            Some("https://example.org")
        );
        assert_eq!(input.entries[0].entry.metrics.nodes, 693);
    }

    #[test]
    fn collects_an_array_file() {
        let dir = TempDir::new().expect("temp dir should be created");
        let file = dir.path().join("pages.json");
        fs::write(
            &file,
            r#"[
                {"nodes": 100, "size": 100.0, "requests": 100},
                {"url": "https://example.org/b", "nodes": 2355, "size": 2493.0, "requests": 267}
            ]"#,
        )
        .expect("metric file should write");

        let input = collect(&file).expect("collect should succeed");
        assert_eq!(input.entries.len(), 2);
        assert!(input.entries[0].entry.url.is_none());
    }

    #[test]
    fn walks_a_directory_in_sorted_order() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::create_dir(dir.path().join("nested")).expect("nested dir should create");
        fs::write(
            dir.path().join("nested/b.json"),
            r#"{"nodes": 2, "size": 2.0, "requests": 2}"#,
        )
        .expect("metric file should write");
        fs::write(
            dir.path().join("a.json"),
            r#"{"nodes": 1, "size": 1.0, "requests": 1}"#,
        )
        .expect("metric file should write");
        fs::write(dir.path().join("notes.txt"), "ignored").expect("stray file should write");

        let input = collect(dir.path()).expect("collect should succeed");
        assert_eq!(input.entries.len(), 2);
        assert_eq!(input.entries[0].entry.metrics.nodes, 1);
        assert_eq!(input.entries[1].entry.metrics.nodes, 2);
    }

    #[test]
    fn skips_unparseable_files_and_invalid_entries() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::write(dir.path().join("bad.json"), "{ not json").expect("bad file should write");
        fs::write(
            dir.path().join("negative.json"),
            r#"{"nodes": 10, "size": -5.0, "requests": 1}"#,
        )
        .expect("metric file should write");
        fs::write(
            dir.path().join("ok.json"),
            r#"{"nodes": 10, "size": 5.0, "requests": 1}"#,
        )
        .expect("metric file should write");

        let input = collect(dir.path()).expect("collect should succeed");
        assert_eq!(input.entries.len(), 1);
        assert_eq!(input.skipped, 2);
    }

    #[test]
    fn rejects_missing_paths_and_empty_directories() {
        let dir = TempDir::new().expect("temp dir should be created");
        assert!(matches!(
            collect(&dir.path().join("missing.json")),
            Err(EcoindexError::PathNotFound(_))
        ));
        assert!(matches!(
            collect(dir.path()),
            Err(EcoindexError::EmptyBatch(_))
        ));
    }
}
