//! JSON corpus persistence.
//!
//! A persisted corpus is either a JSON array of records (pretty-printed on
//! save) or JSON-lines with one record per line. Appends deduplicate by
//! record fingerprint with first occurrence winning, so re-ingesting an
//! overlapping capture batch never duplicates ads.

use std::path::Path;

use adintel_core::AdRecord;
use sha2::{Digest, Sha256};

use crate::error::StoreError;

/// Stable identity of a record for dedup purposes.
///
/// The library id is authoritative when present; unlinked records fall back
/// to a SHA-256 over the advertiser name and classified copy.
#[must_use]
pub fn fingerprint(record: &AdRecord) -> String {
    if let Some(id) = record.id.as_deref() {
        return format!("id:{id}");
    }

    let mut hasher = Sha256::new();
    let name = record
        .advertiser
        .as_ref()
        .and_then(|a| a.name.as_deref())
        .unwrap_or_default();
    hasher.update(name.as_bytes());
    hasher.update([0x1f]);
    hasher.update(
        record
            .creative
            .copy
            .headline
            .as_deref()
            .unwrap_or_default()
            .as_bytes(),
    );
    hasher.update([0x1f]);
    hasher.update(
        record
            .creative
            .copy
            .primary_text
            .as_deref()
            .unwrap_or_default()
            .as_bytes(),
    );
    format!("sha:{:x}", hasher.finalize())
}

/// Load a corpus from disk. Accepts a JSON array or JSON-lines; a missing
/// file is an empty corpus.
///
/// # Errors
///
/// Returns [`StoreError`] when the file exists but cannot be read or parsed.
pub fn load_corpus(path: &Path) -> Result<Vec<AdRecord>, StoreError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "corpus file absent, starting empty");
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(StoreError::Io {
                path: path.display().to_string(),
                source: e,
            })
        }
    };

    let trimmed = content.trim_start();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    if trimmed.starts_with('[') {
        return serde_json::from_str(&content).map_err(|e| StoreError::Parse {
            path: path.display().to_string(),
            source: e,
        });
    }

    // JSON-lines: one record per non-empty line.
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            serde_json::from_str::<AdRecord>(line).map_err(|e| StoreError::Parse {
                path: path.display().to_string(),
                source: e,
            })
        })
        .collect()
}

/// Save a corpus as a pretty-printed JSON array, creating parent
/// directories as needed.
///
/// # Errors
///
/// Returns [`StoreError`] on serialization or write failure.
pub fn save_corpus(path: &Path, records: &[AdRecord]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::Io {
                path: parent.display().to_string(),
                source: e,
            })?;
        }
    }

    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(path, json).map_err(|e| StoreError::Io {
        path: path.display().to_string(),
        source: e,
    })
}

/// Append records to the corpus at `path`, deduplicating by fingerprint.
///
/// Existing records always win over incoming duplicates, and arrival order
/// is preserved. Returns the number of records actually added.
///
/// # Errors
///
/// Returns [`StoreError`] on load or save failure.
pub fn append_records(path: &Path, incoming: &[AdRecord]) -> Result<usize, StoreError> {
    let mut corpus = load_corpus(path)?;
    let mut seen: Vec<String> = corpus.iter().map(fingerprint).collect();

    let mut added = 0usize;
    for record in incoming {
        let print = fingerprint(record);
        if seen.contains(&print) {
            tracing::debug!(fingerprint = %print, "skipping duplicate record");
            continue;
        }
        seen.push(print);
        corpus.push(record.clone());
        added += 1;
    }

    save_corpus(path, &corpus)?;
    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use adintel_core::{AdCopy, Advertiser, Creative};
    use tempfile::TempDir;

    fn make_record(id: Option<&str>, name: &str, primary: &str) -> AdRecord {
        AdRecord {
            id: id.map(ToOwned::to_owned),
            advertiser: Some(Advertiser {
                name: Some(name.to_owned()),
                ..Advertiser::default()
            }),
            creative: Creative {
                copy: AdCopy {
                    primary_text: Some(primary.to_owned()),
                    word_count: primary.split_whitespace().count(),
                    ..AdCopy::default()
                },
                ..Creative::default()
            },
            ..AdRecord::default()
        }
    }

    #[test]
    fn missing_file_loads_as_empty_corpus() {
        let dir = TempDir::new().expect("tempdir");
        let corpus = load_corpus(&dir.path().join("absent.json")).expect("load");
        assert!(corpus.is_empty());
    }

    #[test]
    fn save_and_load_round_trip_preserves_order() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("corpus.json");
        let records = vec![
            make_record(Some("2"), "B", "second ad body"),
            make_record(Some("1"), "A", "first ad body"),
        ];
        save_corpus(&path, &records).expect("save");
        let loaded = load_corpus(&path).expect("load");
        assert_eq!(loaded, records);
    }

    #[test]
    fn json_lines_corpus_is_accepted() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("corpus.jsonl");
        let first = serde_json::to_string(&make_record(Some("1"), "A", "one")).unwrap();
        let second = serde_json::to_string(&make_record(Some("2"), "B", "two")).unwrap();
        std::fs::write(&path, format!("{first}\n{second}\n")).expect("write");
        let loaded = load_corpus(&path).expect("load");
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id.as_deref(), Some("1"));
    }

    #[test]
    fn append_deduplicates_by_library_id() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("corpus.json");
        let original = make_record(Some("1"), "A", "original body");
        save_corpus(&path, std::slice::from_ref(&original)).expect("save");

        let rescrape = make_record(Some("1"), "A", "changed body");
        let fresh = make_record(Some("2"), "A", "new ad");
        let added = append_records(&path, &[rescrape, fresh]).expect("append");

        assert_eq!(added, 1);
        let loaded = load_corpus(&path).expect("load");
        assert_eq!(loaded.len(), 2);
        // The earlier record wins over the re-scraped duplicate.
        assert_eq!(
            loaded[0].creative.copy.primary_text.as_deref(),
            Some("original body")
        );
    }

    #[test]
    fn unlinked_records_dedup_by_content_hash() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("corpus.json");
        let record = make_record(None, "A", "same body");
        let added = append_records(&path, &[record.clone(), record]).expect("append");
        assert_eq!(added, 1);
    }

    #[test]
    fn unlinked_records_with_different_copy_both_survive() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("corpus.json");
        let added = append_records(
            &path,
            &[
                make_record(None, "A", "body one"),
                make_record(None, "A", "body two"),
            ],
        )
        .expect("append");
        assert_eq!(added, 2);
    }

    #[test]
    fn malformed_file_surfaces_parse_error() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("corpus.json");
        std::fs::write(&path, "[ not json").expect("write");
        let err = load_corpus(&path).unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
    }

    #[test]
    fn fingerprint_prefers_library_id() {
        let with_id = make_record(Some("42"), "A", "body");
        assert_eq!(fingerprint(&with_id), "id:42");
        let without_id = make_record(None, "A", "body");
        assert!(fingerprint(&without_id).starts_with("sha:"));
    }
}
