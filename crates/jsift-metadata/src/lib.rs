//! Ingestion of type-metadata dumps into a [`jsift_types::TypeStore`].
//!
//! A dump is a JSON array of type records as exported by an external
//! introspection facility; see [`jsift_types::RawTypeRecord`] for the shape.
//! Sources may be single files or directories, which are walked recursively
//! for `*.json` files in name order.
//!
//! Loading is tolerant: a source that cannot be read or parsed is recorded as
//! a scan failure and skipped, so one bad dump never poisons the pool.

#![forbid(unsafe_code)]

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use jsift_types::{RawTypeRecord, TypeStore, TypeStoreBuilder};

/// Why a single metadata source was skipped.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{} does not exist", .0.display())]
    Missing(PathBuf),
}

/// One skipped source, for the statistics report.
#[derive(Debug)]
pub struct ScanFailure {
    pub path: PathBuf,
    pub error: LoadError,
}

/// Feeds metadata sources into one shared [`TypeStoreBuilder`].
#[derive(Debug, Default)]
pub struct MetadataLoader {
    builder: TypeStoreBuilder,
    failures: Vec<ScanFailure>,
}

impl MetadataLoader {
    pub fn new() -> MetadataLoader {
        MetadataLoader::default()
    }

    /// Load a dump file, or every `*.json` file under a directory.
    ///
    /// Failures are collected, not raised; see [`MetadataLoader::finish`].
    pub fn load_path(&mut self, path: &Path) {
        if path.is_dir() {
            for entry in walkdir::WalkDir::new(path)
                .follow_links(false)
                .sort_by_file_name()
                .into_iter()
                .filter_map(Result::ok)
            {
                if !entry.file_type().is_file() {
                    continue;
                }
                if entry.path().extension() != Some(OsStr::new("json")) {
                    continue;
                }
                self.load_file(entry.path());
            }
        } else if path.is_file() {
            self.load_file(path);
        } else {
            warn!(path = %path.display(), "metadata source does not exist");
            self.failures.push(ScanFailure {
                path: path.to_owned(),
                error: LoadError::Missing(path.to_owned()),
            });
        }
    }

    fn load_file(&mut self, path: &Path) {
        match read_records(path) {
            Ok(records) => {
                debug!(path = %path.display(), count = records.len(), "loaded metadata dump");
                for record in records {
                    self.builder.add_record(record);
                }
            }
            Err(error) => {
                warn!(path = %path.display(), %error, "skipping unreadable metadata dump");
                self.failures.push(ScanFailure {
                    path: path.to_owned(),
                    error,
                });
            }
        }
    }

    pub fn record_count(&self) -> usize {
        self.builder.len()
    }

    /// Freeze the pool and hand back the scan failures for reporting.
    pub fn finish(self) -> (TypeStore, Vec<ScanFailure>) {
        (self.builder.build(), self.failures)
    }
}

fn read_records(path: &Path) -> Result<Vec<RawTypeRecord>, LoadError> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    const DUMP: &str = r#"[
        {
            "name": "com.example.Foo",
            "modifiers": 1,
            "superclass": "java.lang.Object",
            "interfaces": ["java.io.Closeable"],
            "methods": [
                {"name": "close", "modifiers": 1, "parameters": [], "returns": "void"},
                {"name": "read", "modifiers": 1, "parameters": ["byte[]"], "returns": "int"}
            ]
        }
    ]"#;

    #[test]
    fn loads_a_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dump.json");
        fs::write(&path, DUMP).unwrap();

        let mut loader = MetadataLoader::new();
        loader.load_path(&path);
        let (store, failures) = loader.finish();

        assert!(failures.is_empty());
        let id = store.lookup_class("com.example.Foo").unwrap();
        let stub = store.stub(id);
        assert_eq!(stub.methods.len(), 2);
        assert_eq!(stub.methods[1].name, "read");
        assert_eq!(
            store.display_type(&stub.methods[1].params[0]),
            "byte[]".to_owned()
        );
        // Referenced names resolve as placeholders.
        assert!(store.resolve("java.io.Closeable").is_ok());
    }

    #[test]
    fn walks_directories_in_name_order_and_skips_non_json() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("b.json"),
            r#"[{"name": "com.example.B"}]"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("a.json"),
            r#"[{"name": "com.example.A"}]"#,
        )
        .unwrap();
        fs::write(dir.path().join("notes.txt"), "not metadata").unwrap();

        let mut loader = MetadataLoader::new();
        loader.load_path(dir.path());
        let (store, failures) = loader.finish();

        assert!(failures.is_empty());
        let names: Vec<&str> = store.classes().map(|(_, stub)| stub.name.as_str()).collect();
        assert_eq!(names, vec!["com.example.A", "com.example.B"]);
    }

    #[test]
    fn bad_sources_are_scan_failures_not_errors() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.json");
        fs::write(&good, r#"[{"name": "com.example.Good"}]"#).unwrap();
        let bad = dir.path().join("bad.json");
        fs::write(&bad, "{ not json").unwrap();
        let missing = dir.path().join("nope.json");

        let mut loader = MetadataLoader::new();
        loader.load_path(&good);
        loader.load_path(&bad);
        loader.load_path(&missing);
        let (store, failures) = loader.finish();

        assert!(store.lookup_class("com.example.Good").is_some());
        assert_eq!(failures.len(), 2);
        assert!(matches!(failures[0].error, LoadError::Json(_)));
        assert!(matches!(failures[1].error, LoadError::Missing(_)));
    }
}
