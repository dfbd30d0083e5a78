//! Persisting course records.
//!
//! The editor only stages changes; a [`SaveCoordinator`] decides where a
//! flushed draft goes. [`JsonCourseStore`] keeps one course per JSON file.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use course_model::CourseRecord;
use tracing::{debug, info, warn};

use crate::error::PersistenceError;

/// Receives a draft when the user asks to save the course.
pub trait SaveCoordinator {
    fn save(&mut self, record: &CourseRecord) -> Result<(), PersistenceError>;
}

/// File-backed store holding one course as pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct JsonCourseStore {
    path: PathBuf,
}

impl JsonCourseStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Read the course document.
    pub fn load(&self) -> Result<CourseRecord, PersistenceError> {
        let bytes = fs::read(&self.path).map_err(|source| PersistenceError::Io {
            operation: "read",
            path: self.path.clone(),
            source,
        })?;
        let record: CourseRecord =
            serde_json::from_slice(&bytes).map_err(|source| PersistenceError::Deserialization {
                path: self.path.clone(),
                source,
            })?;
        debug!(
            path = %self.path.display(),
            sections = record.sections.len(),
            "course loaded"
        );
        Ok(record)
    }

    /// Write the course atomically: temp file, fsync, then rename over the
    /// target so a crash never leaves a half-written document.
    fn write_atomic(&self, record: &CourseRecord) -> Result<(), PersistenceError> {
        let json = serde_json::to_vec_pretty(record)
            .map_err(|source| PersistenceError::Serialization { source })?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| PersistenceError::Io {
                operation: "create directory for",
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let temp_path = self.path.with_extension("json.tmp");
        let written = write_synced(&temp_path, &json).and_then(|()| {
            fs::rename(&temp_path, &self.path).map_err(|source| {
                PersistenceError::AtomicWriteFailed {
                    temp_path: temp_path.clone(),
                    target_path: self.path.clone(),
                    source,
                }
            })
        });
        if let Err(err) = written {
            if let Err(cleanup) = fs::remove_file(&temp_path)
                && cleanup.kind() != std::io::ErrorKind::NotFound
            {
                warn!(path = %temp_path.display(), error = %cleanup, "temp file left behind");
            }
            return Err(err);
        }

        info!(
            path = %self.path.display(),
            bytes = json.len(),
            "course written"
        );
        Ok(())
    }
}

/// Write `bytes` plus a trailing newline to `path` and flush it to disk.
fn write_synced(path: &Path, bytes: &[u8]) -> Result<(), PersistenceError> {
    let io_err = |source: std::io::Error| PersistenceError::Io {
        operation: "write",
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(bytes).map_err(io_err)?;
    writer.write_all(b"\n").map_err(io_err)?;
    let file = writer
        .into_inner()
        .map_err(|err| io_err(err.into_error()))?;
    file.sync_all().map_err(io_err)
}

impl SaveCoordinator for JsonCourseStore {
    fn save(&mut self, record: &CourseRecord) -> Result<(), PersistenceError> {
        self.write_atomic(record)
    }
}

#[cfg(test)]
mod tests {
    use course_model::{CourseId, Section, SectionId};

    use super::*;

    fn record() -> CourseRecord {
        let mut record = CourseRecord::new(CourseId::new("rust-101").unwrap(), "Rust 101");
        record.sections.push(Section::new(
            SectionId::new("s1").unwrap(),
            "Intro",
            "Getting started",
        ));
        record
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonCourseStore::new(dir.path().join("nested").join("course.json"));
        assert!(!store.exists());

        store.save(&record()).unwrap();
        assert!(store.exists());
        assert!(!store.path().with_extension("json.tmp").exists());
        assert_eq!(store.load().unwrap(), record());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonCourseStore::new(dir.path().join("missing.json"));
        let err = store.load().unwrap_err();
        assert!(matches!(err, PersistenceError::Io { operation: "read", .. }));
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("course.json");
        fs::write(&path, "{ not json").unwrap();
        let err = JsonCourseStore::new(&path).load().unwrap_err();
        assert!(matches!(err, PersistenceError::Deserialization { .. }));
    }

    #[test]
    fn test_failed_rename_removes_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("course.json");
        // A directory at the target path makes the final rename fail.
        fs::create_dir(&path).unwrap();

        let err = JsonCourseStore::new(&path).save(&record()).unwrap_err();
        assert!(matches!(err, PersistenceError::AtomicWriteFailed { .. }));
        assert!(!dir.path().join("course.json.tmp").exists());
        assert!(path.is_dir());
    }
}
