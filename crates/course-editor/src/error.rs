//! Editor error types.
//!
//! Field validation failures are not errors: they stay inside the form
//! controllers as [`FieldErrors`](crate::validation::FieldErrors). What
//! remains here are wiring defects (bad indices, submitting a closed form)
//! and failures reported by the save coordinator.

use std::path::PathBuf;

use course_model::ModelError;
use thiserror::Error;

use crate::event::EntityKind;

/// Errors raised by the editor state store and form controllers.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum EditorError {
    /// An index does not address an entity in the current draft.
    ///
    /// Under correct UI wiring this never happens; it is also how a
    /// selection that went stale while a modal was open is reported.
    #[error("{entity} index {index} is out of range ({len} available)")]
    OutOfRange {
        /// Kind of entity the index refers to.
        entity: EntityKind,
        /// The offending index.
        index: usize,
        /// Number of entities available at that level.
        len: usize,
    },

    /// The index a form was opened for now addresses a different entity.
    #[error("{entity} at index {index} changed while its form was open")]
    StaleSelection {
        entity: EntityKind,
        index: usize,
    },

    /// A form action arrived while its modal was closed.
    #[error("No {0} modal is open")]
    NoModalOpen(EntityKind),

    /// The identifier generator produced an unusable id.
    #[error(transparent)]
    InvalidId(#[from] ModelError),

    /// The save coordinator failed to persist the draft.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

impl EditorError {
    pub(crate) fn out_of_range(entity: EntityKind, index: usize, len: usize) -> Self {
        Self::OutOfRange { entity, index, len }
    }

    /// Check if this error signals a UI wiring defect rather than a runtime failure.
    pub fn is_precondition_violation(&self) -> bool {
        matches!(
            self,
            Self::OutOfRange { .. } | Self::StaleSelection { .. } | Self::NoModalOpen(_)
        )
    }

    /// Get a user-friendly suggestion for resolving this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::OutOfRange { .. } | Self::StaleSelection { .. } => {
                Some("The selected item no longer exists. Close the dialog and try again.".into())
            }
            Self::NoModalOpen(_) | Self::InvalidId(_) => None,
            Self::Persistence(err) => err.suggestion(),
        }
    }
}

/// Persistence error raised while loading or saving a course document.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// File I/O error.
    #[error("Failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serialization error.
    #[error("Failed to serialize course data")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },

    /// Deserialization error.
    #[error("Failed to read course data from {path}")]
    Deserialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Atomic write failed (temp file couldn't be renamed).
    #[error("Failed to complete save operation")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Persistence backend rejected the save for its own reasons.
    #[error("Save rejected: {reason}")]
    Rejected { reason: String },
}

impl PersistenceError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => {
                format!("Could not {} the file at {}", operation, path.display())
            }
            Self::Serialization { .. } => {
                "An error occurred while saving the course data.".to_string()
            }
            Self::Deserialization { path, .. } => {
                format!(
                    "The file at {} is not a valid course document.",
                    path.display()
                )
            }
            Self::AtomicWriteFailed { target_path, .. } => {
                format!(
                    "Could not save the course to {}. Please check disk space and permissions.",
                    target_path.display()
                )
            }
            Self::Rejected { reason } => format!("The course could not be saved: {reason}"),
        }
    }

    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Io { operation, .. } => {
                if *operation == "read" {
                    Some("Check that the file exists and you have permission to read it.".into())
                } else {
                    Some("Check that you have permission to write to this location.".into())
                }
            }
            Self::Serialization { .. } | Self::Rejected { .. } => None,
            Self::Deserialization { .. } => {
                Some("Make sure you selected a course document saved by this tool.".into())
            }
            Self::AtomicWriteFailed { .. } => {
                Some("Free up disk space or try saving to a different location.".into())
            }
        }
    }
}

/// Result type alias for editor operations.
pub type Result<T> = std::result::Result<T, EditorError>;
