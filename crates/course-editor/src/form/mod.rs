//! Form controllers for the section and chapter modals.
//!
//! Each controller is a small state machine (closed, open for create, open
//! for edit) that sits between one entity's editable fields and the
//! [`EditorState`](crate::state::EditorState):
//!
//! 1. open: load values from the draft (edit) or start blank (create)
//! 2. edit fields
//! 3. submit: validate, commit add/edit, close, emit a staged-change event
//!
//! Validation failures keep the form open and are exposed through
//! `errors()`; they never reach the caller as `Err`.

mod chapter;
mod section;

pub use chapter::{ChapterForm, ChapterFormMode};
pub use section::{SectionForm, SectionFormMode};

use crate::event::StagedChange;

/// Result of a submit attempt that did not hit a wiring error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// The entity was staged and the form closed.
    Committed {
        change: StagedChange,
        section_index: usize,
        chapter_index: Option<usize>,
    },
    /// Validation failed; the form is still open with field errors.
    Invalid,
}

impl Submission {
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed { .. })
    }
}
