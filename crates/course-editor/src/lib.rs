//! Staged course editing.
//!
//! Sections and chapters are edited through modal forms against an
//! in-memory draft. Committed edits are *staged*: they change the draft and
//! raise a notification, but nothing is persisted until the session is
//! saved through a [`SaveCoordinator`].
//!
//! # Architecture
//!
//! - [`state`]: the [`EditorState`] store (draft plus modal focus)
//! - [`form`]: section and chapter form controllers
//! - [`message`] / [`handler`]: messages and the handlers that apply them
//! - [`session`]: [`EditorSession`], wiring everything for one course
//! - [`store`]: [`SaveCoordinator`] and the JSON file store

pub mod error;
pub mod event;
pub mod form;
pub mod handler;
pub mod message;
pub mod session;
pub mod settings;
pub mod state;
pub mod store;
pub mod validation;

pub use error::{EditorError, PersistenceError, Result};
pub use event::{
    EditorEvent, EntityKind, EventSink, Notification, NotificationKind, StagedChange,
};
pub use form::{ChapterForm, ChapterFormMode, SectionForm, SectionFormMode, Submission};
pub use message::{ChapterMessage, CourseMessage, EditorMessage, SectionMessage};
pub use session::EditorSession;
pub use settings::{AutoSaveConfig, EditorSettings, NotificationSettings, SettingsError};
pub use state::{EditorState, FocusState, StagedChanges};
pub use store::{JsonCourseStore, SaveCoordinator};
pub use validation::{
    ChapterFormData, FieldErrors, SectionFormData, ValidationResult, validate_chapter,
    validate_section,
};
