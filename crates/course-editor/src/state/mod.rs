//! Editor state management.
//!
//! - **EditorState**: the course draft plus modal focus
//! - **FocusState**: which modal is open and what it targets
//! - **StagedChanges**: drift of the draft from the last saved sections

mod editor_state;
mod focus;
mod staged;

pub use editor_state::EditorState;
pub use focus::FocusState;
pub use staged::StagedChanges;
