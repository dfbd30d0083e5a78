//! Message handlers.
//!
//! Each handler implements [`MessageHandler`] for one message family and
//! gets the whole session, so it can coordinate the store, the forms and
//! the staged-change tracker:
//!
//! ```ignore
//! impl MessageHandler<SectionMessage> for SectionHandler {
//!     fn handle(&self, session: &mut EditorSession, msg: SectionMessage) -> Result<()> {
//!         match msg {
//!             SectionMessage::OpenCreate => { /* ... */ }
//!             // ...
//!         }
//!     }
//! }
//! ```
//!
//! [`EditorSession::update`] dispatches to the right handler and then lets
//! the forms follow whatever the store's focus now says.

mod chapter;
mod course;
mod section;

pub use chapter::ChapterHandler;
pub use course::CourseHandler;
pub use section::SectionHandler;

use crate::error::Result;
use crate::session::EditorSession;

/// Trait for handling one family of editor messages.
pub trait MessageHandler<M> {
    /// Handle a message, mutating the session.
    ///
    /// Wiring errors (bad indices, submitting a closed form) are returned;
    /// validation failures are not errors and stay on the form.
    fn handle(&self, session: &mut EditorSession, msg: M) -> Result<()>;
}
