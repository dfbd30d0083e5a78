//! Whole-draft operations.

use tracing::{debug, info};

use super::MessageHandler;
use crate::error::Result;
use crate::event::{EditorEvent, EventSink};
use crate::message::CourseMessage;
use crate::session::EditorSession;

/// Handler for [`CourseMessage`].
pub struct CourseHandler;

impl MessageHandler<CourseMessage> for CourseHandler {
    fn handle(&self, session: &mut EditorSession, msg: CourseMessage) -> Result<()> {
        match msg {
            CourseMessage::SetSections(sections) => {
                let count = sections.len();
                session.staged.rebase(sections.clone());
                session.state.set_sections(sections);
                info!(sections = count, "draft replaced");
                session
                    .events
                    .emit(EditorEvent::DraftReplaced { sections: count });
            }
            CourseMessage::Reconcile => {
                if session.staged.reconcile(session.state.sections()) {
                    debug!("draft matches saved baseline");
                }
            }
        }
        Ok(())
    }
}
