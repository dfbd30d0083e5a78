//! Section modal and section deletion.

use tracing::info;

use super::MessageHandler;
use crate::error::Result;
use crate::event::{EditorEvent, EntityKind, EventSink, StagedChange};
use crate::message::SectionMessage;
use crate::session::EditorSession;

/// Handler for [`SectionMessage`].
pub struct SectionHandler;

impl MessageHandler<SectionMessage> for SectionHandler {
    fn handle(&self, session: &mut EditorSession, msg: SectionMessage) -> Result<()> {
        let EditorSession {
            state,
            section_form: form,
            staged,
            ids,
            events,
            ..
        } = session;

        match msg {
            SectionMessage::OpenCreate => form.open_create(state),
            SectionMessage::OpenEdit(index) => form.open_edit(state, index)?,
            SectionMessage::TitleChanged(title) => form.set_title(title),
            SectionMessage::DescriptionChanged(description) => form.set_description(description),
            SectionMessage::Submit => {
                if form.submit(state, &**ids, events)?.is_committed() {
                    staged.record(state.sections());
                }
            }
            SectionMessage::Cancel => form.cancel(state),
            SectionMessage::Delete(index) => {
                let removed = state.delete_section(index)?;
                info!(index, section_id = %removed.section_id, "section deleted");
                staged.record(state.sections());
                events.emit(EditorEvent::Staged {
                    entity: EntityKind::Section,
                    change: StagedChange::Deleted,
                    section_index: index,
                    chapter_index: None,
                });
            }
        }
        Ok(())
    }
}
