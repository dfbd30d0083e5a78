//! Chapter modal and chapter deletion.

use tracing::info;

use super::MessageHandler;
use crate::error::Result;
use crate::event::{EditorEvent, EntityKind, EventSink, StagedChange};
use crate::message::ChapterMessage;
use crate::session::EditorSession;

/// Handler for [`ChapterMessage`].
pub struct ChapterHandler;

impl MessageHandler<ChapterMessage> for ChapterHandler {
    fn handle(&self, session: &mut EditorSession, msg: ChapterMessage) -> Result<()> {
        let EditorSession {
            state,
            chapter_form: form,
            staged,
            ids,
            events,
            ..
        } = session;

        match msg {
            ChapterMessage::OpenCreate { section_index } => form.open_create(state, section_index)?,
            ChapterMessage::OpenEdit {
                section_index,
                chapter_index,
            } => form.open_edit(state, section_index, chapter_index)?,
            ChapterMessage::TitleChanged(title) => form.set_title(title),
            ChapterMessage::ContentChanged(content) => form.set_content(content),
            ChapterMessage::VideoChanged(video) => form.set_video(video),
            ChapterMessage::Submit => {
                if form.submit(state, &**ids, events)?.is_committed() {
                    staged.record(state.sections());
                }
            }
            ChapterMessage::Cancel => form.cancel(state),
            ChapterMessage::Delete {
                section_index,
                chapter_index,
            } => {
                let removed = state.delete_chapter(section_index, chapter_index)?;
                info!(
                    section_index,
                    chapter_index,
                    chapter_id = %removed.chapter_id,
                    "chapter deleted"
                );
                staged.record(state.sections());
                events.emit(EditorEvent::Staged {
                    entity: EntityKind::Chapter,
                    change: StagedChange::Deleted,
                    section_index,
                    chapter_index: Some(chapter_index),
                });
            }
        }
        Ok(())
    }
}
