//! Editor session.
//!
//! An [`EditorSession`] is everything a shell needs to edit one course:
//! the [`EditorState`] store, both form controllers, the staged-change
//! tracker and the events waiting to be shown. The shell feeds it
//! [`EditorMessage`]s and drains events after each update.

use std::fmt;

use course_model::{CourseId, CourseRecord, IdGenerator, UuidGenerator};
use tracing::{info, warn};

use crate::error::Result;
use crate::event::{EditorEvent, EventSink, Notification};
use crate::form::{ChapterForm, SectionForm};
use crate::handler::{ChapterHandler, CourseHandler, MessageHandler, SectionHandler};
use crate::message::EditorMessage;
use crate::settings::EditorSettings;
use crate::state::{EditorState, StagedChanges};
use crate::store::SaveCoordinator;

/// One course being edited.
pub struct EditorSession {
    pub(crate) course_id: CourseId,
    pub(crate) title: String,
    pub(crate) state: EditorState,
    pub(crate) section_form: SectionForm,
    pub(crate) chapter_form: ChapterForm,
    pub(crate) staged: StagedChanges,
    pub(crate) ids: Box<dyn IdGenerator>,
    pub(crate) settings: EditorSettings,
    pub(crate) events: Vec<EditorEvent>,
}

impl fmt::Debug for EditorSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditorSession")
            .field("course_id", &self.course_id)
            .field("sections", &self.state.section_count())
            .field("staged", &self.staged.pending())
            .field("pending_events", &self.events.len())
            .finish_non_exhaustive()
    }
}

impl EditorSession {
    /// Start editing a course. The record's sections become both the draft
    /// and the saved baseline.
    pub fn new(record: CourseRecord) -> Self {
        let CourseRecord {
            course_id,
            title,
            sections,
        } = record;
        Self {
            course_id,
            title,
            state: EditorState::with_sections(sections.clone()),
            section_form: SectionForm::new(),
            chapter_form: ChapterForm::new(),
            staged: StagedChanges::new(sections),
            ids: Box::new(UuidGenerator),
            settings: EditorSettings::default(),
            events: Vec::new(),
        }
    }

    /// Use a different identifier source for new sections and chapters.
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn with_settings(mut self, settings: EditorSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Apply one message.
    ///
    /// After the handler runs, both forms are brought in line with the
    /// store's focus, so a modal whose target disappeared closes and one
    /// whose target changed identity reloads its values.
    pub fn update(&mut self, message: impl Into<EditorMessage>) -> Result<()> {
        let result = match message.into() {
            EditorMessage::Section(msg) => SectionHandler.handle(self, msg),
            EditorMessage::Chapter(msg) => ChapterHandler.handle(self, msg),
            EditorMessage::Course(msg) => CourseHandler.handle(self, msg),
        };
        self.section_form.sync(&self.state);
        self.chapter_form.sync(&self.state);
        if let Err(err) = &result {
            warn!(error = %err, "editor message rejected");
        }
        result
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    pub fn course_id(&self) -> &CourseId {
        &self.course_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn section_form(&self) -> &SectionForm {
        &self.section_form
    }

    pub fn chapter_form(&self) -> &ChapterForm {
        &self.chapter_form
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    /// Check if the draft holds changes that were not saved.
    pub fn has_unsaved_changes(&self) -> bool {
        self.staged.has_changes()
    }

    /// Staged changes against the sections as last loaded or saved.
    pub fn staged(&self) -> &StagedChanges {
        &self.staged
    }

    /// Check if the auto-save policy wants a save now.
    pub fn should_auto_save(&self) -> bool {
        self.staged.auto_save_due(&self.settings.autosave)
    }

    /// Build the full course record from the current draft.
    pub fn snapshot(&self) -> CourseRecord {
        CourseRecord {
            course_id: self.course_id.clone(),
            title: self.title.clone(),
            sections: self.state.sections().to_vec(),
        }
    }

    // =========================================================================
    // SAVING
    // =========================================================================

    /// Flush the draft through a save coordinator.
    ///
    /// On success the draft becomes the new baseline. On failure the draft
    /// and its staged changes are left untouched so the user can retry.
    pub fn save<C>(&mut self, coordinator: &mut C) -> Result<()>
    where
        C: SaveCoordinator + ?Sized,
    {
        let record = self.snapshot();
        match coordinator.save(&record) {
            Ok(()) => {
                let sections = record.sections.len();
                self.staged.rebase(record.sections);
                info!(course_id = %self.course_id, sections, "course saved");
                self.events.emit(EditorEvent::Saved { sections });
                Ok(())
            }
            Err(err) => {
                warn!(course_id = %self.course_id, error = %err, "course save failed");
                self.events.emit(EditorEvent::SaveFailed {
                    reason: err.user_message(),
                });
                Err(err.into())
            }
        }
    }

    // =========================================================================
    // EVENTS
    // =========================================================================

    /// Take all events emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<EditorEvent> {
        std::mem::take(&mut self.events)
    }

    /// Take pending events as user-facing notifications.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        let settings = &self.settings.notifications;
        std::mem::take(&mut self.events)
            .iter()
            .filter_map(|event| Notification::for_event(event, settings))
            .collect()
    }
}
