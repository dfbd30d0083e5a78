//! Section form controller.

use course_model::{IdGenerator, Section, SectionId};
use tracing::{debug, info, warn};

use super::Submission;
use crate::error::{EditorError, Result};
use crate::event::{EditorEvent, EntityKind, EventSink, StagedChange};
use crate::state::EditorState;
use crate::validation::{FieldErrors, SectionFormData, ValidationResult, validate_section};

/// State of the section modal form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SectionFormMode {
    #[default]
    Closed,
    OpenForCreate,
    OpenForEdit(usize),
}

/// Mediates between the section modal's fields and the editor state.
#[derive(Debug, Clone, Default)]
pub struct SectionForm {
    mode: SectionFormMode,
    values: SectionFormData,
    errors: FieldErrors,
    /// Section the current values were loaded from (None for create).
    loaded_from: Option<SectionId>,
}

impl SectionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> SectionFormMode {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.mode != SectionFormMode::Closed
    }

    pub fn values(&self) -> &SectionFormData {
        &self.values
    }

    /// Field errors from the last failed submit.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.values.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.values.description = description.into();
    }

    /// Open blank for a new section.
    pub fn open_create(&mut self, state: &mut EditorState) {
        state.open_section_create();
        self.load(SectionFormMode::OpenForCreate, SectionFormData::default(), None);
    }

    /// Open for the section at `index`, loading its current values.
    pub fn open_edit(&mut self, state: &mut EditorState, index: usize) -> Result<()> {
        state.open_section_edit(index)?;
        let section = &state.sections()[index];
        self.load(
            SectionFormMode::OpenForEdit(index),
            values_of(section),
            Some(section.section_id.clone()),
        );
        Ok(())
    }

    /// Discard the draft values and close without touching the draft.
    pub fn cancel(&mut self, state: &mut EditorState) {
        state.close_section_modal();
        self.reset();
    }

    /// Validate and stage the section.
    ///
    /// In edit mode the section keeps its id and chapters; in create mode it
    /// gets a fresh id and no chapters. Values are stored as entered; only
    /// the emptiness check trims.
    ///
    /// A target that went stale since the modal opened is an error and
    /// nothing changes: `OutOfRange` when the index is gone, `StaleSelection`
    /// when it now addresses another section, `NoModalOpen` when the store
    /// closed the modal.
    pub fn submit(
        &mut self,
        state: &mut EditorState,
        ids: &dyn IdGenerator,
        events: &mut dyn EventSink,
    ) -> Result<Submission> {
        if !self.is_open() {
            return Err(EditorError::NoModalOpen(EntityKind::Section));
        }
        if let SectionFormMode::OpenForEdit(index) = self.mode {
            self.check_target(state, index)?;
        }
        if !state.focus().is_section_modal_open() {
            warn!("section modal was closed under an open form");
            return Err(EditorError::NoModalOpen(EntityKind::Section));
        }

        if let ValidationResult::Invalid(errors) = validate_section(&self.values) {
            debug!(fields = errors.len(), "section form rejected");
            self.errors = errors;
            return Ok(Submission::Invalid);
        }

        let SectionFormData { title, description } = self.values.clone();
        let (change, index) = match self.mode {
            SectionFormMode::OpenForEdit(index) => {
                let existing = &state.sections()[index];
                let section = Section {
                    section_id: existing.section_id.clone(),
                    section_title: title,
                    section_description: description,
                    chapters: existing.chapters.clone(),
                };
                state.edit_section(index, section)?;
                (StagedChange::Updated, index)
            }
            SectionFormMode::OpenForCreate => {
                let section = Section::new(ids.new_section_id()?, title, description);
                state.add_section(section);
                (StagedChange::Added, state.section_count() - 1)
            }
            SectionFormMode::Closed => return Err(EditorError::NoModalOpen(EntityKind::Section)),
        };

        info!(index, change = change.past_tense(), "section staged");
        state.close_section_modal();
        self.reset();
        events.emit(EditorEvent::Staged {
            entity: EntityKind::Section,
            change,
            section_index: index,
            chapter_index: None,
        });

        Ok(Submission::Committed {
            change,
            section_index: index,
            chapter_index: None,
        })
    }

    /// The section at `index` must still be the one the values came from.
    fn check_target(&self, state: &EditorState, index: usize) -> Result<()> {
        state.check_section(index)?;
        if Some(&state.sections()[index].section_id) != self.loaded_from.as_ref() {
            warn!(index, "section selection went stale while the modal was open");
            return Err(EditorError::StaleSelection {
                entity: EntityKind::Section,
                index,
            });
        }
        Ok(())
    }

    /// Follow external changes to the section modal's focus.
    ///
    /// When the targeted section changes identity while the modal is open,
    /// the values are reloaded from the new target, but only if they differ
    /// from what the form holds. Changes to the draft that leave the target
    /// alone never touch in-progress input. Returns whether values were
    /// reloaded.
    pub fn sync(&mut self, state: &EditorState) -> bool {
        let focus = state.focus();
        if !focus.is_section_modal_open() {
            if self.is_open() {
                self.reset();
            }
            return false;
        }

        let (mode, target, target_id) = match focus.selected_section_index() {
            Some(index) => match state.section(index) {
                Some(section) => (
                    SectionFormMode::OpenForEdit(index),
                    values_of(section),
                    Some(section.section_id.clone()),
                ),
                // Stale; submit will report it.
                None => return false,
            },
            None => (SectionFormMode::OpenForCreate, SectionFormData::default(), None),
        };

        // Edit targets are compared by identity so index shifts don't count.
        let same_target = match (self.mode, mode) {
            (SectionFormMode::OpenForEdit { .. }, SectionFormMode::OpenForEdit { .. }) => {
                self.loaded_from == target_id
            }
            (current, next) => current == next,
        };
        self.mode = mode;
        self.loaded_from = target_id;
        if same_target || self.values == target {
            return false;
        }

        debug!(?mode, "section form resynchronized");
        self.values = target;
        self.errors.clear();
        true
    }

    fn load(&mut self, mode: SectionFormMode, values: SectionFormData, from: Option<SectionId>) {
        self.mode = mode;
        self.values = values;
        self.errors.clear();
        self.loaded_from = from;
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

fn values_of(section: &Section) -> SectionFormData {
    SectionFormData {
        title: section.section_title.clone(),
        description: section.section_description.clone(),
    }
}

#[cfg(test)]
mod tests {
    use course_model::UuidGenerator;

    use super::*;
    use crate::validation::{FIELD_DESCRIPTION, FIELD_TITLE};

    fn intro_state() -> EditorState {
        EditorState::with_sections(vec![Section::new(
            SectionId::new("s1").unwrap(),
            "Intro",
            "Basics",
        )])
    }

    #[test]
    fn test_edit_scenario() {
        let mut state = intro_state();
        let mut form = SectionForm::new();
        let mut events: Vec<EditorEvent> = Vec::new();

        form.open_edit(&mut state, 0).unwrap();
        assert_eq!(form.values().title, "Intro");
        assert_eq!(form.values().description, "Basics");

        form.set_title("Introduction");
        let outcome = form.submit(&mut state, &UuidGenerator, &mut events).unwrap();

        assert!(outcome.is_committed());
        assert_eq!(
            state.sections(),
            [Section::new(
                SectionId::new("s1").unwrap(),
                "Introduction",
                "Basics"
            )]
        );
        assert_eq!(form.mode(), SectionFormMode::Closed);
        assert!(!state.focus().is_section_modal_open());
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_create_scenario() {
        let mut state = EditorState::new();
        let mut form = SectionForm::new();
        let mut events: Vec<EditorEvent> = Vec::new();

        form.open_create(&mut state);
        form.set_title("New");
        form.set_description("D");
        form.submit(&mut state, &UuidGenerator, &mut events).unwrap();

        assert_eq!(state.section_count(), 1);
        let section = &state.sections()[0];
        assert!(!section.section_id.as_str().is_empty());
        assert_eq!(section.section_title, "New");
        assert_eq!(section.section_description, "D");
        assert!(section.chapters.is_empty());
        assert_eq!(
            events,
            [EditorEvent::Staged {
                entity: EntityKind::Section,
                change: StagedChange::Added,
                section_index: 0,
                chapter_index: None,
            }]
        );
    }

    #[test]
    fn test_invalid_submit_stays_open() {
        let mut state = intro_state();
        let before = state.clone();
        let mut form = SectionForm::new();
        let mut events: Vec<EditorEvent> = Vec::new();

        form.open_edit(&mut state, 0).unwrap();
        form.set_title("  ");
        form.set_description("");
        let outcome = form.submit(&mut state, &UuidGenerator, &mut events).unwrap();

        assert_eq!(outcome, Submission::Invalid);
        assert!(form.errors().contains(FIELD_TITLE));
        assert!(form.errors().contains(FIELD_DESCRIPTION));
        assert_eq!(form.mode(), SectionFormMode::OpenForEdit(0));
        assert_eq!(state.sections(), before.sections());
        assert!(events.is_empty());
    }

    #[test]
    fn test_submit_when_closed() {
        let mut state = intro_state();
        let mut form = SectionForm::new();
        let err = form
            .submit(&mut state, &UuidGenerator, &mut Vec::<EditorEvent>::new())
            .unwrap_err();
        assert!(matches!(err, EditorError::NoModalOpen(EntityKind::Section)));
    }

    #[test]
    fn test_cancel_is_idempotent_for_draft() {
        let mut state = intro_state();
        let before = state.sections().to_vec();
        let mut form = SectionForm::new();

        form.open_edit(&mut state, 0).unwrap();
        form.set_title("Scratch");
        form.cancel(&mut state);

        assert_eq!(state.sections(), before);
        assert_eq!(form.mode(), SectionFormMode::Closed);
        assert_eq!(*form.values(), SectionFormData::default());
    }

    #[test]
    fn test_stale_selection_reported_at_submit() {
        let mut state = intro_state();
        let mut form = SectionForm::new();
        form.open_edit(&mut state, 0).unwrap();
        state.delete_section(0).unwrap();

        let err = form
            .submit(&mut state, &UuidGenerator, &mut Vec::<EditorEvent>::new())
            .unwrap_err();
        assert!(matches!(
            err,
            EditorError::OutOfRange {
                entity: EntityKind::Section,
                index: 0,
                len: 0
            }
        ));
        assert_eq!(state.section_count(), 0);
        assert!(form.is_open());
    }

    #[test]
    fn test_shifted_selection_does_not_overwrite_neighbor() {
        let mut state = intro_state();
        state.add_section(Section::new(SectionId::new("s2").unwrap(), "Traits", "Dyn"));
        let before_delete = state.sections()[1].clone();
        let mut form = SectionForm::new();
        form.open_edit(&mut state, 0).unwrap();
        form.set_title("Intro v2");

        // The form is not synced, so it still targets index 0, which is now s2.
        state.delete_section(0).unwrap();
        let err = form
            .submit(&mut state, &UuidGenerator, &mut Vec::<EditorEvent>::new())
            .unwrap_err();

        assert!(matches!(
            err,
            EditorError::StaleSelection {
                entity: EntityKind::Section,
                index: 0
            }
        ));
        assert_eq!(state.sections(), [before_delete]);
        assert!(form.is_open());
    }

    #[test]
    fn test_submit_after_store_closed_modal() {
        let mut state = intro_state();
        let mut form = SectionForm::new();
        form.open_create(&mut state);
        form.set_title("New");
        form.set_description("D");
        state.close_section_modal();

        let err = form
            .submit(&mut state, &UuidGenerator, &mut Vec::<EditorEvent>::new())
            .unwrap_err();
        assert!(matches!(err, EditorError::NoModalOpen(EntityKind::Section)));
        assert_eq!(state.section_count(), 1);
    }

    #[test]
    fn test_values_stored_as_entered() {
        let mut state = intro_state();
        let mut form = SectionForm::new();
        form.open_edit(&mut state, 0).unwrap();
        form.set_title("  Intro ");
        form.set_description("Basics\n");
        form.submit(&mut state, &UuidGenerator, &mut Vec::<EditorEvent>::new())
            .unwrap();

        let section = &state.sections()[0];
        assert_eq!(section.section_title, "  Intro ");
        assert_eq!(section.section_description, "Basics\n");
    }

    #[test]
    fn test_blank_generated_id_rejected() {
        struct BlankIds;
        impl IdGenerator for BlankIds {
            fn new_id(&self) -> String {
                String::new()
            }
        }

        let mut state = intro_state();
        let mut form = SectionForm::new();
        form.open_create(&mut state);
        form.set_title("New");
        form.set_description("D");

        let err = form
            .submit(&mut state, &BlankIds, &mut Vec::<EditorEvent>::new())
            .unwrap_err();
        assert!(matches!(err, EditorError::InvalidId(_)));
        assert_eq!(state.section_count(), 1);
    }

    #[test]
    fn test_sync_keeps_keystrokes_for_same_target() {
        let mut state = intro_state();
        state.add_section(Section::new(SectionId::new("s2").unwrap(), "Traits", "Dyn"));
        let mut form = SectionForm::new();
        form.open_edit(&mut state, 0).unwrap();
        form.set_title("Intro (draft)");

        // Unrelated change to the draft.
        state.add_section(Section::new(SectionId::new("s3").unwrap(), "Async", "Tokio"));
        assert!(!form.sync(&state));
        assert_eq!(form.values().title, "Intro (draft)");
    }

    #[test]
    fn test_sync_reloads_on_selection_change() {
        let mut state = intro_state();
        state.add_section(Section::new(SectionId::new("s2").unwrap(), "Traits", "Dyn"));
        let mut form = SectionForm::new();
        form.open_edit(&mut state, 0).unwrap();
        form.set_title("Intro (draft)");

        state.open_section_edit(1).unwrap();
        assert!(form.sync(&state));
        assert_eq!(form.mode(), SectionFormMode::OpenForEdit(1));
        assert_eq!(form.values().title, "Traits");
        assert_eq!(form.values().description, "Dyn");
    }

    #[test]
    fn test_sync_skips_reset_when_values_match() {
        let mut state = intro_state();
        state.add_section(Section::new(SectionId::new("s2").unwrap(), "Intro", "Basics"));
        let mut form = SectionForm::new();
        form.open_edit(&mut state, 0).unwrap();

        state.open_section_edit(1).unwrap();
        assert!(!form.sync(&state));
        assert_eq!(form.mode(), SectionFormMode::OpenForEdit(1));
    }

    #[test]
    fn test_sync_follows_external_open_and_close() {
        let mut state = intro_state();
        let mut form = SectionForm::new();

        state.open_section_edit(0).unwrap();
        assert!(form.sync(&state));
        assert_eq!(form.values().title, "Intro");

        state.close_section_modal();
        assert!(!form.sync(&state));
        assert_eq!(form.mode(), SectionFormMode::Closed);
    }
}
