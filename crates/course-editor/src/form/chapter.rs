//! Chapter form controller.
//!
//! Same lifecycle as the section form, scoped to one section's chapters.

use course_model::{Chapter, ChapterId, ChapterType, IdGenerator, SectionId};
use tracing::{debug, info, warn};

use super::Submission;
use crate::error::{EditorError, Result};
use crate::event::{EditorEvent, EntityKind, EventSink, StagedChange};
use crate::state::EditorState;
use crate::validation::{ChapterFormData, FieldErrors, ValidationResult, validate_chapter};

/// State of the chapter modal form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChapterFormMode {
    #[default]
    Closed,
    OpenForCreate {
        section_index: usize,
    },
    OpenForEdit {
        section_index: usize,
        chapter_index: usize,
    },
}

/// Mediates between the chapter modal's fields and the editor state.
#[derive(Debug, Clone, Default)]
pub struct ChapterForm {
    mode: ChapterFormMode,
    values: ChapterFormData,
    errors: FieldErrors,
    target_section: Option<SectionId>,
    loaded_from: Option<ChapterId>,
}

impl ChapterForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> ChapterFormMode {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.mode != ChapterFormMode::Closed
    }

    pub fn values(&self) -> &ChapterFormData {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.values.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.values.content = content.into();
    }

    /// Set or clear the video reference.
    pub fn set_video(&mut self, video: Option<String>) {
        self.values.video = video.unwrap_or_default();
    }

    pub fn open_create(&mut self, state: &mut EditorState, section_index: usize) -> Result<()> {
        state.open_chapter_create(section_index)?;
        let section_id = state.sections()[section_index].section_id.clone();
        self.load(
            ChapterFormMode::OpenForCreate { section_index },
            ChapterFormData::default(),
            (section_id, None),
        );
        Ok(())
    }

    pub fn open_edit(
        &mut self,
        state: &mut EditorState,
        section_index: usize,
        chapter_index: usize,
    ) -> Result<()> {
        state.open_chapter_edit(section_index, chapter_index)?;
        let section = &state.sections()[section_index];
        let chapter = &section.chapters[chapter_index];
        self.load(
            ChapterFormMode::OpenForEdit {
                section_index,
                chapter_index,
            },
            values_of(chapter),
            (section.section_id.clone(), Some(chapter.chapter_id.clone())),
        );
        Ok(())
    }

    pub fn cancel(&mut self, state: &mut EditorState) {
        state.close_chapter_modal();
        self.reset();
    }

    /// Validate and stage the chapter.
    ///
    /// A chapter with a video reference becomes a video chapter. Without
    /// one it is a text chapter, except that an edited quiz stays a quiz.
    /// Title and content are stored as entered; the video reference is
    /// stored without surrounding whitespace.
    ///
    /// Fails without touching the draft when the section or chapter the form
    /// was opened for has moved or gone, or the store closed the modal.
    pub fn submit(
        &mut self,
        state: &mut EditorState,
        ids: &dyn IdGenerator,
        events: &mut dyn EventSink,
    ) -> Result<Submission> {
        if !self.is_open() {
            return Err(EditorError::NoModalOpen(EntityKind::Chapter));
        }
        self.check_target(state)?;
        if !state.focus().is_chapter_modal_open() {
            warn!("chapter modal was closed under an open form");
            return Err(EditorError::NoModalOpen(EntityKind::Chapter));
        }

        if let ValidationResult::Invalid(errors) = validate_chapter(&self.values) {
            debug!(fields = errors.len(), "chapter form rejected");
            self.errors = errors;
            return Ok(Submission::Invalid);
        }

        let video = self.values.video_ref().map(str::to_string);
        let title = self.values.title.clone();
        let content = self.values.content.clone();

        let (change, section_index, chapter_index) = match self.mode {
            ChapterFormMode::OpenForEdit {
                section_index,
                chapter_index,
            } => {
                let existing = &state.sections()[section_index].chapters[chapter_index];
                let chapter = Chapter {
                    chapter_id: existing.chapter_id.clone(),
                    chapter_type: chapter_type(video.as_deref(), Some(existing.chapter_type)),
                    title,
                    content,
                    video,
                };
                state.edit_chapter(section_index, chapter_index, chapter)?;
                (StagedChange::Updated, section_index, chapter_index)
            }
            ChapterFormMode::OpenForCreate { section_index } => {
                let chapter = Chapter {
                    chapter_id: ids.new_chapter_id()?,
                    chapter_type: chapter_type(video.as_deref(), None),
                    title,
                    content,
                    video,
                };
                state.add_chapter(section_index, chapter)?;
                let chapter_index = state.sections()[section_index].chapters.len() - 1;
                (StagedChange::Added, section_index, chapter_index)
            }
            ChapterFormMode::Closed => {
                return Err(EditorError::NoModalOpen(EntityKind::Chapter));
            }
        };

        info!(
            section_index,
            chapter_index,
            change = change.past_tense(),
            "chapter staged"
        );
        state.close_chapter_modal();
        self.reset();
        events.emit(EditorEvent::Staged {
            entity: EntityKind::Chapter,
            change,
            section_index,
            chapter_index: Some(chapter_index),
        });

        Ok(Submission::Committed {
            change,
            section_index,
            chapter_index: Some(chapter_index),
        })
    }

    /// The indices must still address the section and chapter the values
    /// came from. A missing index wins over a shifted one.
    fn check_target(&self, state: &EditorState) -> Result<()> {
        let (section_index, chapter_index) = match self.mode {
            ChapterFormMode::OpenForEdit {
                section_index,
                chapter_index,
            } => {
                state.check_chapter(section_index, chapter_index)?;
                (section_index, Some(chapter_index))
            }
            ChapterFormMode::OpenForCreate { section_index } => {
                state.check_section(section_index)?;
                (section_index, None)
            }
            ChapterFormMode::Closed => return Ok(()),
        };

        let section = &state.sections()[section_index];
        if Some(&section.section_id) != self.target_section.as_ref() {
            warn!(section_index, "chapter form's section moved while the modal was open");
            return Err(EditorError::StaleSelection {
                entity: EntityKind::Section,
                index: section_index,
            });
        }
        if let Some(chapter_index) = chapter_index
            && Some(&section.chapters[chapter_index].chapter_id) != self.loaded_from.as_ref()
        {
            warn!(
                section_index,
                chapter_index, "chapter selection went stale while the modal was open"
            );
            return Err(EditorError::StaleSelection {
                entity: EntityKind::Chapter,
                index: chapter_index,
            });
        }
        Ok(())
    }

    /// Follow external changes to the chapter modal's focus.
    ///
    /// Reloads values only when the target section or chapter changes
    /// identity and the new target's values differ from the form's.
    pub fn sync(&mut self, state: &EditorState) -> bool {
        let focus = state.focus();
        if !focus.is_chapter_modal_open() {
            if self.is_open() {
                self.reset();
            }
            return false;
        }

        let Some(section_index) = focus.selected_section_index() else {
            return false;
        };
        let Some(section) = state.section(section_index) else {
            return false;
        };
        let (mode, target, target_id) = match focus.selected_chapter_index() {
            Some(chapter_index) => match section.chapters.get(chapter_index) {
                Some(chapter) => (
                    ChapterFormMode::OpenForEdit {
                        section_index,
                        chapter_index,
                    },
                    values_of(chapter),
                    Some(chapter.chapter_id.clone()),
                ),
                None => return false,
            },
            None => (
                ChapterFormMode::OpenForCreate { section_index },
                ChapterFormData::default(),
                None,
            ),
        };

        // Targets are compared by identity so index shifts don't count.
        let same_section = self.target_section.as_ref() == Some(&section.section_id);
        let same_target = same_section
            && match (self.mode, mode) {
                (ChapterFormMode::OpenForEdit { .. }, ChapterFormMode::OpenForEdit { .. }) => {
                    self.loaded_from == target_id
                }
                (ChapterFormMode::OpenForCreate { .. }, ChapterFormMode::OpenForCreate { .. }) => {
                    true
                }
                _ => false,
            };
        self.mode = mode;
        self.target_section = Some(section.section_id.clone());
        self.loaded_from = target_id;
        if same_target || self.values == target {
            return false;
        }

        debug!(?mode, "chapter form resynchronized");
        self.values = target;
        self.errors.clear();
        true
    }

    fn load(
        &mut self,
        mode: ChapterFormMode,
        values: ChapterFormData,
        (section, chapter): (SectionId, Option<ChapterId>),
    ) {
        self.mode = mode;
        self.values = values;
        self.errors.clear();
        self.target_section = Some(section);
        self.loaded_from = chapter;
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

fn values_of(chapter: &Chapter) -> ChapterFormData {
    ChapterFormData {
        title: chapter.title.clone(),
        content: chapter.content.clone(),
        video: chapter.video.clone().unwrap_or_default(),
    }
}

fn chapter_type(video: Option<&str>, previous: Option<ChapterType>) -> ChapterType {
    match (video, previous) {
        (Some(_), _) => ChapterType::Video,
        (None, Some(ChapterType::Quiz)) => ChapterType::Quiz,
        (None, _) => ChapterType::Text,
    }
}
