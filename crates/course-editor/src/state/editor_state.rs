//! The editor state store.
//!
//! `EditorState` owns the course draft (ordered sections, each with ordered
//! chapters) together with the modal focus state. Every mutation is
//! all-or-nothing: index checks happen before anything is touched.

use course_model::{Chapter, Section};
use tracing::debug;

use super::FocusState;
use crate::error::{EditorError, Result};
use crate::event::EntityKind;

/// Single source of truth for the draft during an editing session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorState {
    sections: Vec<Section>,
    focus: FocusState,
}

impl EditorState {
    /// Create an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a draft from previously persisted sections.
    pub fn with_sections(sections: Vec<Section>) -> Self {
        Self {
            sections,
            focus: FocusState::default(),
        }
    }

    // =========================================================================
    // READS
    // =========================================================================

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    pub fn chapter(&self, section_index: usize, chapter_index: usize) -> Option<&Chapter> {
        self.section(section_index)?.chapters.get(chapter_index)
    }

    pub fn focus(&self) -> &FocusState {
        &self.focus
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    // =========================================================================
    // SECTION MODAL
    // =========================================================================
    // At most one modal is open; opening one closes the other since both
    // share the selected section index.

    /// Open the section modal with nothing selected (create mode).
    pub fn open_section_create(&mut self) {
        self.focus.chapter_modal_open = false;
        self.focus.section_modal_open = true;
        self.focus.selected_section_index = None;
        debug!("section modal opened for create");
    }

    /// Open the section modal targeting an existing section.
    pub fn open_section_edit(&mut self, index: usize) -> Result<()> {
        self.check_section(index)?;
        self.focus.chapter_modal_open = false;
        self.focus.section_modal_open = true;
        self.focus.selected_section_index = Some(index);
        debug!(index, "section modal opened for edit");
        Ok(())
    }

    /// Close the section modal. The selection is kept but carries no
    /// meaning once closed.
    pub fn close_section_modal(&mut self) {
        self.focus.section_modal_open = false;
    }

    // =========================================================================
    // CHAPTER MODAL
    // =========================================================================

    /// Open the chapter modal to add a chapter to a section.
    pub fn open_chapter_create(&mut self, section_index: usize) -> Result<()> {
        self.check_section(section_index)?;
        self.focus.section_modal_open = false;
        self.focus.chapter_modal_open = true;
        self.focus.selected_section_index = Some(section_index);
        self.focus.selected_chapter_index = None;
        debug!(section_index, "chapter modal opened for create");
        Ok(())
    }

    /// Open the chapter modal targeting an existing chapter.
    pub fn open_chapter_edit(&mut self, section_index: usize, chapter_index: usize) -> Result<()> {
        self.check_chapter(section_index, chapter_index)?;
        self.focus.section_modal_open = false;
        self.focus.chapter_modal_open = true;
        self.focus.selected_section_index = Some(section_index);
        self.focus.selected_chapter_index = Some(chapter_index);
        debug!(section_index, chapter_index, "chapter modal opened for edit");
        Ok(())
    }

    pub fn close_chapter_modal(&mut self) {
        self.focus.chapter_modal_open = false;
    }

    // =========================================================================
    // SECTION MUTATIONS
    // =========================================================================

    /// Append a section to the end of the draft.
    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Replace the section at `index` in place. The replacement's chapters
    /// are taken as given, not merged.
    pub fn edit_section(&mut self, index: usize, section: Section) -> Result<()> {
        self.check_section(index)?;
        self.sections[index] = section;
        Ok(())
    }

    /// Remove the section at `index`, keeping the order of the rest.
    ///
    /// Focus follows the selected section when an earlier one is removed. If
    /// the selected section itself is removed, any modal targeting it closes.
    pub fn delete_section(&mut self, index: usize) -> Result<Section> {
        self.check_section(index)?;
        let removed = self.sections.remove(index);
        match self.focus.selected_section_index {
            Some(selected) if selected == index => {
                self.focus.section_modal_open = false;
                self.focus.chapter_modal_open = false;
            }
            Some(selected) if selected > index => {
                self.focus.selected_section_index = Some(selected - 1);
            }
            _ => {}
        }
        Ok(removed)
    }

    /// Replace the whole draft, e.g. after a fresh load from storage.
    pub fn set_sections(&mut self, sections: Vec<Section>) {
        self.sections = sections;
        self.focus = FocusState::default();
    }

    // =========================================================================
    // CHAPTER MUTATIONS
    // =========================================================================

    pub fn add_chapter(&mut self, section_index: usize, chapter: Chapter) -> Result<()> {
        self.check_section(section_index)?;
        self.sections[section_index].chapters.push(chapter);
        Ok(())
    }

    pub fn edit_chapter(
        &mut self,
        section_index: usize,
        chapter_index: usize,
        chapter: Chapter,
    ) -> Result<()> {
        self.check_chapter(section_index, chapter_index)?;
        self.sections[section_index].chapters[chapter_index] = chapter;
        Ok(())
    }

    /// Remove a chapter; focus is adjusted the same way as for sections.
    pub fn delete_chapter(&mut self, section_index: usize, chapter_index: usize) -> Result<Chapter> {
        self.check_chapter(section_index, chapter_index)?;
        let removed = self.sections[section_index].chapters.remove(chapter_index);
        if self.focus.selected_section_index == Some(section_index) {
            match self.focus.selected_chapter_index {
                Some(selected) if selected == chapter_index => {
                    self.focus.chapter_modal_open = false;
                }
                Some(selected) if selected > chapter_index => {
                    self.focus.selected_chapter_index = Some(selected - 1);
                }
                _ => {}
            }
        }
        Ok(removed)
    }

    // =========================================================================
    // INDEX CHECKS
    // =========================================================================

    pub(crate) fn check_section(&self, index: usize) -> Result<()> {
        if index < self.sections.len() {
            Ok(())
        } else {
            Err(EditorError::out_of_range(
                EntityKind::Section,
                index,
                self.sections.len(),
            ))
        }
    }

    pub(crate) fn check_chapter(&self, section_index: usize, chapter_index: usize) -> Result<()> {
        self.check_section(section_index)?;
        let len = self.sections[section_index].chapters.len();
        if chapter_index < len {
            Ok(())
        } else {
            Err(EditorError::out_of_range(
                EntityKind::Chapter,
                chapter_index,
                len,
            ))
        }
    }
}
