//! Modal focus state.

/// Which modal is open and which entity indices it targets.
///
/// Indices are transient references into the draft, not ownership. They are
/// validated when set; a later removal can leave them stale, which the form
/// controllers detect at submit time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusState {
    pub(crate) section_modal_open: bool,
    pub(crate) chapter_modal_open: bool,
    /// Shared by both modals: the section being edited, or the section
    /// owning the chapter being edited.
    pub(crate) selected_section_index: Option<usize>,
    pub(crate) selected_chapter_index: Option<usize>,
}

impl FocusState {
    pub fn is_section_modal_open(&self) -> bool {
        self.section_modal_open
    }

    pub fn is_chapter_modal_open(&self) -> bool {
        self.chapter_modal_open
    }

    pub fn selected_section_index(&self) -> Option<usize> {
        self.selected_section_index
    }

    pub fn selected_chapter_index(&self) -> Option<usize> {
        self.selected_chapter_index
    }
}
