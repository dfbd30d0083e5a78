//! Messages driving an editor session.
//!
//! The UI shell translates user actions into these and feeds them to
//! [`EditorSession::update`](crate::session::EditorSession::update).

use course_model::Section;

/// Root message type.
#[derive(Debug, Clone)]
pub enum EditorMessage {
    Section(SectionMessage),
    Chapter(ChapterMessage),
    Course(CourseMessage),
}

/// Section modal messages.
#[derive(Debug, Clone)]
pub enum SectionMessage {
    /// "Add section" clicked.
    OpenCreate,
    /// "Edit" clicked on the section at index.
    OpenEdit(usize),
    TitleChanged(String),
    DescriptionChanged(String),
    Submit,
    Cancel,
    /// Remove the section at index.
    Delete(usize),
}

/// Chapter modal messages.
#[derive(Debug, Clone)]
pub enum ChapterMessage {
    /// "Add chapter" clicked within a section.
    OpenCreate { section_index: usize },
    /// "Edit" clicked on a chapter.
    OpenEdit {
        section_index: usize,
        chapter_index: usize,
    },
    TitleChanged(String),
    ContentChanged(String),
    /// Set or clear the video reference.
    VideoChanged(Option<String>),
    Submit,
    Cancel,
    Delete {
        section_index: usize,
        chapter_index: usize,
    },
}

/// Whole-draft messages.
#[derive(Debug, Clone)]
pub enum CourseMessage {
    /// Replace the draft with sections loaded from storage.
    SetSections(Vec<Section>),
    /// Drop the staged flag if the draft matches what was last saved.
    Reconcile,
}

impl From<SectionMessage> for EditorMessage {
    fn from(msg: SectionMessage) -> Self {
        Self::Section(msg)
    }
}

impl From<ChapterMessage> for EditorMessage {
    fn from(msg: ChapterMessage) -> Self {
        Self::Chapter(msg)
    }
}

impl From<CourseMessage> for EditorMessage {
    fn from(msg: CourseMessage) -> Self {
        Self::Course(msg)
    }
}
