//! Course, section and chapter records.

use serde::{Deserialize, Serialize};

use crate::ids::{ChapterId, CourseId, SectionId};

/// Kind of content a chapter carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChapterType {
    #[default]
    Text,
    Quiz,
    Video,
}

impl ChapterType {
    /// Get display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Quiz => "Quiz",
            Self::Video => "Video",
        }
    }
}

/// A chapter, owned by exactly one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub chapter_id: ChapterId,
    #[serde(rename = "type")]
    pub chapter_type: ChapterType,
    pub title: String,
    pub content: String,
    /// Video reference (URL or storage key) for video chapters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
}

/// A course section with its ordered chapters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub section_id: SectionId,
    pub section_title: String,
    pub section_description: String,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

impl Section {
    /// Create a section without chapters.
    pub fn new(
        section_id: SectionId,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            section_id,
            section_title: title.into(),
            section_description: description.into(),
            chapters: Vec::new(),
        }
    }

    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }
}

/// The persisted shape of a course as handed to the save coordinator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRecord {
    pub course_id: CourseId,
    pub title: String,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl CourseRecord {
    pub fn new(course_id: CourseId, title: impl Into<String>) -> Self {
        Self {
            course_id,
            title: title.into(),
            sections: Vec::new(),
        }
    }

    /// Total chapter count across all sections.
    pub fn chapter_count(&self) -> usize {
        self.sections.iter().map(Section::chapter_count).sum()
    }
}
