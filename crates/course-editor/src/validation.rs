//! Field validation for section and chapter forms.
//!
//! Validation is a pure function from form values to a [`ValidationResult`].
//! It never touches editor state; the form controllers run it before any
//! mutation and keep the resulting [`FieldErrors`] for display.

use std::collections::BTreeMap;

/// Field name for titles (both sections and chapters).
pub const FIELD_TITLE: &str = "title";
/// Field name for section descriptions.
pub const FIELD_DESCRIPTION: &str = "description";
/// Field name for chapter content.
pub const FIELD_CONTENT: &str = "content";
/// Field name for a chapter's video reference.
pub const FIELD_VIDEO: &str = "video";

/// Editable fields of a section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionFormData {
    pub title: String,
    pub description: String,
}

/// Editable fields of a chapter.
///
/// A blank `video` means "no video".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChapterFormData {
    pub title: String,
    pub content: String,
    pub video: String,
}

impl ChapterFormData {
    /// Trimmed video reference, if any.
    pub fn video_ref(&self) -> Option<&str> {
        let video = self.video.trim();
        (!video.is_empty()).then_some(video)
    }
}

/// Field-scoped error messages, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<&'static str, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for a field. The first error per field wins.
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// Iterate `(field, message)` pairs in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

/// Outcome of validating a set of form values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(FieldErrors),
}

impl ValidationResult {
    fn from_errors(errors: FieldErrors) -> Self {
        if errors.is_empty() {
            Self::Valid
        } else {
            Self::Invalid(errors)
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Field errors, empty when valid.
    pub fn errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Valid => None,
            Self::Invalid(errors) => Some(errors),
        }
    }
}

fn require(errors: &mut FieldErrors, field: &'static str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.insert(field, message);
    }
}

/// Validate section form values: title and description are required.
pub fn validate_section(data: &SectionFormData) -> ValidationResult {
    let mut errors = FieldErrors::new();
    require(&mut errors, FIELD_TITLE, &data.title, "Title is required");
    require(
        &mut errors,
        FIELD_DESCRIPTION,
        &data.description,
        "Description is required",
    );
    ValidationResult::from_errors(errors)
}

/// Validate chapter form values.
///
/// Title and content are required. The video reference is optional but
/// must be a single token (URL or storage key) when given.
pub fn validate_chapter(data: &ChapterFormData) -> ValidationResult {
    let mut errors = FieldErrors::new();
    require(&mut errors, FIELD_TITLE, &data.title, "Title is required");
    require(
        &mut errors,
        FIELD_CONTENT,
        &data.content,
        "Content is required",
    );
    if let Some(video) = data.video_ref()
        && video.chars().any(char::is_whitespace)
    {
        errors.insert(FIELD_VIDEO, "Video reference cannot contain spaces");
    }
    ValidationResult::from_errors(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(title: &str, description: &str) -> SectionFormData {
        SectionFormData {
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_valid_section() {
        assert!(validate_section(&section("Intro", "Basics")).is_valid());
    }

    #[test]
    fn test_blank_section_fields() {
        let result = validate_section(&section("   ", "\n"));
        let errors = result.errors().expect("invalid");
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(FIELD_TITLE), Some("Title is required"));
        assert_eq!(errors.get(FIELD_DESCRIPTION), Some("Description is required"));

        let result = validate_section(&section("Intro", ""));
        let errors = result.errors().expect("invalid");
        assert!(!errors.contains(FIELD_TITLE));
        assert!(errors.contains(FIELD_DESCRIPTION));
    }

    #[test]
    fn test_chapter_video_optional() {
        let mut data = ChapterFormData {
            title: "Welcome".to_string(),
            content: "Overview".to_string(),
            video: "  ".to_string(),
        };
        assert!(validate_chapter(&data).is_valid());
        assert_eq!(data.video_ref(), None);

        data.video = "https://cdn.example.com/v 1.mp4".to_string();
        let result = validate_chapter(&data);
        assert!(result.errors().expect("invalid").contains(FIELD_VIDEO));

        data.video = " https://cdn.example.com/v1.mp4 ".to_string();
        assert!(validate_chapter(&data).is_valid());
        assert_eq!(data.video_ref(), Some("https://cdn.example.com/v1.mp4"));
    }

    #[test]
    fn test_first_error_per_field_wins() {
        let mut errors = FieldErrors::new();
        errors.insert(FIELD_TITLE, "first");
        errors.insert(FIELD_TITLE, "second");
        assert_eq!(errors.get(FIELD_TITLE), Some("first"));
        assert_eq!(errors.iter().count(), 1);
    }
}
