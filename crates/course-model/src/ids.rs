#![deny(unsafe_code)]

use std::fmt;

use uuid::Uuid;

use crate::ModelError;

#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct CourseId(String);

impl CourseId {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidCourseId(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CourseId {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CourseId> for String {
    fn from(id: CourseId) -> Self {
        id.0
    }
}

/// Identifier of a section.
///
/// Assigned once when the section is first staged and never changed after,
/// including across edits of the section's title or description.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct SectionId(String);

impl SectionId {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidSectionId(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for SectionId {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SectionId> for String {
    fn from(id: SectionId) -> Self {
        id.0
    }
}

#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct ChapterId(String);

impl ChapterId {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidChapterId(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChapterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ChapterId {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ChapterId> for String {
    fn from(id: ChapterId) -> Self {
        id.0
    }
}

/// Source of identifiers for entities that do not exist in the store yet.
///
/// Implementations must not need coordination with the server: ids are
/// minted on the client before anything is persisted.
pub trait IdGenerator {
    /// Produce a new opaque, non-blank identifier.
    fn new_id(&self) -> String;

    /// Mint a section id, rejecting blank output from [`new_id`](Self::new_id).
    fn new_section_id(&self) -> Result<SectionId, ModelError> {
        SectionId::new(self.new_id())
    }

    fn new_chapter_id(&self) -> Result<ChapterId, ModelError> {
        ChapterId::new(self.new_id())
    }
}

/// Random (v4) UUID identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn new_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_blank_ids_rejected() {
        assert!(SectionId::new("   ").is_err());
        assert!(ChapterId::new("").is_err());
        assert!(CourseId::new("\t").is_err());
        assert_eq!(SectionId::new(" s1 ").unwrap().as_str(), "s1");
    }

    struct BlankIds;

    impl IdGenerator for BlankIds {
        fn new_id(&self) -> String {
            "  ".to_string()
        }
    }

    #[test]
    fn test_blank_generated_ids_rejected() {
        assert!(matches!(
            BlankIds.new_section_id(),
            Err(ModelError::InvalidSectionId(_))
        ));
        assert!(matches!(
            BlankIds.new_chapter_id(),
            Err(ModelError::InvalidChapterId(_))
        ));
        assert!(UuidGenerator.new_section_id().is_ok());
    }

    #[test]
    fn test_uuid_generator_is_unique() {
        let ids = UuidGenerator;
        let generated: HashSet<String> = (0..1000).map(|_| ids.new_id()).collect();
        assert_eq!(generated.len(), 1000);
        assert!(generated.iter().all(|id| Uuid::parse_str(id).is_ok()));
    }
}
