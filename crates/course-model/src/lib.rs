//! Course data model.
//!
//! A course is an ordered list of [`Section`]s, each owning an ordered list
//! of [`Chapter`]s. Serialized field names follow the document-store shape
//! (`sectionId`, `sectionTitle`, `chapterId`, ...).

pub mod course;
pub mod error;
pub mod ids;

pub use course::{Chapter, ChapterType, CourseRecord, Section};
pub use error::{ModelError, Result};
pub use ids::{ChapterId, CourseId, IdGenerator, SectionId, UuidGenerator};
