use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("invalid course id: {0:?}")]
    InvalidCourseId(String),
    #[error("invalid section id: {0:?}")]
    InvalidSectionId(String),
    #[error("invalid chapter id: {0:?}")]
    InvalidChapterId(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
