//! One-shot edits against a course document.
//!
//! Each command loads the document, drives an [`EditorSession`] through the
//! same messages a modal UI would send, and saves only when the edit was
//! staged. A validation failure leaves the file untouched.

use anyhow::{Context, Result, bail};
use course_editor::{
    ChapterMessage, EditorSession, EditorSettings, EntityKind, FieldErrors, JsonCourseStore,
    Notification, SaveCoordinator, SectionMessage,
};
use course_model::{CourseId, CourseRecord};
use tracing::{info, info_span};

/// What to do with a chapter's video reference when editing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum VideoChange {
    #[default]
    Keep,
    Set(String),
    Clear,
}

/// A single edit to apply to a stored course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditRequest {
    AddSection {
        title: String,
        description: String,
    },
    /// `None` fields keep the section's current value.
    EditSection {
        index: usize,
        title: Option<String>,
        description: Option<String>,
    },
    DeleteSection {
        index: usize,
    },
    AddChapter {
        section: usize,
        title: String,
        content: String,
        video: Option<String>,
    },
    EditChapter {
        section: usize,
        chapter: usize,
        title: Option<String>,
        content: Option<String>,
        video: VideoChange,
    },
    DeleteChapter {
        section: usize,
        chapter: usize,
    },
}

/// Result of an edit that reached validation.
#[derive(Debug)]
pub enum EditOutcome {
    /// Staged and written to disk.
    Saved {
        record: CourseRecord,
        notifications: Vec<Notification>,
    },
    /// Validation failed; nothing was written.
    Rejected {
        entity: EntityKind,
        errors: FieldErrors,
    },
}

/// Create a new, empty course document.
pub fn init_course(store: &mut JsonCourseStore, course_id: &str, title: &str) -> Result<CourseRecord> {
    if store.exists() {
        bail!("{} already exists", store.path().display());
    }
    let course_id = CourseId::new(course_id)?;
    let record = CourseRecord::new(course_id, title.trim());
    store
        .save(&record)
        .with_context(|| format!("write {}", store.path().display()))?;
    info!(course_id = %record.course_id, "course created");
    Ok(record)
}

/// Load a course document.
pub fn load_course(store: &JsonCourseStore) -> Result<CourseRecord> {
    store
        .load()
        .with_context(|| format!("load course from {}", store.path().display()))
}

/// Apply one edit and save the result.
pub fn apply_edit(
    store: &mut JsonCourseStore,
    settings: EditorSettings,
    request: EditRequest,
) -> Result<EditOutcome> {
    let record = load_course(store)?;
    let span = info_span!("edit", course_id = %record.course_id);
    let _guard = span.enter();

    let mut session = EditorSession::new(record).with_settings(settings);
    if let Some(rejected) = stage(&mut session, request)? {
        return Ok(rejected);
    }

    session
        .save(store)
        .with_context(|| format!("save course to {}", store.path().display()))?;
    Ok(EditOutcome::Saved {
        record: session.snapshot(),
        notifications: session.drain_notifications(),
    })
}

/// Drive the session for one request. Returns the rejection when the form
/// refused the values.
fn stage(session: &mut EditorSession, request: EditRequest) -> Result<Option<EditOutcome>> {
    match request {
        EditRequest::AddSection { title, description } => submit_section(
            session,
            SectionMessage::OpenCreate,
            Some(title),
            Some(description),
        ),
        EditRequest::EditSection {
            index,
            title,
            description,
        } => submit_section(session, SectionMessage::OpenEdit(index), title, description),
        EditRequest::DeleteSection { index } => {
            session.update(SectionMessage::Delete(index))?;
            Ok(None)
        }
        EditRequest::AddChapter {
            section,
            title,
            content,
            video,
        } => submit_chapter(
            session,
            ChapterMessage::OpenCreate {
                section_index: section,
            },
            Some(title),
            Some(content),
            video.map_or(VideoChange::Keep, VideoChange::Set),
        ),
        EditRequest::EditChapter {
            section,
            chapter,
            title,
            content,
            video,
        } => submit_chapter(
            session,
            ChapterMessage::OpenEdit {
                section_index: section,
                chapter_index: chapter,
            },
            title,
            content,
            video,
        ),
        EditRequest::DeleteChapter { section, chapter } => {
            session.update(ChapterMessage::Delete {
                section_index: section,
                chapter_index: chapter,
            })?;
            Ok(None)
        }
    }
}

fn submit_section(
    session: &mut EditorSession,
    open: SectionMessage,
    title: Option<String>,
    description: Option<String>,
) -> Result<Option<EditOutcome>> {
    session.update(open)?;
    if let Some(title) = title {
        session.update(SectionMessage::TitleChanged(title))?;
    }
    if let Some(description) = description {
        session.update(SectionMessage::DescriptionChanged(description))?;
    }
    session.update(SectionMessage::Submit)?;

    let form = session.section_form();
    Ok(form.is_open().then(|| EditOutcome::Rejected {
        entity: EntityKind::Section,
        errors: form.errors().clone(),
    }))
}

fn submit_chapter(
    session: &mut EditorSession,
    open: ChapterMessage,
    title: Option<String>,
    content: Option<String>,
    video: VideoChange,
) -> Result<Option<EditOutcome>> {
    session.update(open)?;
    if let Some(title) = title {
        session.update(ChapterMessage::TitleChanged(title))?;
    }
    if let Some(content) = content {
        session.update(ChapterMessage::ContentChanged(content))?;
    }
    match video {
        VideoChange::Keep => {}
        VideoChange::Set(video) => session.update(ChapterMessage::VideoChanged(Some(video)))?,
        VideoChange::Clear => session.update(ChapterMessage::VideoChanged(None))?,
    }
    session.update(ChapterMessage::Submit)?;

    let form = session.chapter_form();
    Ok(form.is_open().then(|| EditOutcome::Rejected {
        entity: EntityKind::Chapter,
        errors: form.errors().clone(),
    }))
}
