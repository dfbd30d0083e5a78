//! Integration tests for the edit module.

use std::fs;

use course_cli::edit::{
    EditOutcome, EditRequest, VideoChange, apply_edit, init_course, load_course,
};
use course_editor::{EditorError, EditorSettings, EntityKind, JsonCourseStore};
use course_model::ChapterType;
use tempfile::TempDir;

fn new_store() -> (TempDir, JsonCourseStore) {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonCourseStore::new(dir.path().join("course.json"));
    init_course(&mut store, "rust-101", "Rust 101").unwrap();
    (dir, store)
}

fn add_section(store: &mut JsonCourseStore, title: &str, description: &str) -> EditOutcome {
    apply_edit(
        store,
        EditorSettings::default(),
        EditRequest::AddSection {
            title: title.to_string(),
            description: description.to_string(),
        },
    )
    .unwrap()
}

#[test]
fn init_refuses_to_overwrite() {
    let (_dir, mut store) = new_store();
    let err = init_course(&mut store, "other", "Other").unwrap_err();
    assert!(err.to_string().contains("already exists"));
    assert_eq!(load_course(&store).unwrap().course_id.as_str(), "rust-101");
}

#[test]
fn init_rejects_blank_course_id() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonCourseStore::new(dir.path().join("course.json"));
    assert!(init_course(&mut store, "  ", "Untitled").is_err());
    assert!(!store.exists());
}

#[test]
fn add_section_saves_and_reports() {
    let (_dir, mut store) = new_store();

    let EditOutcome::Saved {
        record,
        notifications,
    } = add_section(&mut store, "Intro", "Basics")
    else {
        panic!("expected the section to be saved");
    };

    assert_eq!(record.sections.len(), 1);
    assert_eq!(load_course(&store).unwrap(), record);
    assert_eq!(
        notifications[0].message,
        "Section added successfully but you need to save the course to apply the changes"
    );
    assert_eq!(notifications.last().unwrap().message, "Course saved");
}

#[test]
fn invalid_section_is_not_written() {
    let (_dir, mut store) = new_store();
    let before = fs::read_to_string(store.path()).unwrap();

    let EditOutcome::Rejected { entity, errors } = add_section(&mut store, "Intro", "  ") else {
        panic!("expected a rejection");
    };

    assert_eq!(entity, EntityKind::Section);
    assert_eq!(errors.get("description"), Some("Description is required"));
    assert!(!errors.contains("title"));
    assert_eq!(fs::read_to_string(store.path()).unwrap(), before);
}

#[test]
fn partial_section_edit_keeps_other_fields() {
    let (_dir, mut store) = new_store();
    add_section(&mut store, "Intro", "Basics");

    apply_edit(
        &mut store,
        EditorSettings::default(),
        EditRequest::EditSection {
            index: 0,
            title: Some("Introduction".to_string()),
            description: None,
        },
    )
    .unwrap();

    let section = &load_course(&store).unwrap().sections[0];
    assert_eq!(section.section_title, "Introduction");
    assert_eq!(section.section_description, "Basics");
}

#[test]
fn chapter_commands() {
    let (_dir, mut store) = new_store();
    add_section(&mut store, "Intro", "Basics");

    let outcome = apply_edit(
        &mut store,
        EditorSettings::default(),
        EditRequest::AddChapter {
            section: 0,
            title: "Welcome".to_string(),
            content: "Hello".to_string(),
            video: Some("welcome.mp4".to_string()),
        },
    )
    .unwrap();
    assert!(matches!(outcome, EditOutcome::Saved { .. }));
    let chapter = load_course(&store).unwrap().sections[0].chapters[0].clone();
    assert_eq!(chapter.chapter_type, ChapterType::Video);

    apply_edit(
        &mut store,
        EditorSettings::default(),
        EditRequest::EditChapter {
            section: 0,
            chapter: 0,
            title: None,
            content: None,
            video: VideoChange::Clear,
        },
    )
    .unwrap();
    let edited = load_course(&store).unwrap().sections[0].chapters[0].clone();
    assert_eq!(edited.chapter_id, chapter.chapter_id);
    assert_eq!(edited.chapter_type, ChapterType::Text);
    assert_eq!(edited.video, None);

    apply_edit(
        &mut store,
        EditorSettings::default(),
        EditRequest::DeleteChapter {
            section: 0,
            chapter: 0,
        },
    )
    .unwrap();
    assert!(load_course(&store).unwrap().sections[0].chapters.is_empty());
}

#[test]
fn video_with_spaces_is_rejected() {
    let (_dir, mut store) = new_store();
    add_section(&mut store, "Intro", "Basics");

    let outcome = apply_edit(
        &mut store,
        EditorSettings::default(),
        EditRequest::AddChapter {
            section: 0,
            title: "Welcome".to_string(),
            content: "Hello".to_string(),
            video: Some("my video.mp4".to_string()),
        },
    )
    .unwrap();

    let EditOutcome::Rejected { entity, errors } = outcome else {
        panic!("expected a rejection");
    };
    assert_eq!(entity, EntityKind::Chapter);
    assert!(errors.contains("video"));
}

#[test]
fn out_of_range_index_is_an_error() {
    let (_dir, mut store) = new_store();

    let err = apply_edit(
        &mut store,
        EditorSettings::default(),
        EditRequest::DeleteSection { index: 0 },
    )
    .unwrap_err();

    let editor_error = err.downcast_ref::<EditorError>().unwrap();
    assert!(editor_error.is_precondition_violation());
    assert!(editor_error.suggestion().is_some());
}

#[test]
fn delete_section_removes_its_chapters() {
    let (_dir, mut store) = new_store();
    add_section(&mut store, "Intro", "Basics");
    add_section(&mut store, "Traits", "Shared behavior");

    apply_edit(
        &mut store,
        EditorSettings::default(),
        EditRequest::DeleteSection { index: 0 },
    )
    .unwrap();

    let record = load_course(&store).unwrap();
    assert_eq!(record.sections.len(), 1);
    assert_eq!(record.sections[0].section_title, "Traits");
}
