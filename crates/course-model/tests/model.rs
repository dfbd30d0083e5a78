//! Tests for course-model types.

use course_model::{
    Chapter, ChapterId, ChapterType, CourseId, CourseRecord, Section, SectionId,
};

fn sample_course() -> CourseRecord {
    let mut course = CourseRecord::new(CourseId::new("c1").unwrap(), "Rust 101");
    let mut intro = Section::new(SectionId::new("s1").unwrap(), "Intro", "Basics");
    intro.chapters.push(Chapter {
        chapter_id: ChapterId::new("ch1").unwrap(),
        chapter_type: ChapterType::Video,
        title: "Welcome".to_string(),
        content: "What we will cover".to_string(),
        video: Some("https://videos.example.com/welcome.mp4".to_string()),
    });
    course.sections.push(intro);
    course
        .sections
        .push(Section::new(SectionId::new("s2").unwrap(), "Ownership", "Moves"));
    course
}

#[test]
fn record_uses_document_field_names() {
    let json = serde_json::to_value(sample_course()).expect("serialize course");

    assert_eq!(json["courseId"], "c1");
    let section = &json["sections"][0];
    assert_eq!(section["sectionId"], "s1");
    assert_eq!(section["sectionTitle"], "Intro");
    assert_eq!(section["sectionDescription"], "Basics");
    let chapter = &section["chapters"][0];
    assert_eq!(chapter["chapterId"], "ch1");
    assert_eq!(chapter["type"], "Video");
    assert_eq!(
        chapter["video"],
        "https://videos.example.com/welcome.mp4"
    );
    assert!(json["sections"][1]["chapters"].as_array().unwrap().is_empty());
}

#[test]
fn record_round_trips_through_json() {
    let course = sample_course();
    let json = serde_json::to_string(&course).expect("serialize course");
    let round: CourseRecord = serde_json::from_str(&json).expect("deserialize course");
    assert_eq!(round, course);
    assert_eq!(round.chapter_count(), 1);
}

#[test]
fn missing_chapters_default_to_empty() {
    let json = r#"{"sectionId":"s9","sectionTitle":"T","sectionDescription":"D"}"#;
    let section: Section = serde_json::from_str(json).expect("deserialize section");
    assert!(section.chapters.is_empty());
}

#[test]
fn blank_section_id_is_rejected_on_load() {
    let json = r#"{"sectionId":"  ","sectionTitle":"T","sectionDescription":"D"}"#;
    assert!(serde_json::from_str::<Section>(json).is_err());
}
