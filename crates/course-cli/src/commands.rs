use std::path::Path;

use anyhow::Result;
use course_cli::edit::{
    EditOutcome, EditRequest, VideoChange, apply_edit, init_course, load_course,
};
use course_editor::{EditorSettings, JsonCourseStore};

use crate::cli::{AddChapterArgs, AddSectionArgs, Command, EditChapterArgs, EditSectionArgs};
use crate::summary::{print_course, print_field_errors, print_notifications};

/// Run a command, returning the process exit code.
pub fn run(command: Command, settings: EditorSettings) -> Result<i32> {
    match command {
        Command::Show { file } => {
            let record = load_course(&JsonCourseStore::new(file))?;
            print_course(&record);
            Ok(0)
        }
        Command::Init {
            file,
            course_id,
            title,
        } => {
            let mut store = JsonCourseStore::new(file);
            let record = init_course(&mut store, &course_id, &title)?;
            println!(
                "Created course {} at {}",
                record.course_id,
                store.path().display()
            );
            Ok(0)
        }
        Command::AddSection(AddSectionArgs {
            file,
            title,
            description,
        }) => edit(
            &file,
            settings,
            EditRequest::AddSection {
                title: title.unwrap_or_default(),
                description: description.unwrap_or_default(),
            },
        ),
        Command::EditSection(EditSectionArgs {
            file,
            index,
            title,
            description,
        }) => edit(
            &file,
            settings,
            EditRequest::EditSection {
                index,
                title,
                description,
            },
        ),
        Command::DeleteSection { file, index } => {
            edit(&file, settings, EditRequest::DeleteSection { index })
        }
        Command::AddChapter(AddChapterArgs {
            file,
            section,
            title,
            content,
            video,
        }) => edit(
            &file,
            settings,
            EditRequest::AddChapter {
                section,
                title: title.unwrap_or_default(),
                content: content.unwrap_or_default(),
                video,
            },
        ),
        Command::EditChapter(EditChapterArgs {
            file,
            section,
            chapter,
            title,
            content,
            video,
            no_video,
        }) => {
            let video = match (video, no_video) {
                (Some(video), _) => VideoChange::Set(video),
                (None, true) => VideoChange::Clear,
                (None, false) => VideoChange::Keep,
            };
            edit(
                &file,
                settings,
                EditRequest::EditChapter {
                    section,
                    chapter,
                    title,
                    content,
                    video,
                },
            )
        }
        Command::DeleteChapter {
            file,
            section,
            chapter,
        } => edit(&file, settings, EditRequest::DeleteChapter { section, chapter }),
    }
}

fn edit(file: &Path, settings: EditorSettings, request: EditRequest) -> Result<i32> {
    let mut store = JsonCourseStore::new(file);
    match apply_edit(&mut store, settings, request)? {
        EditOutcome::Saved { notifications, .. } => {
            print_notifications(&notifications);
            Ok(0)
        }
        EditOutcome::Rejected { entity, errors } => {
            print_field_errors(entity, &errors);
            Ok(1)
        }
    }
}
