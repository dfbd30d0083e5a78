use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use course_editor::{EntityKind, FieldErrors, Notification, NotificationKind};
use course_model::{Chapter, ChapterType, CourseRecord, Section};

pub fn print_course(record: &CourseRecord) {
    println!("Course: {} ({})", record.title, record.course_id);
    if record.sections.is_empty() {
        println!("No sections yet.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Title"),
        header_cell("Type"),
        header_cell("Details"),
        header_cell("ID"),
    ]);
    apply_course_table_style(&mut table);
    if let Some(column) = table.column_mut(0) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    for (section_index, section) in record.sections.iter().enumerate() {
        table.add_row(section_row(section_index, section));
        for (chapter_index, chapter) in section.chapters.iter().enumerate() {
            table.add_row(chapter_row(section_index, chapter_index, chapter));
        }
    }
    println!("{table}");
    println!(
        "{} section(s), {} chapter(s)",
        record.sections.len(),
        record.chapter_count()
    );
}

pub fn print_notifications(notifications: &[Notification]) {
    for notification in notifications {
        match notification.kind {
            NotificationKind::Error | NotificationKind::Warning => {
                eprintln!("{}", notification.message);
            }
            NotificationKind::Success | NotificationKind::Info => {
                println!("{}", notification.message);
            }
        }
    }
}

pub fn print_field_errors(entity: EntityKind, errors: &FieldErrors) {
    eprintln!("error: {} not saved", entity);
    for (field, message) in errors.iter() {
        eprintln!("  {field}: {message}");
    }
}

fn section_row(index: usize, section: &Section) -> Vec<Cell> {
    vec![
        Cell::new(index).add_attribute(Attribute::Bold),
        Cell::new(&section.section_title).add_attribute(Attribute::Bold),
        dim_cell(format!("{} chapter(s)", section.chapter_count())),
        Cell::new(&section.section_description),
        dim_cell(&section.section_id),
    ]
}

fn chapter_row(section_index: usize, chapter_index: usize, chapter: &Chapter) -> Vec<Cell> {
    let details = chapter
        .video
        .as_deref()
        .map_or_else(|| preview(&chapter.content), |video| format!("video: {video}"));
    vec![
        dim_cell(format!("{section_index}.{chapter_index}")),
        Cell::new(format!("  -> {}", chapter.title)),
        type_cell(chapter.chapter_type),
        Cell::new(details),
        dim_cell(&chapter.chapter_id),
    ]
}

fn type_cell(chapter_type: ChapterType) -> Cell {
    let color = match chapter_type {
        ChapterType::Text => Color::Reset,
        ChapterType::Quiz => Color::Yellow,
        ChapterType::Video => Color::Cyan,
    };
    Cell::new(chapter_type.label()).fg(color)
}

/// First line of the content, shortened for the table.
fn preview(content: &str) -> String {
    const MAX_CHARS: usize = 48;
    let line = content.lines().next().unwrap_or_default();
    if line.chars().count() > MAX_CHARS {
        let short: String = line.chars().take(MAX_CHARS).collect();
        format!("{short}…")
    } else {
        line.to_string()
    }
}

fn apply_course_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
