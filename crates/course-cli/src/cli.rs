//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "course-cli",
    version,
    about = "Edit course sections and chapters",
    long_about = "Edit the sections and chapters of a course document.\n\n\
                  Each edit is validated the same way the course editor's forms\n\
                  validate it; invalid input is reported per field and nothing\n\
                  is written."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Editor settings file (default: the platform config directory).
    #[arg(long = "settings", value_name = "PATH", global = true)]
    pub settings: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the sections and chapters of a course.
    Show {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Create an empty course document.
    Init {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[arg(long = "course-id")]
        course_id: String,

        #[arg(long)]
        title: String,
    },

    /// Append a section.
    AddSection(AddSectionArgs),

    /// Change a section's title or description.
    EditSection(EditSectionArgs),

    /// Remove a section and all of its chapters.
    DeleteSection {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Zero-based section index.
        #[arg(value_name = "INDEX")]
        index: usize,
    },

    /// Append a chapter to a section.
    AddChapter(AddChapterArgs),

    /// Change a chapter.
    EditChapter(EditChapterArgs),

    /// Remove a chapter.
    DeleteChapter {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[arg(value_name = "SECTION")]
        section: usize,

        #[arg(value_name = "CHAPTER")]
        chapter: usize,
    },
}

#[derive(Args)]
pub struct AddSectionArgs {
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Args)]
pub struct EditSectionArgs {
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Zero-based section index.
    #[arg(value_name = "INDEX")]
    pub index: usize,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Args)]
pub struct AddChapterArgs {
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Zero-based index of the section receiving the chapter.
    #[arg(value_name = "SECTION")]
    pub section: usize,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub content: Option<String>,

    /// Video reference; makes this a video chapter.
    #[arg(long)]
    pub video: Option<String>,
}

#[derive(Args)]
pub struct EditChapterArgs {
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[arg(value_name = "SECTION")]
    pub section: usize,

    #[arg(value_name = "CHAPTER")]
    pub chapter: usize,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub content: Option<String>,

    #[arg(long, conflicts_with = "no_video")]
    pub video: Option<String>,

    /// Remove the video reference.
    #[arg(long = "no-video")]
    pub no_video: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
