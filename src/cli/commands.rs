use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "tempolearn")]
#[command(version, about = "Upload lecture notes and study the generated summaries and flashcards")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a YAML config file (default: ~/.config/tempolearn/config.yaml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse the built-in demo notes (no account needed)
    Demo(DemoCommand),

    /// List, upload and delete your notes
    Notes(NotesCommand),

    /// List your courses
    Courses(CoursesCommand),
}

#[derive(Args, Debug)]
pub struct DemoCommand {
    #[command(subcommand)]
    pub action: DemoAction,
}

#[derive(Subcommand, Debug)]
pub enum DemoAction {
    /// List the demo notes
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one demo note
    Show {
        /// Demo note ID (e.g. "demo-2")
        id: String,

        /// Only show one section (summary, flashcards, questions)
        #[arg(long)]
        tab: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List every demo flashcard
    Flashcards {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Step through a demo note's flashcards (n = next, p = previous,
    /// a = show/hide answer, q = quit)
    Study {
        /// Demo note ID
        id: String,
    },
}

#[derive(Args, Debug)]
pub struct NotesCommand {
    #[command(subcommand)]
    pub action: NotesAction,
}

#[derive(Subcommand, Debug)]
pub enum NotesAction {
    /// List notes, optionally filtered
    List {
        /// Only notes in this course ID
        #[arg(long)]
        course: Option<String>,

        /// Case-insensitive title search
        #[arg(long, short = 'q')]
        query: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a note
    Delete {
        /// Note ID
        id: String,

        /// Skip confirmation prompt
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Upload a document (PDF, text or Markdown)
    Upload {
        /// File to upload
        path: PathBuf,

        /// Note title (defaults to the file name without extension)
        #[arg(long)]
        title: Option<String>,

        /// Course ID to file the note under
        #[arg(long)]
        course: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a note from pasted text
    Create {
        /// Note title (default "Untitled Note")
        #[arg(long)]
        title: Option<String>,

        /// Course ID to file the note under
        #[arg(long)]
        course: Option<String>,

        /// Note content
        #[arg(long, conflicts_with = "stdin")]
        content: Option<String>,

        /// Read content from stdin
        #[arg(long)]
        stdin: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
pub struct CoursesCommand {
    #[command(subcommand)]
    pub action: CoursesAction,
}

#[derive(Subcommand, Debug)]
pub enum CoursesAction {
    /// List courses
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
