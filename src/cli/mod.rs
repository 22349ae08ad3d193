mod commands;
mod handlers;

pub use commands::{
    Cli, Commands, CoursesAction, CoursesCommand, DemoAction, DemoCommand, NotesAction,
    NotesCommand,
};
pub use handlers::{
    handle_courses_list, handle_demo_flashcards, handle_demo_list, handle_demo_show,
    handle_demo_study, handle_notes_create, handle_notes_delete, handle_notes_list,
    handle_notes_upload,
};
