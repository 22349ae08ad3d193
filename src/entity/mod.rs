mod course;
mod note;
mod study;

pub use course::Course;
pub use note::{Note, NoteStatus};
pub use study::{Difficulty, EventType, QuestionType};
