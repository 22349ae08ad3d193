//! Built-in demo content.
//!
//! Three fully processed notes that ship with the client so the demo
//! walkthrough works without a backend or any credentials. The data is
//! `'static` and never mutated.

mod fixtures;
mod walkthrough;

pub use fixtures::DEMO_NOTES;
pub use walkthrough::{DemoSession, DemoTab};

use serde::Serialize;

use crate::entity::{Difficulty, EventType, NoteStatus, QuestionType};

/// Number of summary characters kept in list previews.
pub const PREVIEW_CHARS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Flashcard {
    pub id: &'static str,
    pub front: &'static str,
    pub back: &'static str,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StudyQuestion {
    pub id: &'static str,
    pub question: &'static str,
    pub suggested_answer: &'static str,
    pub question_type: QuestionType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarEvent {
    pub id: &'static str,
    pub title: &'static str,
    pub event_type: EventType,
    pub event_date: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DemoNote {
    pub id: &'static str,
    pub title: &'static str,
    pub course_name: &'static str,
    pub status: NoteStatus,
    pub uploaded_at: &'static str,
    pub summary: &'static str,
    pub key_concepts: &'static [&'static str],
    pub knowledge_gaps: &'static [&'static str],
    pub flashcards: &'static [Flashcard],
    pub study_questions: &'static [StudyQuestion],
    pub events: &'static [CalendarEvent],
}

/// List-view projection of a [`DemoNote`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoNoteSummary {
    pub id: &'static str,
    pub title: &'static str,
    pub course_name: &'static str,
    pub status: NoteStatus,
    pub uploaded_at: &'static str,
    pub summary_preview: String,
    pub flashcards_count: usize,
    pub questions_count: usize,
    pub events_count: usize,
}

/// A flashcard tagged with the note it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DemoFlashcard {
    #[serde(flatten)]
    pub card: &'static Flashcard,
    pub note_id: &'static str,
    pub note_title: &'static str,
}

/// First [`PREVIEW_CHARS`] characters followed by `...`.
pub fn summary_preview(summary: &str) -> String {
    let mut preview: String = summary.chars().take(PREVIEW_CHARS).collect();
    preview.push_str("...");
    preview
}

impl DemoNote {
    pub fn to_summary(&self) -> DemoNoteSummary {
        DemoNoteSummary {
            id: self.id,
            title: self.title,
            course_name: self.course_name,
            status: self.status,
            uploaded_at: self.uploaded_at,
            summary_preview: summary_preview(self.summary),
            flashcards_count: self.flashcards.len(),
            questions_count: self.study_questions.len(),
            events_count: self.events.len(),
        }
    }
}

/// Every demo note reduced to list fields, in fixture order.
pub fn demo_notes() -> Vec<DemoNoteSummary> {
    DEMO_NOTES.iter().map(DemoNote::to_summary).collect()
}

/// Full demo note by id. `None` for an unknown id.
pub fn demo_note(id: &str) -> Option<&'static DemoNote> {
    DEMO_NOTES.iter().find(|n| n.id == id)
}

/// All flashcards of all demo notes, note by note.
pub fn demo_flashcards() -> Vec<DemoFlashcard> {
    DEMO_NOTES
        .iter()
        .flat_map(|note| {
            note.flashcards.iter().map(move |card| DemoFlashcard {
                card,
                note_id: note.id,
                note_title: note.title,
            })
        })
        .collect()
}
