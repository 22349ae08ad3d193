// In-memory backend for unit tests.
use std::sync::Mutex;

use chrono::Utc;

use super::{NewTextNote, NotesBackend, UploadFile};
use crate::entity::{Course, Note, NoteStatus};
use crate::error::{Result, TempoError};
use crate::session::SessionContext;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    GetNotes,
    GetCourses,
    Delete(String),
    Upload {
        api_key: String,
        file_name: String,
        title: Option<String>,
        course_id: Option<String>,
    },
    CreateFromText {
        api_key: String,
        note: NewTextNote,
    },
}

#[derive(Default)]
pub(crate) struct FakeBackend {
    pub notes: Mutex<Vec<Note>>,
    pub courses: Vec<Course>,
    pub calls: Mutex<Vec<Call>>,
    pub fail_reads: bool,
    pub fail_writes: Option<String>,
}

impl FakeBackend {
    pub fn with_data(notes: Vec<Note>, courses: Vec<Course>) -> Self {
        Self {
            notes: Mutex::new(notes),
            courses,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn write_result(&self) -> Result<()> {
        match &self.fail_writes {
            Some(message) => Err(TempoError::Backend {
                status: 500,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }

    fn created(&self, title: &str, course_id: Option<String>) -> Note {
        let mut notes = self.notes.lock().unwrap();
        let note = Note {
            id: format!("n{}", notes.len() + 1),
            title: title.to_string(),
            course_id,
            status: NoteStatus::Pending,
            uploaded_at: Utc::now(),
        };
        notes.push(note.clone());
        note
    }
}

impl NotesBackend for FakeBackend {
    async fn get_notes(&self, _ctx: &SessionContext) -> Result<Vec<Note>> {
        self.record(Call::GetNotes);
        if self.fail_reads {
            return Err(TempoError::Backend {
                status: 503,
                message: "unavailable".to_string(),
            });
        }
        Ok(self.notes.lock().unwrap().clone())
    }

    async fn get_courses(&self, _ctx: &SessionContext) -> Result<Vec<Course>> {
        self.record(Call::GetCourses);
        Ok(self.courses.clone())
    }

    async fn delete_note(&self, _ctx: &SessionContext, note_id: &str) -> Result<()> {
        self.record(Call::Delete(note_id.to_string()));
        self.write_result()?;
        self.notes.lock().unwrap().retain(|n| n.id != note_id);
        Ok(())
    }

    async fn upload_note(
        &self,
        _ctx: &SessionContext,
        api_key: &str,
        file: &UploadFile,
        title: Option<&str>,
        course_id: Option<&str>,
    ) -> Result<Note> {
        self.record(Call::Upload {
            api_key: api_key.to_string(),
            file_name: file.name.clone(),
            title: title.map(str::to_string),
            course_id: course_id.map(str::to_string),
        });
        self.write_result()?;
        Ok(self.created(title.unwrap_or(&file.name), course_id.map(str::to_string)))
    }

    async fn create_note_from_text(
        &self,
        _ctx: &SessionContext,
        api_key: &str,
        note: &NewTextNote,
    ) -> Result<Note> {
        self.record(Call::CreateFromText {
            api_key: api_key.to_string(),
            note: note.clone(),
        });
        self.write_result()?;
        Ok(self.created(&note.title, note.course_id.clone()))
    }
}
