// src/notes/upload.rs
use tracing::{info, warn};

use crate::api::{is_accepted_file_type, NewTextNote, NotesBackend, UploadFile};
use crate::entity::Note;
use crate::error::{Result, TempoError};
use crate::session::SessionContext;

/// Title sent for pasted text when the user left the title blank.
pub const UNTITLED_NOTE: &str = "Untitled Note";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UploadMode {
    #[default]
    File,
    Text,
}

/// Strip a trailing extension (`.` followed by characters that are neither
/// `.` nor `/`). Names without one are returned unchanged.
pub fn title_from_file_name(name: &str) -> String {
    match name.rfind('.') {
        Some(dot) => {
            let ext = &name[dot + 1..];
            if ext.is_empty() || ext.contains('/') {
                name.to_string()
            } else {
                name[..dot].to_string()
            }
        }
        None => name.to_string(),
    }
}

fn non_blank(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// State of the "new note" form: either a document or pasted text.
#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    mode: UploadMode,
    file: Option<UploadFile>,
    title: String,
    content: String,
    course_id: String,
    in_flight: bool,
    error: Option<String>,
}

impl UploadForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> UploadMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: UploadMode) {
        self.mode = mode;
    }

    pub fn file(&self) -> Option<&UploadFile> {
        self.file.as_ref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn course_id(&self) -> Option<&str> {
        non_blank(&self.course_id)
    }

    pub fn set_course(&mut self, course_id: Option<String>) {
        self.course_id = course_id.unwrap_or_default();
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Take the first of the offered files (drop or picker). Fills the title
    /// from the file name when the title is still empty. Returns whether a
    /// file was taken.
    pub fn choose_files<I>(&mut self, files: I) -> bool
    where
        I: IntoIterator<Item = UploadFile>,
    {
        let Some(file) = files.into_iter().next() else {
            return false;
        };
        if !is_accepted_file_type(&file.name) {
            warn!(file = %file.name, "file type is not pdf, txt or md; the backend may reject it");
        }
        if self.title.is_empty() {
            self.title = title_from_file_name(&file.name);
        }
        self.file = Some(file);
        true
    }

    /// Empty the file slot. The title is left as it is.
    pub fn clear_file(&mut self) {
        self.file = None;
    }

    pub fn has_required_input(&self) -> bool {
        match self.mode {
            UploadMode::File => self.file.is_some(),
            UploadMode::Text => !self.content.trim().is_empty(),
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.in_flight && self.has_required_input()
    }

    fn reject(&mut self, err: TempoError) -> TempoError {
        self.error = Some(err.to_string());
        err
    }

    /// Validate and send the form. Exactly one backend call is made, chosen
    /// by the mode. Errors are also kept on the form for display, and
    /// nothing else about the form changes so the user can retry.
    pub async fn submit<B: NotesBackend>(
        &mut self,
        backend: &B,
        ctx: &SessionContext,
    ) -> Result<Note> {
        if self.in_flight {
            return Err(TempoError::UploadInFlight);
        }
        let api_key = match ctx.require_api_key() {
            Ok(key) => key,
            Err(e) => return Err(self.reject(e)),
        };
        if !self.has_required_input() {
            let err = match self.mode {
                UploadMode::File => TempoError::MissingFile,
                UploadMode::Text => TempoError::EmptyContent,
            };
            return Err(self.reject(err));
        }

        self.in_flight = true;
        self.error = None;

        let result = match (self.mode, &self.file) {
            (UploadMode::File, Some(file)) => {
                backend
                    .upload_note(
                        ctx,
                        api_key,
                        file,
                        non_blank(&self.title),
                        non_blank(&self.course_id),
                    )
                    .await
            }
            (UploadMode::File, None) => Err(TempoError::MissingFile),
            (UploadMode::Text, _) => {
                let note = NewTextNote {
                    title: non_blank(&self.title).unwrap_or(UNTITLED_NOTE).to_string(),
                    content: self.content.clone(),
                    course_id: non_blank(&self.course_id).map(str::to_string),
                };
                backend.create_note_from_text(ctx, api_key, &note).await
            }
        };

        self.in_flight = false;
        match result {
            Ok(note) => {
                info!(note_id = %note.id, title = %note.title, "note submitted");
                Ok(note)
            }
            Err(e) => {
                warn!(error = %e, "note submission failed");
                Err(self.reject(e))
            }
        }
    }
}
