//! Backend contract.
//!
//! The notes service owns all persistence and the summary/flashcard
//! generation pipeline. The client only needs the five calls on
//! [`NotesBackend`]; each is attempted exactly once per user action.

mod http;

#[cfg(test)]
pub(crate) mod fake;

pub use http::HttpBackend;

use std::future::Future;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::entity::{Course, Note};
use crate::error::Result;
use crate::session::SessionContext;

/// File extensions the upload picker offers. Only a hint: other files are
/// still submitted and the backend decides.
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["pdf", "txt", "md"];

pub fn is_accepted_file_type(file_name: &str) -> bool {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => ACCEPTED_EXTENSIONS
            .iter()
            .any(|accepted| accepted.eq_ignore_ascii_case(ext)),
        _ => false,
    }
}

/// A file chosen for upload, already read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self { name, bytes })
    }

    pub fn mime_type(&self) -> &'static str {
        let ext = self
            .name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase());
        match ext.as_deref() {
            Some("pdf") => "application/pdf",
            Some("txt") => "text/plain",
            Some("md") => "text/markdown",
            _ => "application/octet-stream",
        }
    }
}

/// Body of a create-from-text request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTextNote {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<String>,
}

pub trait NotesBackend {
    fn get_notes(&self, ctx: &SessionContext) -> impl Future<Output = Result<Vec<Note>>> + Send;

    fn get_courses(&self, ctx: &SessionContext)
        -> impl Future<Output = Result<Vec<Course>>> + Send;

    fn delete_note(
        &self,
        ctx: &SessionContext,
        note_id: &str,
    ) -> impl Future<Output = Result<()>> + Send;

    /// Upload a document. `title` and `course_id` are sent only when set.
    fn upload_note(
        &self,
        ctx: &SessionContext,
        api_key: &str,
        file: &UploadFile,
        title: Option<&str>,
        course_id: Option<&str>,
    ) -> impl Future<Output = Result<Note>> + Send;

    fn create_note_from_text(
        &self,
        ctx: &SessionContext,
        api_key: &str,
        note: &NewTextNote,
    ) -> impl Future<Output = Result<Note>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_file_types() {
        assert!(is_accepted_file_type("Lecture 5.pdf"));
        assert!(is_accepted_file_type("notes.MD"));
        assert!(is_accepted_file_type("a.b.txt"));
        assert!(!is_accepted_file_type("slides.pptx"));
        assert!(!is_accepted_file_type("notes"));
        assert!(!is_accepted_file_type(".md"));
    }

    #[test]
    fn test_mime_type_from_name() {
        assert_eq!(UploadFile::new("x.PDF", vec![]).mime_type(), "application/pdf");
        assert_eq!(UploadFile::new("x.md", vec![]).mime_type(), "text/markdown");
        assert_eq!(UploadFile::new("x", vec![]).mime_type(), "application/octet-stream");
    }

    #[test]
    fn test_text_note_omits_missing_course() {
        let note = NewTextNote {
            title: "Untitled Note".to_string(),
            content: "body".to_string(),
            course_id: None,
        };
        let json = serde_json::to_value(&note).unwrap();
        assert!(json.get("course_id").is_none());
        assert_eq!(json["title"], "Untitled Note");
    }
}
