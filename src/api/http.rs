// src/api/http.rs
use reqwest::{multipart, Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{NewTextNote, NotesBackend, UploadFile};
use crate::config::ClientConfig;
use crate::entity::{Course, Note};
use crate::error::{Result, TempoError};
use crate::session::SessionContext;

/// Header carrying the user's external generation key on upload/create.
pub const API_KEY_HEADER: &str = "X-Anthropic-Key";

/// [`NotesBackend`] over the service's JSON HTTP API.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `{base}/notes/{id}` with the id percent-encoded as a single path
    /// segment, so `?`, `#` and `/` in an id stay part of the id.
    fn note_url(&self, note_id: &str) -> Result<Url> {
        let mut url =
            Url::parse(&self.url("notes")).map_err(|e| TempoError::Config(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| TempoError::Config(format!("cannot build note URL from {}", self.base_url)))?
            .push(note_id);
        Ok(url)
    }
}

impl NotesBackend for HttpBackend {
    async fn get_notes(&self, ctx: &SessionContext) -> Result<Vec<Note>> {
        debug!("GET notes");
        let response = self
            .client
            .get(self.url("notes"))
            .bearer_auth(ctx.token())
            .send()
            .await?;
        read_json(response).await
    }

    async fn get_courses(&self, ctx: &SessionContext) -> Result<Vec<Course>> {
        debug!("GET courses");
        let response = self
            .client
            .get(self.url("courses"))
            .bearer_auth(ctx.token())
            .send()
            .await?;
        read_json(response).await
    }

    async fn delete_note(&self, ctx: &SessionContext, note_id: &str) -> Result<()> {
        debug!(note_id, "DELETE note");
        let response = self
            .client
            .delete(self.note_url(note_id)?)
            .bearer_auth(ctx.token())
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    async fn upload_note(
        &self,
        ctx: &SessionContext,
        api_key: &str,
        file: &UploadFile,
        title: Option<&str>,
        course_id: Option<&str>,
    ) -> Result<Note> {
        debug!(file = %file.name, size = file.bytes.len(), "POST note upload");
        let part = multipart::Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(file.mime_type())?;
        let mut form = multipart::Form::new().part("file", part);
        if let Some(title) = title {
            form = form.text("title", title.to_string());
        }
        if let Some(course_id) = course_id {
            form = form.text("course_id", course_id.to_string());
        }

        let response = self
            .client
            .post(self.url("notes/upload"))
            .bearer_auth(ctx.token())
            .header(API_KEY_HEADER, api_key)
            .multipart(form)
            .send()
            .await?;
        read_json(response).await
    }

    async fn create_note_from_text(
        &self,
        ctx: &SessionContext,
        api_key: &str,
        note: &NewTextNote,
    ) -> Result<Note> {
        debug!(title = %note.title, len = note.content.len(), "POST note from text");
        let response = self
            .client
            .post(self.url("notes/text"))
            .bearer_auth(ctx.token())
            .header(API_KEY_HEADER, api_key)
            .json(note)
            .send()
            .await?;
        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let response = check_status(response).await?;
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(TempoError::Backend {
        status: status.as_u16(),
        message: error_message(status, &body),
    })
}

/// Pick the most useful message out of an error response: the JSON `detail`
/// field, then the raw body, then the status reason.
pub(crate) fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(detail) = value.get("detail").and_then(|d| d.as_str()) {
            return detail.to_string();
        }
    }
    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_detail() {
        let msg = error_message(StatusCode::BAD_REQUEST, r#"{"detail": "Invalid API key"}"#);
        assert_eq!(msg, "Invalid API key");
    }

    #[test]
    fn test_error_message_falls_back_to_body_then_reason() {
        assert_eq!(
            error_message(StatusCode::BAD_GATEWAY, "  upstream down \n"),
            "upstream down"
        );
        assert_eq!(error_message(StatusCode::NOT_FOUND, ""), "Not Found");
        // JSON without a string detail is shown verbatim
        assert_eq!(
            error_message(StatusCode::UNPROCESSABLE_ENTITY, r#"{"detail": []}"#),
            r#"{"detail": []}"#
        );
    }

    #[test]
    fn test_url_joining_ignores_trailing_slash() {
        let config = ClientConfig {
            api_base_url: "http://localhost:9000/api/".to_string(),
            ..ClientConfig::default()
        };
        let backend = HttpBackend::new(&config).unwrap();
        assert_eq!(backend.base_url(), "http://localhost:9000/api");
        assert_eq!(backend.url("notes/abc"), "http://localhost:9000/api/notes/abc");
    }

    #[test]
    fn test_note_url_keeps_reserved_characters_in_segment() {
        let backend = HttpBackend::new(&ClientConfig {
            api_base_url: "http://localhost:9000/api".to_string(),
            ..ClientConfig::default()
        })
        .unwrap();

        let url = backend.note_url("a?b").unwrap();
        assert_eq!(url.path(), "/api/notes/a%3Fb");
        assert_eq!(url.query(), None);

        let url = backend.note_url("n#1").unwrap();
        assert_eq!(url.path(), "/api/notes/n%231");
        assert_eq!(url.fragment(), None);

        let url = backend.note_url("x/../../courses").unwrap();
        assert_eq!(url.path(), "/api/notes/x%2F..%2F..%2Fcourses");

        let url = backend.note_url("n1").unwrap();
        assert_eq!(url.as_str(), "http://localhost:9000/api/notes/n1");
    }
}
