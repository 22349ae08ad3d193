// src/notes/view.rs
use tracing::{debug, warn};

use super::upload::UploadForm;
use crate::api::NotesBackend;
use crate::entity::{Course, Note};
use crate::error::{Result, TempoError};
use crate::session::SessionContext;

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this note?";

/// Asks the user before a destructive action.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Client-side filter over the loaded notes. An empty course or query
/// means "no restriction"; both restrictions must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteFilter {
    pub course_id: Option<String>,
    pub query: String,
}

impl NoteFilter {
    pub fn new(course_id: Option<String>, query: impl Into<String>) -> Self {
        Self {
            course_id: course_id.filter(|c| !c.is_empty()),
            query: query.into(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.course().is_some() || !self.query.is_empty()
    }

    fn course(&self) -> Option<&str> {
        self.course_id.as_deref().filter(|c| !c.is_empty())
    }

    pub fn matches(&self, note: &Note) -> bool {
        if let Some(course) = self.course() {
            if note.course_id.as_deref() != Some(course) {
                return false;
            }
        }
        if !self.query.is_empty()
            && !note
                .title
                .to_lowercase()
                .contains(&self.query.to_lowercase())
        {
            return false;
        }
        true
    }
}

/// What to show when the filtered list is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// The user has no notes at all.
    NoNotes,
    /// Notes exist but none pass the active filters.
    NoMatches,
}

impl EmptyState {
    pub fn offers_upload(&self) -> bool {
        matches!(self, EmptyState::NoNotes)
    }

    pub fn message(&self) -> &'static str {
        match self {
            EmptyState::NoNotes => "Upload your first note to get started",
            EmptyState::NoMatches => "Try adjusting your filters",
        }
    }
}

/// Tag for an in-flight load. Results carrying an old generation are
/// dropped so a superseded fetch cannot overwrite newer data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

#[derive(Debug)]
pub enum LoadOutcome {
    Loaded,
    Stale,
    Failed(TempoError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Cancelled,
    NotFound,
}

/// Fetch notes and courses concurrently; both must succeed.
pub async fn fetch_all<B: NotesBackend>(
    backend: &B,
    ctx: &SessionContext,
) -> Result<(Vec<Note>, Vec<Course>)> {
    tokio::try_join!(backend.get_notes(ctx), backend.get_courses(ctx))
}

/// Local, best-effort copy of the user's notes and courses. The backend is
/// the source of truth; this is refreshed by full reloads only.
#[derive(Debug)]
pub struct NotesView {
    notes: Vec<Note>,
    courses: Vec<Course>,
    loading: bool,
    generation: u64,
    filter: NoteFilter,
    upload: Option<UploadForm>,
}

impl Default for NotesView {
    fn default() -> Self {
        Self::new()
    }
}

impl NotesView {
    pub fn new() -> Self {
        Self {
            notes: Vec::new(),
            courses: Vec::new(),
            loading: true,
            generation: 0,
            filter: NoteFilter::default(),
            upload: None,
        }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn filter(&self) -> &NoteFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: NoteFilter) {
        self.filter = filter;
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.loading = true;
        LoadTicket {
            generation: self.generation,
        }
    }

    /// Forget any in-flight load, e.g. when the view goes away.
    pub fn cancel_pending(&mut self) {
        self.generation += 1;
        self.loading = false;
    }

    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<(Vec<Note>, Vec<Course>)>,
    ) -> LoadOutcome {
        if ticket.generation != self.generation {
            debug!(
                ticket = ticket.generation,
                current = self.generation,
                "discarding stale load"
            );
            return LoadOutcome::Stale;
        }
        self.loading = false;
        match result {
            Ok((notes, courses)) => {
                debug!(notes = notes.len(), courses = courses.len(), "loaded notes");
                self.notes = notes;
                self.courses = courses;
                LoadOutcome::Loaded
            }
            Err(e) => {
                warn!(error = %e, "failed to load notes");
                LoadOutcome::Failed(e)
            }
        }
    }

    pub async fn load<B: NotesBackend>(
        &mut self,
        backend: &B,
        ctx: &SessionContext,
    ) -> LoadOutcome {
        let ticket = self.begin_load();
        let result = fetch_all(backend, ctx).await;
        self.finish_load(ticket, result)
    }

    /// Notes passing the current filter, in backend order.
    pub fn filtered(&self) -> Vec<&Note> {
        self.notes.iter().filter(|n| self.filter.matches(n)).collect()
    }

    pub fn course_name(&self, note: &Note) -> Option<&str> {
        let course_id = note.course_id.as_deref()?;
        self.courses
            .iter()
            .find(|c| c.id == course_id)
            .map(|c| c.name.as_str())
    }

    /// `None` while loading or when the filtered list has entries.
    pub fn empty_state(&self) -> Option<EmptyState> {
        if self.loading || self.notes.iter().any(|n| self.filter.matches(n)) {
            return None;
        }
        if self.filter.is_active() {
            Some(EmptyState::NoMatches)
        } else {
            Some(EmptyState::NoNotes)
        }
    }

    /// Delete after confirmation. The note disappears locally right away;
    /// if the backend refuses, it is put back where it was.
    pub async fn delete<B, C>(
        &mut self,
        backend: &B,
        ctx: &SessionContext,
        note_id: &str,
        confirm: &mut C,
    ) -> Result<DeleteOutcome>
    where
        B: NotesBackend,
        C: Confirm + ?Sized,
    {
        let Some(index) = self.notes.iter().position(|n| n.id == note_id) else {
            return Ok(DeleteOutcome::NotFound);
        };
        if !confirm.confirm(DELETE_PROMPT) {
            return Ok(DeleteOutcome::Cancelled);
        }

        let removed = self.notes.remove(index);
        match backend.delete_note(ctx, note_id).await {
            Ok(()) => Ok(DeleteOutcome::Deleted),
            Err(e) => {
                warn!(note_id, error = %e, "failed to delete note, restoring");
                let at = index.min(self.notes.len());
                self.notes.insert(at, removed);
                Err(e)
            }
        }
    }

    pub fn open_upload(&mut self) -> &mut UploadForm {
        self.upload.get_or_insert_with(UploadForm::new)
    }

    pub fn upload_form(&self) -> Option<&UploadForm> {
        self.upload.as_ref()
    }

    pub fn close_upload(&mut self) {
        self.upload = None;
    }

    /// Submit the open upload form. On success the form closes and the list
    /// is reloaded; on failure the form stays open with its error set.
    pub async fn submit_upload<B: NotesBackend>(
        &mut self,
        backend: &B,
        ctx: &SessionContext,
    ) -> Result<Note> {
        let form = self.upload.get_or_insert_with(UploadForm::new);
        let note = form.submit(backend, ctx).await?;
        self.upload = None;
        if let LoadOutcome::Failed(e) = self.load(backend, ctx).await {
            debug!(error = %e, "reload after upload failed");
        }
        Ok(note)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{Call, FakeBackend};
    use crate::api::UploadFile;
    use crate::entity::NoteStatus;

    fn sample_notes() -> Vec<Note> {
        vec![
            Note::new("n1", "Intro to Machine Learning").with_course("cs229"),
            Note::new("n2", "Reaction Mechanisms").with_course("chem251"),
            Note::new("n3", "Monetary Policy").with_course("econ102"),
            Note::new("n4", "Loose thoughts on LEARNING"),
        ]
    }

    fn sample_courses() -> Vec<Course> {
        vec![
            Course::new("cs229", "CS 229 - Machine Learning"),
            Course::new("chem251", "CHEM 251 - Organic Chemistry"),
        ]
    }

    fn ctx() -> SessionContext {
        SessionContext::new("tok").with_api_key("sk-test")
    }

    async fn loaded_view(backend: &FakeBackend) -> NotesView {
        let mut view = NotesView::new();
        assert!(matches!(view.load(backend, &ctx()).await, LoadOutcome::Loaded));
        view
    }

    #[test]
    fn test_filter_combines_course_and_query() {
        let notes = sample_notes();
        let check = |filter: NoteFilter| -> Vec<&str> {
            notes
                .iter()
                .filter(|n| filter.matches(n))
                .map(|n| n.id.as_str())
                .collect()
        };

        assert_eq!(check(NoteFilter::default()), vec!["n1", "n2", "n3", "n4"]);
        assert_eq!(check(NoteFilter::new(None, "learn")), vec!["n1", "n4"]);
        assert_eq!(
            check(NoteFilter::new(Some("cs229".to_string()), "LEARN")),
            vec!["n1"]
        );
        assert_eq!(
            check(NoteFilter::new(Some("chem251".to_string()), "learn")),
            Vec::<&str>::new()
        );
        // An empty course id is the same as no course filter
        assert_eq!(check(NoteFilter::new(Some(String::new()), "")).len(), 4);
    }

    #[test]
    fn test_filter_matches_title_only() {
        let note = Note::new("n1", "Week 3").with_course("learning-101");
        assert!(!NoteFilter::new(None, "learning").matches(&note));
    }

    #[tokio::test]
    async fn test_load_fetches_both_collections() {
        let backend = FakeBackend::with_data(sample_notes(), sample_courses());
        let view = loaded_view(&backend).await;

        assert!(!view.is_loading());
        assert_eq!(view.notes().len(), 4);
        assert_eq!(view.courses().len(), 2);
        let calls = backend.calls();
        assert!(calls.contains(&Call::GetNotes));
        assert!(calls.contains(&Call::GetCourses));
    }

    #[tokio::test]
    async fn test_load_failure_clears_loading_and_keeps_data() {
        let mut backend = FakeBackend::with_data(sample_notes(), sample_courses());
        let mut view = loaded_view(&backend).await;

        backend.fail_reads = true;
        let outcome = view.load(&backend, &ctx()).await;
        assert!(matches!(outcome, LoadOutcome::Failed(_)));
        assert!(!view.is_loading());
        assert_eq!(view.notes().len(), 4);
    }

    #[test]
    fn test_stale_load_is_discarded() {
        let mut view = NotesView::new();
        let first = view.begin_load();
        let second = view.begin_load();

        let outcome = view.finish_load(first, Ok((sample_notes(), sample_courses())));
        assert!(matches!(outcome, LoadOutcome::Stale));
        assert!(view.notes().is_empty());
        assert!(view.is_loading());

        let outcome = view.finish_load(second, Ok((vec![Note::new("x", "Fresh")], vec![])));
        assert!(matches!(outcome, LoadOutcome::Loaded));
        assert_eq!(view.notes()[0].id, "x");
    }

    #[test]
    fn test_cancelled_load_is_ignored() {
        let mut view = NotesView::new();
        let ticket = view.begin_load();
        view.cancel_pending();
        let outcome = view.finish_load(ticket, Ok((sample_notes(), vec![])));
        assert!(matches!(outcome, LoadOutcome::Stale));
        assert!(view.notes().is_empty());
    }

    #[tokio::test]
    async fn test_course_name_lookup() {
        let backend = FakeBackend::with_data(sample_notes(), sample_courses());
        let view = loaded_view(&backend).await;

        assert_eq!(
            view.course_name(&view.notes()[0]),
            Some("CS 229 - Machine Learning")
        );
        // econ102 has no course record, n4 has no course at all
        assert_eq!(view.course_name(&view.notes()[2]), None);
        assert_eq!(view.course_name(&view.notes()[3]), None);
    }

    #[tokio::test]
    async fn test_empty_states() {
        let view = NotesView::new();
        assert_eq!(view.empty_state(), None);

        let backend = FakeBackend::with_data(vec![], vec![]);
        let view = loaded_view(&backend).await;
        assert_eq!(view.empty_state(), Some(EmptyState::NoNotes));
        assert!(EmptyState::NoNotes.offers_upload());

        let backend = FakeBackend::with_data(sample_notes(), sample_courses());
        let mut view = loaded_view(&backend).await;
        assert_eq!(view.empty_state(), None);
        view.set_filter(NoteFilter::new(None, "no such title"));
        assert_eq!(view.empty_state(), Some(EmptyState::NoMatches));
        assert!(!EmptyState::NoMatches.offers_upload());
    }

    #[tokio::test]
    async fn test_delete_removes_only_that_note() {
        let backend = FakeBackend::with_data(sample_notes(), sample_courses());
        let mut view = loaded_view(&backend).await;

        let mut prompts = Vec::new();
        let mut confirm = |p: &str| {
            prompts.push(p.to_string());
            true
        };
        let outcome = view.delete(&backend, &ctx(), "n2", &mut confirm).await.unwrap();

        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert_eq!(prompts, vec![DELETE_PROMPT.to_string()]);
        let ids: Vec<&str> = view.notes().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["n1", "n3", "n4"]);
        assert!(backend.calls().contains(&Call::Delete("n2".to_string())));
    }

    #[tokio::test]
    async fn test_delete_declined_makes_no_call() {
        let backend = FakeBackend::with_data(sample_notes(), sample_courses());
        let mut view = loaded_view(&backend).await;

        let outcome = view
            .delete(&backend, &ctx(), "n1", &mut |_: &str| false)
            .await
            .unwrap();
        assert_eq!(outcome, DeleteOutcome::Cancelled);
        assert_eq!(view.notes().len(), 4);
        assert!(!backend
            .calls()
            .iter()
            .any(|c| matches!(c, Call::Delete(_))));
    }

    #[tokio::test]
    async fn test_delete_unknown_id() {
        let backend = FakeBackend::with_data(sample_notes(), sample_courses());
        let mut view = loaded_view(&backend).await;
        let outcome = view
            .delete(&backend, &ctx(), "missing", &mut |_: &str| true)
            .await
            .unwrap();
        assert_eq!(outcome, DeleteOutcome::NotFound);
    }

    #[tokio::test]
    async fn test_failed_delete_restores_note_in_place() {
        let mut backend = FakeBackend::with_data(sample_notes(), sample_courses());
        backend.fail_writes = Some("boom".to_string());
        let mut view = loaded_view(&backend).await;

        let result = view.delete(&backend, &ctx(), "n3", &mut |_: &str| true).await;
        assert!(matches!(result, Err(TempoError::Backend { .. })));
        let ids: Vec<&str> = view.notes().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["n1", "n2", "n3", "n4"]);
    }

    #[tokio::test]
    async fn test_submit_upload_closes_form_and_reloads() {
        let backend = FakeBackend::with_data(sample_notes(), sample_courses());
        let mut view = loaded_view(&backend).await;

        view.open_upload()
            .choose_files(vec![UploadFile::new("Lecture 5.pdf", b"%PDF".to_vec())]);
        let note = view.submit_upload(&backend, &ctx()).await.unwrap();

        assert_eq!(note.title, "Lecture 5");
        assert_eq!(note.status, NoteStatus::Pending);
        assert!(view.upload_form().is_none());
        assert_eq!(view.notes().len(), 5);
    }

    #[tokio::test]
    async fn test_failed_upload_keeps_form_open() {
        let mut backend = FakeBackend::with_data(sample_notes(), sample_courses());
        backend.fail_writes = Some("Invalid API key".to_string());
        let mut view = loaded_view(&backend).await;

        view.open_upload()
            .choose_files(vec![UploadFile::new("a.md", b"# A".to_vec())]);
        assert!(view.submit_upload(&backend, &ctx()).await.is_err());

        let form = view.upload_form().unwrap();
        assert_eq!(form.error(), Some("Invalid API key"));
        assert_eq!(form.title(), "a");
        assert_eq!(view.notes().len(), 4);
    }
}
