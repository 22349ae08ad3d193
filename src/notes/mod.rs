//! Notes manager: the list view, per-note cards and the upload form.

mod card;
mod upload;
mod view;

pub use card::{ActionMenu, CardAction, MenuItem, NoteCard, StatusPresentation};
pub use upload::{title_from_file_name, UploadForm, UploadMode, UNTITLED_NOTE};
pub use view::{
    fetch_all, Confirm, DeleteOutcome, EmptyState, LoadOutcome, LoadTicket, NoteFilter, NotesView,
    DELETE_PROMPT,
};
