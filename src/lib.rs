pub mod api;
pub mod cli;
pub mod config;
pub mod demo;
pub mod entity;
pub mod error;
pub mod logging;
pub mod notes;
pub mod session;

pub use api::{HttpBackend, NotesBackend};
pub use config::ClientConfig;
pub use error::{Result, TempoError};
pub use notes::NotesView;
pub use session::SessionContext;
