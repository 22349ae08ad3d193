use thiserror::Error;

#[derive(Error, Debug)]
pub enum TempoError {
    #[error("Please add your Anthropic API key first")]
    MissingApiKey,

    #[error("Not signed in. Set TEMPOLEARN_TOKEN or add session_token to the config file.")]
    MissingSessionToken,

    #[error("Choose a file to upload")]
    MissingFile,

    #[error("Paste some note content first")]
    EmptyContent,

    #[error("An upload is already in progress")]
    UploadInFlight,

    #[error("Use --force to delete in non-interactive mode")]
    NonInteractive,

    #[error("Note not found: {0}")]
    NoteNotFound(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("{message}")]
    Backend { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, TempoError>;
