use thiserror::Error;

#[derive(Error, Debug)]
pub enum MoodLensError {
    #[error("No user messages to analyze")]
    EmptyConversation,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Report not found: {0}")]
    ReportNotFound(String),

    #[error("Remote report service error: {0}")]
    Remote(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParsing(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MoodLensError>;
