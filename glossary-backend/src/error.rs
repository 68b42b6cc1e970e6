use thiserror::Error;

#[derive(Debug, Error)]
pub enum GlossaryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Document already exists: {0}")]
    DocumentExists(String),

    #[error("Failed to parse settings: {0}")]
    SettingsParse(#[from] ron::error::SpannedError),

    #[error("Failed to serialize settings: {0}")]
    SettingsSerialize(#[from] ron::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GlossaryError>;
