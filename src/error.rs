use crate::domain::Status;
use thiserror::Error;

/// Failure reading a slot of the key-value substrate at startup.
/// Never fatal: the slot falls back to its empty default.
#[derive(Debug, Error)]
#[error("failed to read '{key}' from storage: {reason}")]
pub struct PersistenceReadError {
    pub key: String,
    pub reason: String,
}

/// A backup file that could not be imported. State is left unchanged.
#[derive(Debug, Error)]
pub enum ImportParseError {
    #[error("could not read backup file: {0}")]
    Unreadable(#[from] std::io::Error),
    #[error("backup file is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("invalid backup file format: missing 'data' section")]
    MissingData,
}

/// Save refused at the editor boundary
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EntryRejected {
    #[error("{title} is in the future and can only be saved as pending (got {})", .status.to_tag())]
    FutureDay { title: String, status: Status },
    #[error("that cell does not exist in 2026")]
    InvalidScope,
}
