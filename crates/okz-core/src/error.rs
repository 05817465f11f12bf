use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("No active challenge")]
    NoActiveChallenge,
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Expense not found: {0}")]
    ExpenseNotFound(Uuid),
    #[error("Challenge not found: {0}")]
    ChallengeNotFound(Uuid),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
