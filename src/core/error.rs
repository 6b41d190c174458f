use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BoardError {
    #[error("task title must not be empty")]
    EmptyTitle,

    #[error("progress must be between 0 and 100, got {0}")]
    ProgressOutOfRange(u8),

    #[error("invalid due date: {0}")]
    InvalidDueDate(String),

    #[error("unknown column: {0}")]
    UnknownColumn(String),

    #[error("unknown task: {0}")]
    UnknownTask(String),

    #[error("invalid board config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, BoardError>;
