use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskdueError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("unexpected end of input")]
    Eof,

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, TaskdueError>;
