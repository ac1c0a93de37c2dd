use thiserror::Error;

#[derive(Error, Debug)]
pub enum CovbadgeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input report not found or unreadable: {0}")]
    InputNotFound(String),

    #[error("Malformed input at line {row}: {reason}")]
    MalformedInput { row: usize, reason: String },

    #[error("Undefined ratio for '{0}': total count is zero")]
    UndefinedRatio(&'static str),

    #[error("Failed to write {path}: {source}")]
    OutputWrite {
        path: String,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CovbadgeError>;
