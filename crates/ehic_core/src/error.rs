use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FaqError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FaqError>;
