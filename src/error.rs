//! Error types for the cube console

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CubeError {
    #[error("Invalid card record: {0}")]
    InvalidCardRecord(String),

    #[error("Invalid deck file: {0}")]
    InvalidDeckFile(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CubeError>;
