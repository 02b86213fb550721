// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HelperError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Hashing failed: {0}")]
    Hash(bcrypt::BcryptError),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),
}

impl From<bcrypt::BcryptError> for HelperError {
    fn from(err: bcrypt::BcryptError) -> Self {
        HelperError::Hash(err)
    }
}

pub type Result<T> = std::result::Result<T, HelperError>;
