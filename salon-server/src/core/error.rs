use thiserror::Error;

use crate::db::StorageError;

/// Errors raised while bootstrapping or running the server
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<shared::AppError> for ServerError {
    fn from(err: shared::AppError) -> Self {
        Self::Internal(anyhow::anyhow!(err.message))
    }
}

pub type Result<T> = std::result::Result<T, ServerError>;
