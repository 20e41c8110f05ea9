use thiserror::Error;

use tn_core::CoreError;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    City(#[from] CoreError),
}

pub type DataResult<T> = Result<T, DataError>;
