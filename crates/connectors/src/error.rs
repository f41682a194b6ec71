use crate::{
    file::csv::error::FileError,
    sql::base::error::DbError,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdapterError {
    /// Database-related error.
    #[error("Database error: {0}")]
    Database(#[from] DbError),

    /// File-related error.
    #[error("File error: {0}")]
    File(#[from] FileError),
}
