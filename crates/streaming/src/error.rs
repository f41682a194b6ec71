use connectors::sql::base::error::DbError;
use model::core::value::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StreamError {
    /// The page query at `offset` failed; the stream ends after this error.
    #[error("Failed to fetch page at offset {offset}: {source}")]
    Fetch {
        offset: usize,
        #[source]
        source: DbError,
    },

    #[error("Column '{0}' is not present in the fetched rows")]
    MissingColumn(String),

    #[error("Column '{column}' holds a non-numeric value: {value}")]
    NonNumeric { column: String, value: Value },
}
