use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// Page sizes must be strictly positive.
    #[error("Invalid page size: {0} (must be greater than zero)")]
    InvalidPageSize(i64),
}
