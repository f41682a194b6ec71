use connectors::{
    error::AdapterError,
    sql::base::error::{ConfigError, DbError},
};
use model::error::ModelError;
use streaming::error::StreamError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid environment file: {0}")]
    EnvFile(String),

    #[error("Invalid connection settings: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    InvalidInput(#[from] ModelError),

    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("Seeding failed: {0}")]
    Seed(#[from] AdapterError),

    #[error("Stream failed: {0}")]
    Stream(#[from] StreamError),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}
