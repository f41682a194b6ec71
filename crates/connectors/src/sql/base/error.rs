use thiserror::Error;

/// All errors coming from the database/query layer.
#[derive(Debug, Error)]
pub enum DbError {
    /// Any MySQL driver error, including failures to acquire a connection.
    #[error("MySQL error: {0}")]
    MySql(#[from] mysql_async::Error),

    /// A table or column name that cannot be safely quoted.
    #[error("Invalid identifier: '{0}'")]
    InvalidIdentifier(String),

    /// An error occurred while building a SQL query.
    #[error("Query build error: {0}")]
    QueryBuildError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

/// Errors resolving connection settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid port '{value}' in {var}: {reason}")]
    InvalidPort {
        var: String,
        value: String,
        reason: String,
    },

    #[error("Invalid environment: {0}")]
    Env(String),
}
