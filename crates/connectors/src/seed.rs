//! Loads the users CSV into the `user_data` table.

use crate::{
    error::AdapterError,
    sql::{
        base::{error::DbError, query::generator::quote_ident},
        mysql::{adapter::MySqlAdapter, config::MySqlConfig},
    },
};
use std::path::Path;
use tracing::info;

pub use crate::file::csv::reader::{UserRecord, read_users};

pub const USER_DATA_TABLE: &str = "user_data";

const CREATE_USER_DATA_SQL: &str = include_str!("sql/mysql/sql/user_data_table.sql");
const INSERT_USER_DATA_SQL: &str = include_str!("sql/mysql/sql/user_data_insert.sql");

pub async fn create_database(adapter: &MySqlAdapter, name: &str) -> Result<(), DbError> {
    let sql = format!("CREATE DATABASE IF NOT EXISTS {}", quote_ident(name)?);
    adapter.exec(&sql).await?;
    info!("Database {} is ready", name);
    Ok(())
}

pub async fn create_table(adapter: &MySqlAdapter) -> Result<(), DbError> {
    adapter.exec(CREATE_USER_DATA_SQL).await?;
    info!("Table {} created successfully", USER_DATA_TABLE);
    Ok(())
}

/// Inserts the records in one transaction, skipping ids that already exist.
/// Returns how many rows were actually inserted.
pub async fn insert_users(adapter: &MySqlAdapter, records: &[UserRecord]) -> Result<u64, DbError> {
    let batch: Vec<_> = records.iter().map(UserRecord::to_params).collect();
    let inserted = adapter
        .exec_batch_tx(INSERT_USER_DATA_SQL.trim(), &batch)
        .await?;
    info!(
        "Inserted {} rows ({} duplicates ignored)",
        inserted,
        records.len() as u64 - inserted.min(records.len() as u64)
    );
    Ok(inserted)
}

/// Creates the database and table if needed, then loads `csv_path`.
pub async fn run(config: &MySqlConfig, csv_path: &Path) -> Result<u64, AdapterError> {
    let records = read_users(csv_path)?;

    let server = MySqlAdapter::new(config.server_opts());
    create_database(&server, &config.database).await?;
    server.disconnect().await?;

    let db = MySqlAdapter::new(config.database_opts());
    create_table(&db).await?;
    let inserted = insert_users(&db, &records).await?;
    db.disconnect().await?;

    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statements() {
        assert!(CREATE_USER_DATA_SQL.contains("PRIMARY KEY (user_id)"));
        assert_eq!(INSERT_USER_DATA_SQL.trim().matches('?').count(), 4);
    }

    #[tokio::test]
    async fn test_run_fails_fast_on_missing_csv() {
        let err = run(&MySqlConfig::default(), Path::new("missing_users.csv"))
            .await
            .unwrap_err();
        assert!(matches!(err, AdapterError::File(_)));
    }
}
