#![allow(dead_code)]

use connectors::sql::mysql::{adapter::MySqlAdapter, config::MySqlConfig};
use model::core::value::Value;
use std::collections::HashMap;


/// Scratch table each test recreates before use.
const TEST_TABLE: &str = "user_data_stream_test";

/// Connection settings from the process environment, defaulting to a local
/// server with the stock `ALX_prodev` database.
fn test_config() -> MySqlConfig {
    let vars: HashMap<String, String> = std::env::vars().collect();
    MySqlConfig::from_env(&vars).expect("valid MYSQL_* settings")
}

async fn server_adapter() -> MySqlAdapter {
    let config = test_config();
    let server = MySqlAdapter::new(config.server_opts());
    connectors::seed::create_database(&server, &config.database)
        .await
        .expect("create database");
    server.disconnect().await.expect("disconnect");
    MySqlAdapter::new(config.database_opts())
}

/// Drop & recreate the scratch table with `n` users aged 20, 21, ...
async fn reset_table(adapter: &MySqlAdapter, n: usize) {
    adapter
        .exec(&format!("DROP TABLE IF EXISTS {TEST_TABLE}"))
        .await
        .expect("drop table");
    adapter
        .exec(&format!(
            "CREATE TABLE {TEST_TABLE} (
                seq INT NOT NULL PRIMARY KEY,
                name VARCHAR(255) NOT NULL,
                age DECIMAL(5,0) NULL
            )"
        ))
        .await
        .expect("create table");

    let insert = format!("INSERT INTO {TEST_TABLE} (seq, name, age) VALUES (?, ?, ?)");
    let batch: Vec<_> = (0..n as i64)
        .map(|i| {
            vec![
                Value::Int(i),
                Value::String(format!("user-{i}")),
                Value::Int(20 + i),
            ]
        })
        .collect();
    adapter
        .exec_batch_tx(&insert, &batch)
        .await
        .expect("insert rows");
}
