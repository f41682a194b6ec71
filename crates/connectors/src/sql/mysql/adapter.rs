use crate::sql::{
    base::{
        error::DbError,
        query::generator::{QueryGenerator, quote_ident},
        requests::FetchRowsRequest,
    },
    mysql::{params::MySqlParamStore, row::to_row_data},
};
use model::{core::value::Value, records::row::RowData};
use mysql_async::{Conn, Opts, Pool, Row, TxOpts, prelude::*};
use tracing::{debug, info, trace};

/// Thin wrapper over a MySQL connection pool.
///
/// Every operation checks a connection out of the pool for its own duration
/// only. `Conn` goes back to the pool when dropped, so a failed or abandoned
/// call never keeps a connection.
#[derive(Clone)]
pub struct MySqlAdapter {
    pool: Pool,
}

impl MySqlAdapter {
    pub fn new(opts: Opts) -> Self {
        MySqlAdapter {
            pool: Pool::new(opts),
        }
    }

    async fn conn(&self) -> Result<Conn, DbError> {
        Ok(self.pool.get_conn().await?)
    }

    pub async fn exec(&self, query: &str) -> Result<(), DbError> {
        debug!("Executing: {}", query);
        let mut conn = self.conn().await?;
        conn.query_drop(query).await?;
        Ok(())
    }

    /// Runs `query` once per parameter set inside one transaction and returns
    /// the total number of affected rows.
    pub async fn exec_batch_tx(&self, query: &str, batch: &[Vec<Value>]) -> Result<u64, DbError> {
        let mut conn = self.conn().await?;
        let mut tx = conn.start_transaction(TxOpts::default()).await?;
        let mut affected = 0;

        for params in batch {
            tx.exec_drop(query, MySqlParamStore::from_values(params).params())
                .await?;
            affected += tx.affected_rows();
        }

        tx.commit().await?;
        debug!("Batch of {} statements affected {} rows", batch.len(), affected);
        Ok(affected)
    }

    /// Executes an arbitrary statement and collects every result row.
    pub async fn query_rows(
        &self,
        sql: &str,
        params: Vec<Value>,
    ) -> Result<Vec<RowData>, DbError> {
        debug!("Query: {} with {:?}", sql, params);
        let mut conn = self.conn().await?;
        let rows: Vec<Row> = conn
            .exec(sql, MySqlParamStore::from_values(&params).params())
            .await?;
        Ok(rows.iter().map(|row| to_row_data(row, "")).collect())
    }

    pub async fn fetch_rows(&self, request: &FetchRowsRequest) -> Result<Vec<RowData>, DbError> {
        let (sql, params) = QueryGenerator::select(request)?;
        debug!("Generated SQL: {}", sql);
        debug!("Parameters: {:?}", params);

        let mut conn = self.conn().await?;
        let rows: Vec<Row> = conn
            .exec(sql, MySqlParamStore::from_values(&params).params())
            .await?;
        drop(conn);

        trace!(
            "Fetched {} rows from {} at offset {}",
            rows.len(),
            request.table,
            request.offset
        );

        Ok(rows
            .iter()
            .map(|row| to_row_data(row, &request.table))
            .collect())
    }

    pub async fn count_rows(&self, table: &str) -> Result<i64, DbError> {
        let sql = format!("SELECT COUNT(*) AS `count` FROM {}", quote_ident(table)?);
        let rows = self.query_rows(&sql, Vec::new()).await?;
        rows.first()
            .and_then(|row| row.get_value("count").as_i64())
            .ok_or_else(|| DbError::Unknown(format!("COUNT(*) on {table} returned no rows")))
    }

    /// `SELECT 1` round trip.
    pub async fn ping(&self) -> Result<(), DbError> {
        let mut conn = self.conn().await?;
        let val: Option<i32> = conn.query_first("SELECT 1").await?;
        match val {
            Some(1) => Ok(()),
            other => Err(DbError::Unknown(format!(
                "Ping returned unexpected result: {other:?}"
            ))),
        }
    }

    /// Closes all pooled connections.
    pub async fn disconnect(self) -> Result<(), DbError> {
        self.pool.disconnect().await?;
        info!("MySQL pool disconnected");
        Ok(())
    }
}
