use crate::{
    source::PageFetcher,
    sql::{
        base::{
            error::DbError,
            query::generator::validate_ident,
            requests::{FetchRowsRequest, FetchRowsRequestBuilder},
        },
        mysql::adapter::MySqlAdapter,
    },
};
use async_trait::async_trait;
use model::pagination::page::{Page, PageSize};
use std::time::Instant;
use tracing::debug;

/// Pages through one MySQL table with `LIMIT ? OFFSET ?` queries.
#[derive(Clone)]
pub struct MySqlPageFetcher {
    /// The MySQL adapter used to interact with the database.
    adapter: MySqlAdapter,

    table: String,

    /// Projected columns; empty selects every column.
    columns: Vec<String>,

    /// Column giving the table a stable order across page queries.
    order_by: Option<String>,
}

impl MySqlPageFetcher {
    pub fn new(adapter: MySqlAdapter, table: &str) -> Result<Self, DbError> {
        validate_ident(table)?;
        Ok(Self {
            adapter,
            table: table.to_string(),
            columns: Vec::new(),
            order_by: None,
        })
    }

    pub fn with_columns(mut self, columns: Vec<String>) -> Result<Self, DbError> {
        for column in &columns {
            validate_ident(column)?;
        }
        self.columns = columns;
        Ok(self)
    }

    pub fn with_order_by(mut self, column: Option<String>) -> Result<Self, DbError> {
        if let Some(column) = &column {
            validate_ident(column)?;
        }
        self.order_by = column;
        Ok(self)
    }

    fn build_request(&self, page_size: PageSize, offset: usize) -> FetchRowsRequest {
        FetchRowsRequestBuilder::new(self.table.clone())
            .columns(self.columns.clone())
            .order_by(self.order_by.clone())
            .limit(page_size)
            .offset(offset)
            .build()
    }
}

#[async_trait]
impl PageFetcher for MySqlPageFetcher {
    async fn fetch_page(&self, page_size: PageSize, offset: usize) -> Result<Page, DbError> {
        let start = Instant::now();
        let request = self.build_request(page_size, offset);
        let rows = self.adapter.fetch_rows(&request).await?;

        debug!(
            "Fetched page of {} rows from {} (offset {}, page size {}) in {}ms",
            rows.len(),
            self.table,
            offset,
            page_size,
            start.elapsed().as_millis()
        );

        Ok(Page::new(offset, rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::mysql::config::MySqlConfig;

    fn adapter() -> MySqlAdapter {
        // Pool creation is lazy; no connection is attempted here.
        MySqlAdapter::new(MySqlConfig::default().database_opts())
    }

    #[tokio::test]
    async fn test_rejects_invalid_table() {
        assert!(matches!(
            MySqlPageFetcher::new(adapter(), "user_data WHERE 1=1"),
            Err(DbError::InvalidIdentifier(_))
        ));
    }

    #[tokio::test]
    async fn test_builds_page_request() {
        let fetcher = MySqlPageFetcher::new(adapter(), "user_data")
            .unwrap()
            .with_columns(vec!["age".into()])
            .unwrap()
            .with_order_by(Some("user_id".into()))
            .unwrap();

        let request = fetcher.build_request(PageSize::new(2).unwrap(), 4);
        assert_eq!(request.table, "user_data");
        assert_eq!(request.columns, vec!["age".to_string()]);
        assert_eq!(request.order_by.as_deref(), Some("user_id"));
        assert_eq!(request.limit.map(|l| l.get()), Some(2));
        assert_eq!(request.offset, 4);
    }

    #[tokio::test]
    async fn test_rejects_invalid_column() {
        let result = MySqlPageFetcher::new(adapter(), "user_data")
            .unwrap()
            .with_columns(vec!["age, password".into()]);
        assert!(result.is_err());
    }
}
