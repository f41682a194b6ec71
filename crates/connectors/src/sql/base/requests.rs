use model::pagination::page::PageSize;

/// A single-table SELECT, optionally bounded to one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRowsRequest {
    pub table: String,
    pub columns: Vec<String>,
    pub order_by: Option<String>,
    pub limit: Option<PageSize>,
    pub offset: usize,
}

pub struct FetchRowsRequestBuilder {
    table: String,
    columns: Vec<String>,
    order_by: Option<String>,
    limit: Option<PageSize>,
    offset: usize,
}

impl FetchRowsRequestBuilder {
    pub fn new(table: String) -> Self {
        FetchRowsRequestBuilder {
            table,
            columns: Vec::new(),
            order_by: None,
            limit: None,
            offset: 0,
        }
    }

    pub fn columns(mut self, columns: Vec<String>) -> Self {
        self.columns = columns;
        self
    }

    pub fn order_by(mut self, column: Option<String>) -> Self {
        self.order_by = column;
        self
    }

    pub fn limit(mut self, limit: PageSize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn build(self) -> FetchRowsRequest {
        FetchRowsRequest {
            table: self.table,
            columns: self.columns,
            order_by: self.order_by,
            limit: self.limit,
            offset: self.offset,
        }
    }
}
