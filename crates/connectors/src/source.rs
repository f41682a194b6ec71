use crate::sql::base::error::DbError;
use async_trait::async_trait;
use model::pagination::page::{Page, PageSize};
use std::sync::Arc;

/// Fetches one bounded page of rows per call.
///
/// Each call is a single round trip: the connection it uses is acquired and
/// released within the call, and nothing is cached between calls.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_page(&self, page_size: PageSize, offset: usize) -> Result<Page, DbError>;
}

#[async_trait]
impl<T: PageFetcher + ?Sized> PageFetcher for Arc<T> {
    async fn fetch_page(&self, page_size: PageSize, offset: usize) -> Result<Page, DbError> {
        (**self).fetch_page(page_size, offset).await
    }
}
