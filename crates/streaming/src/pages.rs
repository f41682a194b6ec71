use crate::error::StreamError;
use connectors::source::PageFetcher;
use futures::{
    StreamExt,
    stream::{self, BoxStream},
};
use model::pagination::{
    cursor::Cursor,
    page::{Page, PageSize},
};
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Lazy, finite, non-restartable sequence of pages.
pub type PageStream = BoxStream<'static, Result<Page, StreamError>>;

/// Streams a table page by page.
///
/// Nothing is fetched until the stream is polled, and each poll issues at
/// most one fetch at the current offset. A non-empty page is yielded and the
/// offset moves forward by `page_size`; the first empty page ends the stream.
/// A failed fetch is yielded as an error and also ends the stream. Dropping
/// the stream drops any in-flight fetch along with the connection it holds.
pub fn paginate<F>(fetcher: F, page_size: PageSize) -> PageStream
where
    F: PageFetcher + 'static,
{
    let fetcher = Arc::new(fetcher);

    stream::try_unfold(Cursor::start(), move |cursor| {
        let fetcher = Arc::clone(&fetcher);
        async move {
            let offset = cursor.offset();
            let page = fetcher
                .fetch_page(page_size, offset)
                .await
                .map_err(|source| {
                    warn!("Page fetch at offset {} failed: {}", offset, source);
                    StreamError::Fetch { offset, source }
                })?;

            if page.is_empty() {
                debug!("Reached end of data at offset {}", offset);
                return Ok(None);
            }

            trace!("Yielding {} rows from offset {}", page.len(), offset);
            Ok(Some((page, cursor.advance(page_size))))
        }
    })
    .boxed()
}
