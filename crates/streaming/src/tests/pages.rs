#[cfg(test)]
mod tests {
    use crate::{
        error::StreamError,
        paginate,
        tests::memory::{GuardedTable, MemoryTable},
    };
    use futures::{FutureExt, StreamExt, TryStreamExt};
    use model::{pagination::page::PageSize, records::row::RowData};
    use std::sync::Arc;
    use tracing_test::traced_test;

    fn size(n: i64) -> PageSize {
        PageSize::new(n).unwrap()
    }

    #[tokio::test]
    async fn test_five_rows_in_pages_of_two() {
        let table = Arc::new(MemoryTable::users(5));
        let pages: Vec<_> = paginate(table.clone(), size(2)).try_collect().await.unwrap();

        let sizes: Vec<usize> = pages.iter().map(|p| p.len()).collect();
        assert_eq!(sizes, vec![2, 2, 1]);
        assert_eq!(table.offsets(), vec![0, 2, 4, 6]);

        let page_offsets: Vec<usize> = pages.iter().map(|p| p.offset).collect();
        assert_eq!(page_offsets, vec![0, 2, 4]);
    }

    #[tokio::test]
    async fn test_empty_table_yields_nothing() {
        let table = Arc::new(MemoryTable::users(0));
        let pages: Vec<_> = paginate(table.clone(), size(10)).try_collect().await.unwrap();

        assert!(pages.is_empty());
        assert_eq!(table.offsets(), vec![0]);
    }

    #[tokio::test]
    async fn test_exact_multiple_ends_on_next_empty_page() {
        let table = Arc::new(MemoryTable::users(6));
        let pages: Vec<_> = paginate(table.clone(), size(3)).try_collect().await.unwrap();

        assert_eq!(pages.len(), 2);
        assert!(pages.iter().all(|p| p.len() == 3));
        assert_eq!(table.offsets(), vec![0, 3, 6]);
    }

    #[tokio::test]
    async fn test_page_counts_and_order_for_many_sizes() {
        for n in 0..=25usize {
            for page_size in 1..=7usize {
                let table = Arc::new(MemoryTable::users(n));
                let pages: Vec<_> = paginate(table.clone(), size(page_size as i64))
                    .try_collect()
                    .await
                    .unwrap();

                let expected_pages = n.div_ceil(page_size);
                assert_eq!(pages.len(), expected_pages, "n={n} page_size={page_size}");
                assert_eq!(table.fetches(), expected_pages + 1);

                // Every page but the last is full.
                if let Some((last, full)) = pages.split_last() {
                    assert!(full.iter().all(|p| p.len() == page_size));
                    let rem = n % page_size;
                    assert_eq!(last.len(), if rem == 0 { page_size } else { rem });
                }

                // Offsets strictly increase by exactly one page size.
                let offsets = table.offsets();
                assert!(offsets.windows(2).all(|w| w[1] == w[0] + page_size));

                let flat: Vec<RowData> = pages.into_iter().flat_map(|p| p.into_rows()).collect();
                assert_eq!(flat.as_slice(), table.rows());
            }
        }
    }

    #[tokio::test]
    async fn test_failed_fetch_ends_stream() {
        let table = Arc::new(MemoryTable::users(5).failing_at(2));
        let mut stream = paginate(table.clone(), size(2));

        let first = stream.next().await.unwrap().unwrap();
        assert_eq!(first.len(), 2);

        let err = stream.next().await.unwrap().unwrap_err();
        assert!(matches!(err, StreamError::Fetch { offset: 2, .. }));

        assert!(stream.next().await.is_none());
        assert_eq!(table.offsets(), vec![0, 2]);
    }

    #[tokio::test]
    async fn test_no_work_until_polled() {
        let table = Arc::new(MemoryTable::users(10));
        let stream = paginate(table.clone(), size(3));
        assert_eq!(table.fetches(), 0);

        let taken: Vec<_> = stream.take(2).try_collect().await.unwrap();
        assert_eq!(taken.len(), 2);
        assert_eq!(table.offsets(), vec![0, 3]);
    }

    #[tokio::test]
    async fn test_streams_keep_independent_offsets() {
        let table = Arc::new(MemoryTable::users(4));
        let mut a = paginate(table.clone(), size(2));
        let mut b = paginate(table.clone(), size(2));

        let a1 = a.next().await.unwrap().unwrap();
        let b1 = b.next().await.unwrap().unwrap();
        let a2 = a.next().await.unwrap().unwrap();

        assert_eq!(a1, b1);
        assert_eq!(a2.offset, 2);
        assert_ne!(a1, a2);
        assert_eq!(table.offsets(), vec![0, 0, 2]);
    }

    #[tokio::test]
    async fn test_dropping_stream_releases_in_flight_fetch() {
        let table = Arc::new(GuardedTable::new(MemoryTable::users(5)).hanging_at(0));
        let mut stream = paginate(table.clone(), size(2));

        assert!(stream.next().now_or_never().is_none());
        assert_eq!(table.held(), 1);

        drop(stream);
        assert_eq!(table.held(), 0);
    }

    #[tokio::test]
    async fn test_failed_fetch_releases_connection() {
        let table = Arc::new(GuardedTable::new(MemoryTable::users(5).failing_at(0)));
        let mut stream = paginate(table.clone(), size(2));

        assert!(stream.next().await.unwrap().is_err());
        assert_eq!(table.held(), 0);
        assert!(stream.next().await.is_none());
    }

    #[tokio::test]
    async fn test_no_connection_held_between_pages() {
        let table = Arc::new(GuardedTable::new(MemoryTable::users(5)).hanging_at(2));
        let mut stream = paginate(table.clone(), size(2));

        let first = stream.next().await.unwrap().unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(table.held(), 0);

        assert!(stream.next().now_or_never().is_none());
        assert_eq!(table.held(), 1);
        drop(stream);
        assert_eq!(table.held(), 0);
    }

    #[traced_test]
    #[tokio::test]
    async fn test_logs_end_of_data() {
        let table = MemoryTable::users(3);
        let pages: Vec<_> = paginate(table, size(2)).try_collect().await.unwrap();

        assert_eq!(pages.len(), 2);
        assert!(logs_contain("Reached end of data at offset 4"));
    }
}
