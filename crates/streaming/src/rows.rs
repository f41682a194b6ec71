use crate::{error::StreamError, pages::paginate};
use connectors::source::PageFetcher;
use futures::{
    StreamExt, TryStreamExt, future,
    stream::{self, BoxStream},
};
use model::{core::value::Value, pagination::page::PageSize, records::row::RowData};

/// Flattens the page stream into individual rows, in table order.
pub fn rows<F>(fetcher: F, page_size: PageSize) -> BoxStream<'static, Result<RowData, StreamError>>
where
    F: PageFetcher + 'static,
{
    paginate(fetcher, page_size)
        .map_ok(|page| stream::iter(page.into_rows().into_iter().map(Ok::<_, StreamError>)))
        .try_flatten()
        .boxed()
}

/// Streams the numeric values of one column.
///
/// `NULL` cells are skipped. A row without the column or with a non-numeric
/// value produces an error.
pub fn column_values<F>(
    fetcher: F,
    page_size: PageSize,
    column: &str,
) -> BoxStream<'static, Result<f64, StreamError>>
where
    F: PageFetcher + 'static,
{
    let column = column.to_string();
    rows(fetcher, page_size)
        .try_filter_map(move |row| future::ready(numeric_cell(&row, &column)))
        .boxed()
}

fn numeric_cell(row: &RowData, column: &str) -> Result<Option<f64>, StreamError> {
    let field = row
        .get(column)
        .ok_or_else(|| StreamError::MissingColumn(column.to_string()))?;

    match &field.value {
        Value::Null => Ok(None),
        value => value
            .as_f64()
            .map(Some)
            .ok_or_else(|| StreamError::NonNumeric {
                column: column.to_string(),
                value: value.clone(),
            }),
    }
}
