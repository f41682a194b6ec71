use crate::{error::ModelError, records::row::RowData};
use serde::Serialize;
use std::{fmt, num::NonZeroUsize};

/// Number of rows requested per page. Always greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    pub fn new(size: i64) -> Result<Self, ModelError> {
        usize::try_from(size)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(PageSize)
            .ok_or(ModelError::InvalidPageSize(size))
    }

    pub fn get(&self) -> usize {
        self.0.get()
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A bounded batch of rows fetched by a single query.
///
/// An empty page marks the end of the data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub offset: usize,
    pub rows: Vec<RowData>,
}

impl Page {
    pub fn new(offset: usize, rows: Vec<RowData>) -> Self {
        Page { offset, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn into_rows(self) -> Vec<RowData> {
        self.rows
    }
}
