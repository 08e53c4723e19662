//! Tabular datasets
//!
//! A [`Dataset`] is an ordered sequence of column descriptors plus rows of
//! cells aligned positionally with them. Cells are opaque
//! [`serde_json::Value`]s; every row is as long as `cols`, an invariant the
//! retrieving source owns and the rest of the pipeline relies on without
//! re-validating.

use crate::field::Field;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One dataset row, positionally aligned with the dataset's columns
pub type Row = Vec<Value>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub cols: Vec<Field>,
    pub rows: Vec<Row>,
}

impl Dataset {
    pub fn new(cols: Vec<Field>, rows: Vec<Row>) -> Self {
        Self { cols, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// First column index whose descriptor equals `field` structurally.
    pub fn col_index(&self, field: &Field) -> Option<usize> {
        self.cols.iter().position(|col| col == field)
    }

    /// First column index with the given name.
    pub fn col_index_by_name(&self, name: &str) -> Option<usize> {
        self.cols.iter().position(|col| col.name == name)
    }

    /// Truncate rows to `limit` when one is given.
    pub fn truncated(mut self, limit: Option<usize>) -> Self {
        if let Some(limit) = limit {
            self.rows.truncate(limit);
        }
        self
    }
}
