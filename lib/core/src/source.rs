//! Dataset access
//!
//! [`DataSource`] is the retrieval seam: fetching a table or a single
//! column's values, and executing a card's query. Failures propagate
//! unhandled; this layer does not retry or recover. [`MemorySource`] is the
//! in-memory implementation used by the CLI and the test suite.

use crate::asset::{QueryDefinition, TableRef};
use crate::cost::QueryOptions;
use crate::dataset::{Dataset, Row};
use crate::error::{Error, Result};
use crate::field::Field;
use ahash::AHashMap;

pub trait DataSource {
    /// Fetch a table's dataset, honoring the retrieval options.
    fn fetch_table(&self, table: &TableRef, options: &QueryOptions) -> Result<Dataset>;

    /// Fetch a single column's values as a one-column dataset.
    fn fetch_column(&self, table: &TableRef, field: &Field, options: &QueryOptions)
        -> Result<Dataset>;

    /// Execute a card's query definition.
    fn execute(&self, query: &QueryDefinition) -> Result<Dataset>;
}

/// Named tables held in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    tables: AHashMap<String, Dataset>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(mut self, name: impl Into<String>, dataset: Dataset) -> Self {
        self.insert_table(name, dataset);
        self
    }

    pub fn insert_table(&mut self, name: impl Into<String>, dataset: Dataset) {
        self.tables.insert(name.into(), dataset);
    }

    fn table(&self, table: &TableRef) -> Result<&Dataset> {
        self.tables
            .get(&table.0)
            .ok_or_else(|| Error::TableNotFound(table.0.clone()))
    }
}

impl DataSource for MemorySource {
    fn fetch_table(&self, table: &TableRef, options: &QueryOptions) -> Result<Dataset> {
        Ok(self.table(table)?.clone().truncated(options.limit))
    }

    fn fetch_column(
        &self,
        table: &TableRef,
        field: &Field,
        options: &QueryOptions,
    ) -> Result<Dataset> {
        let dataset = self.table(table)?;
        let index = dataset
            .col_index_by_name(&field.name)
            .ok_or_else(|| Error::ColumnNotFound(field.name.clone()))?;

        let take = options.limit.unwrap_or(usize::MAX);
        let rows: Vec<Row> = dataset
            .rows
            .iter()
            .take(take)
            .map(|row| vec![row[index].clone()])
            .collect();

        Ok(Dataset::new(vec![dataset.cols[index].clone()], rows))
    }

    fn execute(&self, query: &QueryDefinition) -> Result<Dataset> {
        let dataset = self.table(&query.source_table)?;

        let mut rows: Vec<Row> = match &query.filter {
            Some(condition) => dataset
                .rows
                .iter()
                .filter(|row| condition.matches(&dataset.cols, row))
                .cloned()
                .collect(),
            None => dataset.rows.clone(),
        };
        if let Some(limit) = query.limit {
            rows.truncate(limit);
        }

        Ok(Dataset::new(dataset.cols.clone(), rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterCondition;
    use serde_json::json;

    fn create_test_source() -> MemorySource {
        MemorySource::new().with_table(
            "products",
            Dataset::new(
                vec![Field::new("category"), Field::new("price")],
                vec![
                    vec![json!("widgets"), json!(9.99)],
                    vec![json!("gadgets"), json!(24.5)],
                    vec![json!("widgets"), json!(3.0)],
                ],
            ),
        )
    }

    #[test]
    fn test_fetch_table_with_limit() {
        let source = create_test_source();
        let table = TableRef::new("products");

        let full = source.fetch_table(&table, &QueryOptions::default()).unwrap();
        assert_eq!(full.row_count(), 3);

        let capped = source
            .fetch_table(&table, &QueryOptions { limit: Some(2) })
            .unwrap();
        assert_eq!(capped.row_count(), 2);
    }

    #[test]
    fn test_fetch_column_projects() {
        let source = create_test_source();
        let dataset = source
            .fetch_column(
                &TableRef::new("products"),
                &Field::new("price"),
                &QueryOptions::default(),
            )
            .unwrap();

        assert_eq!(dataset.cols.len(), 1);
        assert_eq!(dataset.cols[0].name, "price");
        assert_eq!(
            dataset.rows,
            vec![vec![json!(9.99)], vec![json!(24.5)], vec![json!(3.0)]]
        );
    }

    #[test]
    fn test_execute_filters_then_limits() {
        let source = create_test_source();
        let query = QueryDefinition::new(TableRef::new("products"))
            .with_filter(FilterCondition::Equals {
                field: "category".to_string(),
                value: json!("widgets"),
            })
            .with_limit(1);

        let dataset = source.execute(&query).unwrap();
        assert_eq!(dataset.rows, vec![vec![json!("widgets"), json!(9.99)]]);
    }

    #[test]
    fn test_unknown_refs_error() {
        let source = create_test_source();
        assert!(matches!(
            source.fetch_table(&TableRef::new("orders"), &QueryOptions::default()),
            Err(Error::TableNotFound(_))
        ));
        assert!(matches!(
            source.fetch_column(
                &TableRef::new("products"),
                &Field::new("discount"),
                &QueryOptions::default()
            ),
            Err(Error::ColumnNotFound(_))
        ));
    }
}
