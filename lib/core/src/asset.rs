//! Analytical assets
//!
//! An [`Asset`] names the thing being fingerprinted: a single column, a
//! whole table, a filtered segment of a table, or a card (a saved or ad-hoc
//! query). Each variant carries an identity ref plus whatever is needed to
//! retrieve its dataset through a [`crate::DataSource`].

use crate::cost::QueryOptions;
use crate::field::Field;
use crate::filter::FilterCondition;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a table
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableRef(pub String);

impl TableRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identity of a saved segment
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SegmentRef(pub String);

impl SegmentRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl fmt::Display for SegmentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identity of a card (saved question / ad-hoc query)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardRef(pub String);

impl CardRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl fmt::Display for CardRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Definition of a card's query, executed by the query-execution collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryDefinition {
    pub source_table: TableRef,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<FilterCondition>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

impl QueryDefinition {
    pub fn new(source_table: TableRef) -> Self {
        Self {
            source_table,
            filter: None,
            limit: None,
        }
    }

    pub fn with_filter(mut self, filter: FilterCondition) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Merge cost-policy query options into the definition. A limit already
    /// declared on the query is kept when it is the tighter of the two.
    pub fn with_options(&self, options: &QueryOptions) -> QueryDefinition {
        let limit = match (self.limit, options.limit) {
            (Some(own), Some(cap)) => Some(own.min(cap)),
            (own, cap) => own.or(cap),
        };
        QueryDefinition {
            source_table: self.source_table.clone(),
            filter: self.filter.clone(),
            limit,
        }
    }
}

/// Visualization hints carried by a card
///
/// The first declared metric and dimension are the primary ones; the rest
/// are kept for completeness but never drive role tagging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Visualization {
    #[serde(default)]
    pub metrics: Vec<String>,

    #[serde(default)]
    pub dimensions: Vec<String>,
}

impl Visualization {
    pub fn new(metrics: Vec<String>, dimensions: Vec<String>) -> Self {
        Self { metrics, dimensions }
    }

    pub fn primary_metric(&self) -> Option<&str> {
        self.metrics.first().map(String::as_str)
    }

    pub fn primary_dimension(&self) -> Option<&str> {
        self.dimensions.first().map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnAsset {
    pub table: TableRef,
    pub field: Field,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableAsset {
    pub table: TableRef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentAsset {
    pub segment: SegmentRef,
    pub table: TableRef,
    /// The segment's stored predicate
    pub definition: FilterCondition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardAsset {
    pub card: CardRef,
    pub table: TableRef,
    pub query: QueryDefinition,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visualization: Option<Visualization>,
}

/// The analyzed entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Asset {
    Column(ColumnAsset),
    Table(TableAsset),
    Segment(SegmentAsset),
    Card(CardAsset),
}

impl Asset {
    pub fn column(table: TableRef, field: Field) -> Self {
        Asset::Column(ColumnAsset { table, field })
    }

    pub fn table(table: TableRef) -> Self {
        Asset::Table(TableAsset { table })
    }

    pub fn segment(segment: SegmentRef, table: TableRef, definition: FilterCondition) -> Self {
        Asset::Segment(SegmentAsset {
            segment,
            table,
            definition,
        })
    }

    pub fn card(
        card: CardRef,
        table: TableRef,
        query: QueryDefinition,
        visualization: Option<Visualization>,
    ) -> Self {
        Asset::Card(CardAsset {
            card,
            table,
            query,
            visualization,
        })
    }

    /// The table this asset's data ultimately comes from.
    pub fn owner_table(&self) -> &TableRef {
        match self {
            Asset::Column(column) => &column.table,
            Asset::Table(table) => &table.table,
            Asset::Segment(segment) => &segment.table,
            Asset::Card(card) => &card.table,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Asset::Column(_) => "column",
            Asset::Table(_) => "table",
            Asset::Segment(_) => "segment",
            Asset::Card(_) => "card",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_options_merge() {
        let query = QueryDefinition::new(TableRef::new("orders"));
        let merged = query.with_options(&QueryOptions { limit: Some(500) });
        assert_eq!(merged.limit, Some(500));

        let tighter = QueryDefinition::new(TableRef::new("orders")).with_limit(100);
        let merged = tighter.with_options(&QueryOptions { limit: Some(500) });
        assert_eq!(merged.limit, Some(100));

        let untouched = tighter.with_options(&QueryOptions::default());
        assert_eq!(untouched.limit, Some(100));
    }

    #[test]
    fn test_primary_hints_are_first_declared() {
        let viz = Visualization::new(
            vec!["Count".to_string(), "Sum".to_string()],
            vec!["Category".to_string(), "Region".to_string()],
        );
        assert_eq!(viz.primary_metric(), Some("Count"));
        assert_eq!(viz.primary_dimension(), Some("Category"));
    }

    #[test]
    fn test_owner_table_per_kind() {
        let table = TableRef::new("orders");
        let asset = Asset::column(table.clone(), Field::new("total"));
        assert_eq!(asset.owner_table(), &table);
        assert_eq!(asset.kind(), "column");

        let asset = Asset::card(
            CardRef::new("orders by month"),
            table.clone(),
            QueryDefinition::new(table.clone()),
            None,
        );
        assert_eq!(asset.owner_table(), &table);
        assert_eq!(asset.kind(), "card");
    }
}
