//! Fused single-pass aggregation
//!
//! Cost-bounded datasets can still be large and extractors numerous.
//! [`FusedAggregator`] holds one reducer per eligible column, each bound to
//! a precomputed row index, and distributes every row's cells in a single
//! traversal - extraction stays linear in row count regardless of column
//! count.

use crate::reducer::{ExtractOptions, Reducer, ReducerFactory};
use driftx_core::{FeatureSet, Field, Row};
use serde::Serialize;

/// Per-column feature sets of a composite asset, in dataset column order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Constituents(Vec<(String, FeatureSet)>);

impl Constituents {
    pub fn get(&self, name: &str) -> Option<&FeatureSet> {
        self.0
            .iter()
            .find(|(column, _)| column == name)
            .map(|(_, features)| features)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (String, FeatureSet)> {
        self.0.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

struct Slot {
    index: usize,
    name: String,
    reducer: Box<dyn Reducer>,
}

/// One reducer per eligible column, fused into a single traversal
pub struct FusedAggregator {
    slots: Vec<Slot>,
}

impl FusedAggregator {
    /// Build a reducer for every column that is neither remapped nor a
    /// primary key, bound to that column's row index.
    pub fn new(factory: &dyn ReducerFactory, options: &ExtractOptions, cols: &[Field]) -> Self {
        let slots = cols
            .iter()
            .enumerate()
            .filter(|(_, col)| col.eligible())
            .map(|(index, col)| Slot {
                index,
                name: col.name.clone(),
                reducer: factory.build(options, col),
            })
            .collect();
        Self { slots }
    }

    /// Feed one row: every reducer consumes only the cell at its bound index.
    pub fn step(&mut self, row: &Row) {
        for slot in &mut self.slots {
            slot.reducer.step(&row[slot.index]);
        }
    }

    /// Single traversal of `rows`, then finalization.
    pub fn run(mut self, rows: &[Row]) -> Constituents {
        for row in rows {
            self.step(row);
        }
        self.finish()
    }

    pub fn finish(self) -> Constituents {
        Constituents(
            self.slots
                .into_iter()
                .map(|slot| (slot.name, slot.reducer.complete()))
                .collect(),
        )
    }
}
