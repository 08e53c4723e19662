//! Reducer seam
//!
//! A [`Reducer`] is a stateful fold over one column's cells; a
//! [`PairReducer`] folds an aligned pair of columns. The
//! [`ReducerFactory`] builds one instance per column - reducers carry no
//! cross-column state, which is what lets the aggregator fuse them into a
//! single traversal.

use driftx_core::{Field, FeatureSet, MaxCost, QueryDefinition};
use serde_json::Value;

/// Stateful fold over one column's cells
pub trait Reducer {
    fn step(&mut self, cell: &Value);

    fn complete(self: Box<Self>) -> FeatureSet;
}

/// Stateful fold over an aligned (dimension, metric) pair of columns
pub trait PairReducer {
    fn step(&mut self, x: &Value, y: &Value);

    fn complete(self: Box<Self>) -> FeatureSet;
}

/// Builds reducers for the columns of one extraction
pub trait ReducerFactory {
    fn build(&self, options: &ExtractOptions, field: &Field) -> Box<dyn Reducer>;

    fn build_pair(&self, options: &ExtractOptions, fields: (&Field, &Field))
        -> Box<dyn PairReducer>;
}

/// Options governing one extraction
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Cost ceiling; drives the sampling decision only
    pub max_cost: Option<MaxCost>,

    /// The card's query definition, populated by the dispatcher when
    /// building the relation reducer over an aligned pair
    pub query: Option<QueryDefinition>,
}

impl ExtractOptions {
    pub fn with_max_cost(max_cost: MaxCost) -> Self {
        Self {
            max_cost: Some(max_cost),
            query: None,
        }
    }
}
