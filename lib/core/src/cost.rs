//! Cost policy
//!
//! Extraction can run against arbitrarily large datasets. A [`MaxCost`]
//! declares how much the caller is willing to spend, and the [`CostPolicy`]
//! turns that into concrete retrieval options: in sample-only mode,
//! retrieval is capped at a fixed row limit. The cap is configuration owned
//! by the policy, not process-wide state.

use serde::{Deserialize, Serialize};

/// How much computation the caller is willing to spend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComputationCost {
    Linear,
    Unbounded,
    Yolo,
}

/// How much query work the caller is willing to spend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QueryCost {
    Cache,
    Sample,
    FullScan,
    Joins,
}

/// Cost ceiling for one extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaxCost {
    pub computation: ComputationCost,
    pub query: QueryCost,
}

impl MaxCost {
    pub fn new(computation: ComputationCost, query: QueryCost) -> Self {
        Self { computation, query }
    }
}

/// Retrieval options derived from the cost policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryOptions {
    pub limit: Option<usize>,
}

pub const DEFAULT_SAMPLE_CAP: usize = 10_000;

/// Decides whether extraction runs against a capped sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostPolicy {
    sample_cap: usize,
}

impl Default for CostPolicy {
    fn default() -> Self {
        Self {
            sample_cap: DEFAULT_SAMPLE_CAP,
        }
    }
}

impl CostPolicy {
    pub fn new(sample_cap: usize) -> Self {
        Self { sample_cap }
    }

    pub fn sample_cap(&self) -> usize {
        self.sample_cap
    }

    pub fn should_sample(&self, max_cost: Option<&MaxCost>) -> bool {
        matches!(max_cost, Some(cost) if cost.query == QueryCost::Sample)
    }

    pub fn query_options(&self, max_cost: Option<&MaxCost>) -> QueryOptions {
        if self.should_sample(max_cost) {
            QueryOptions {
                limit: Some(self.sample_cap),
            }
        } else {
            QueryOptions::default()
        }
    }
}
