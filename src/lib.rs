//! # DriftX
//!
//! Statistical fingerprinting and drift comparison for tabular analytical
//! assets.
//!
//! DriftX computes a feature fingerprint - one statistical feature set per
//! column - for a column, a table, a filtered segment, or a card (a saved
//! query), and compares two fingerprints to detect and explain how their
//! distributions differ.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! cargo install driftx
//! driftx diff before.json after.json
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use driftx::prelude::*;
//! use serde_json::json;
//!
//! // Register two snapshots of the same table
//! let cols = || vec![Field::new("category"), Field::new("price")];
//! let source = MemorySource::new()
//!     .with_table(
//!         "before",
//!         Dataset::new(cols(), vec![vec![json!("widgets"), json!(10.0)]]),
//!     )
//!     .with_table(
//!         "after",
//!         Dataset::new(cols(), vec![vec![json!("widgets"), json!(95.0)]]),
//!     );
//!
//! // Compare their fingerprints
//! let factory = StatsReducerFactory;
//! let distance = StandardDistance::default();
//! let engine = ComparisonEngine::new(Extractor::new(&source, &factory), &distance);
//! let result = engine
//!     .compare(
//!         &ExtractOptions::default(),
//!         &Asset::table(TableRef::new("before")),
//!         &Asset::table(TableRef::new("after")),
//!     )
//!     .unwrap();
//!
//! // The contributors name the features that moved
//! for contributor in &result.top_contributors {
//!     println!("{:?}", contributor);
//! }
//! ```
//!
//! ## Crate Structure
//!
//! DriftX is composed of several crates:
//!
//! - [`driftx-core`](https://docs.rs/driftx-core) - Data model (fields, datasets, assets, feature sets, cost policy)
//! - [`driftx-extract`](https://docs.rs/driftx-extract) - Streaming reducers, column alignment, fused aggregation, asset dispatch
//! - [`driftx-compare`](https://docs.rs/driftx-compare) - Feature distance, head/tails classification, contributor ranking
//!
//! ## Features
//!
//! - **Single-pass aggregation**: one traversal per dataset regardless of column count
//! - **Cost-bounded retrieval**: sample-only mode caps every fetch at a fixed row limit
//! - **Explainable comparisons**: per-field distances ranked by natural-breaks classification
//! - **Pluggable seams**: bring your own data source, reducers, or distance function

// Re-export core types
pub use driftx_core::{
    Asset, CardAsset, CardRef, ColumnAsset, ComputationCost, CostPolicy, DataSource, Dataset,
    Error, FeatureSet, FeatureValue, Field, FieldRole, FilterCondition, MaxCost, MemorySource,
    QueryCost, QueryDefinition, QueryOptions, Result, Row, SegmentAsset, SegmentRef, TableAsset,
    TableRef, Visualization, DEFAULT_SAMPLE_CAP,
};

// Re-export extraction
pub use driftx_extract::{
    align, AlignedRows, Constituents, ExtractOptions, ExtractionResult, Extractor, FusedAggregator,
    PairReducer, Reducer, ReducerFactory, StatsReducerFactory,
};

// Re-export comparison
pub use driftx_compare::{
    head_tails_breaks, top_contributors, Comparison, ComparisonEngine, ComparisonResult,
    Contributor, DistanceResult, FeatureDifference, FeatureDistance, StandardDistance,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Asset, Comparison, ComparisonEngine, ComparisonResult, Contributor, CostPolicy,
        DataSource, Dataset, Error, ExtractOptions, ExtractionResult, Extractor, FeatureDistance,
        FeatureSet, FeatureValue, Field, FieldRole, FilterCondition, MaxCost, MemorySource,
        QueryDefinition, Result, StandardDistance, StatsReducerFactory, TableRef, Visualization,
    };
}
