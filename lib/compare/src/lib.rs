//! # DriftX Compare
//!
//! Comparison engine for DriftX fingerprints.
//!
//! This crate scores two extracted assets against each other and surfaces
//! the features that drive the difference:
//!
//! - [`head_tails_breaks`] - Recursive natural-breaks classification
//! - [`FeatureDistance`] / [`StandardDistance`] - Feature-set distance
//! - [`ComparisonEngine`] - Extract both assets and score them
//! - [`top_contributors`] - Rank the differing features
//!
//! ## Example
//!
//! ```rust
//! use driftx_core::{Asset, Dataset, Field, MemorySource, TableRef};
//! use driftx_compare::{ComparisonEngine, StandardDistance};
//! use driftx_extract::{ExtractOptions, Extractor, StatsReducerFactory};
//! use serde_json::json;
//!
//! let source = MemorySource::new()
//!     .with_table(
//!         "before",
//!         Dataset::new(vec![Field::new("total")], vec![vec![json!(10)], vec![json!(12)]]),
//!     )
//!     .with_table(
//!         "after",
//!         Dataset::new(vec![Field::new("total")], vec![vec![json!(90)], vec![json!(140)]]),
//!     );
//! let factory = StatsReducerFactory;
//! let distance = StandardDistance::default();
//! let engine = ComparisonEngine::new(Extractor::new(&source, &factory), &distance);
//!
//! let result = engine
//!     .compare(
//!         &ExtractOptions::default(),
//!         &Asset::table(TableRef::new("before")),
//!         &Asset::table(TableRef::new("after")),
//!     )
//!     .unwrap();
//! assert!(result.significant);
//! ```

pub mod breaks;
pub mod contributors;
pub mod distance;
pub mod engine;

pub use breaks::head_tails_breaks;
pub use contributors::{top_contributors, Contributor};
pub use distance::{
    relative_difference, DistanceResult, FeatureDifference, FeatureDistance, StandardDistance,
    DEFAULT_SIGNIFICANCE_THRESHOLD,
};
pub use engine::{Comparison, ComparisonEngine, ComparisonResult};
