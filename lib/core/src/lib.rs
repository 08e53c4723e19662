//! # DriftX Core
//!
//! Core data model for the DriftX fingerprinting engine.
//!
//! This crate provides the types the rest of the pipeline is built on:
//!
//! - [`Field`] - Column descriptor with role and aggregation-eligibility flags
//! - [`Dataset`] - Columns plus positionally-aligned rows of opaque cells
//! - [`Asset`] - The analyzed entity: column, table, segment, or card
//! - [`FeatureSet`] - Named mapping of computed statistical properties
//! - [`FilterCondition`] - Segment predicates evaluated row by row
//! - [`CostPolicy`] - Sample-capped retrieval decisions
//! - [`DataSource`] - Retrieval seam, with [`MemorySource`] for in-memory use
//!
//! ## Example
//!
//! ```rust
//! use driftx_core::{Dataset, Field, MemorySource, DataSource, TableRef, QueryOptions};
//! use serde_json::json;
//!
//! let dataset = Dataset::new(
//!     vec![Field::new("category"), Field::new("price")],
//!     vec![vec![json!("widgets"), json!(9.99)]],
//! );
//! let source = MemorySource::new().with_table("products", dataset);
//!
//! let fetched = source
//!     .fetch_table(&TableRef::new("products"), &QueryOptions::default())
//!     .unwrap();
//! assert_eq!(fetched.row_count(), 1);
//! ```

pub mod asset;
pub mod cost;
pub mod dataset;
pub mod error;
pub mod feature;
pub mod field;
pub mod filter;
pub mod source;

pub use asset::{
    Asset, CardAsset, CardRef, ColumnAsset, QueryDefinition, SegmentAsset, SegmentRef, TableAsset,
    TableRef, Visualization,
};
pub use cost::{ComputationCost, CostPolicy, MaxCost, QueryCost, QueryOptions, DEFAULT_SAMPLE_CAP};
pub use dataset::{Dataset, Row};
pub use error::{Error, Result};
pub use feature::{FeatureSet, FeatureValue};
pub use field::{Field, FieldRole};
pub use filter::FilterCondition;
pub use source::{DataSource, MemorySource};
