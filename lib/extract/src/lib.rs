//! # DriftX Extract
//!
//! Streaming feature extraction for DriftX.
//!
//! This crate turns an analytical asset into its feature fingerprint:
//!
//! - [`Reducer`] / [`PairReducer`] - Stateful folds over column cells
//! - [`StatsReducerFactory`] - Default streaming statistics reducers
//! - [`align`] - Lazy two-column projection for declared field pairs
//! - [`FusedAggregator`] - One reducer per eligible column, one traversal
//! - [`Extractor`] - Per-asset-kind dispatch into [`ExtractionResult`]
//!
//! ## Example
//!
//! ```rust
//! use driftx_core::{Asset, Dataset, Field, MemorySource, TableRef};
//! use driftx_extract::{ExtractOptions, Extractor, StatsReducerFactory};
//! use serde_json::json;
//!
//! let source = MemorySource::new().with_table(
//!     "products",
//!     Dataset::new(
//!         vec![Field::new("price")],
//!         vec![vec![json!(9.99)], vec![json!(24.5)]],
//!     ),
//! );
//! let factory = StatsReducerFactory;
//! let extractor = Extractor::new(&source, &factory);
//!
//! let result = extractor
//!     .extract(&ExtractOptions::default(), &Asset::table(TableRef::new("products")))
//!     .unwrap();
//! assert!(result.constituents.is_some());
//! ```

pub mod aggregate;
pub mod align;
pub mod extractor;
pub mod reducer;
pub mod stats;

pub use aggregate::{Constituents, FusedAggregator};
pub use align::{align, AlignedIter, AlignedRows};
pub use extractor::{ExtractionResult, Extractor};
pub use reducer::{ExtractOptions, PairReducer, Reducer, ReducerFactory};
pub use stats::{ColumnStats, PairStats, StatsReducerFactory};
