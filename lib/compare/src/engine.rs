//! Comparison engine
//!
//! Extracts two assets and scores the difference between their
//! fingerprints: field by field when both are composite, as one whole-set
//! distance when both are leaves. The ranked contributors explain what
//! moved.

use crate::contributors::{top_contributors, Contributor};
use crate::distance::{DistanceResult, FeatureDistance};
use ahash::AHashMap;
use driftx_core::{Asset, Error, FeatureSet, Result};
use driftx_extract::{ExtractOptions, ExtractionResult, Extractor};
use serde::Serialize;
use tracing::debug;

/// Field-wise or whole-set comparison output
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Comparison {
    /// Per-field distance results, in the first side's constituent order
    Fields(Vec<(String, DistanceResult)>),
    /// One distance between two leaf feature sets
    Whole(DistanceResult),
}

impl Comparison {
    pub fn significant(&self) -> bool {
        match self {
            Comparison::Fields(fields) => fields.iter().any(|(_, result)| result.significant),
            Comparison::Whole(result) => result.significant,
        }
    }
}

/// Output of one asset-to-asset comparison
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonResult {
    pub constituents: (ExtractionResult, ExtractionResult),
    pub comparison: Comparison,
    pub top_contributors: Vec<Contributor>,
    pub sample: bool,
    pub significant: bool,
}

pub struct ComparisonEngine<'a> {
    extractor: Extractor<'a>,
    distance: &'a dyn FeatureDistance,
}

impl<'a> ComparisonEngine<'a> {
    pub fn new(extractor: Extractor<'a>, distance: &'a dyn FeatureDistance) -> Self {
        Self { extractor, distance }
    }

    /// Extract both assets and explain how their fingerprints differ.
    pub fn compare(
        &self,
        options: &ExtractOptions,
        a: &Asset,
        b: &Asset,
    ) -> Result<ComparisonResult> {
        let left = self.extractor.extract(options, a)?;
        let right = self.extractor.extract(options, b)?;

        let comparison = match (&left.constituents, &right.constituents) {
            (Some(ours), Some(theirs)) => {
                let index: AHashMap<&str, &FeatureSet> = theirs
                    .iter()
                    .map(|(name, features)| (name.as_str(), features))
                    .collect();

                let fields = ours
                    .iter()
                    .filter_map(|(name, features)| match index.get(name.as_str()) {
                        Some(other) => {
                            Some((name.clone(), self.distance.distance(features, *other)))
                        }
                        None => {
                            debug!(field = %name, "field missing on the second side; skipped");
                            None
                        }
                    })
                    .collect();
                Comparison::Fields(fields)
            }
            (None, None) => Comparison::Whole(self.distance.distance(&left.features, &right.features)),
            _ => {
                return Err(Error::Incomparable(format!(
                    "{} vs {}",
                    a.kind(),
                    b.kind()
                )))
            }
        };

        let significant = comparison.significant();
        let sample = left.sample || right.sample;
        let top_contributors = top_contributors(&comparison);

        Ok(ComparisonResult {
            constituents: (left, right),
            comparison,
            top_contributors,
            sample,
            significant,
        })
    }
}
