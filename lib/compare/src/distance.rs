//! Feature-set distance
//!
//! [`FeatureDistance`] is the seam the comparison engine scores through.
//! [`StandardDistance`] is the default implementation: the mean relative
//! difference over the numeric features both sets share, with the
//! strongest-differing features surfaced as contributors.

use crate::breaks::head_tails_breaks;
use driftx_core::FeatureSet;
use serde::Serialize;

/// One feature's reported difference between two compared sets
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureDifference {
    pub feature: String,
    pub difference: f64,
}

/// Output of one feature-set distance computation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceResult {
    pub distance: f64,
    pub significant: bool,
    pub top_contributors: Vec<FeatureDifference>,
}

pub trait FeatureDistance {
    fn distance(&self, a: &FeatureSet, b: &FeatureSet) -> DistanceResult;
}

pub const DEFAULT_SIGNIFICANCE_THRESHOLD: f64 = 0.2;

/// `|a - b| / (|a| + |b|)`, 0 when both are zero. Always in [0, 1].
pub fn relative_difference(a: f64, b: f64) -> f64 {
    let scale = a.abs() + b.abs();
    if scale == 0.0 {
        0.0
    } else {
        (a - b).abs() / scale
    }
}

/// Mean relative difference over shared numeric features
#[derive(Debug, Clone, Copy)]
pub struct StandardDistance {
    pub threshold: f64,
}

impl Default for StandardDistance {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SIGNIFICANCE_THRESHOLD,
        }
    }
}

impl StandardDistance {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl FeatureDistance for StandardDistance {
    fn distance(&self, a: &FeatureSet, b: &FeatureSet) -> DistanceResult {
        let differences: Vec<FeatureDifference> = a
            .iter()
            .filter_map(|(name, value)| {
                let x = value.as_number()?;
                let y = b.get(name)?.as_number()?;
                Some(FeatureDifference {
                    feature: name.clone(),
                    difference: relative_difference(x, y),
                })
            })
            .collect();

        let distance = if differences.is_empty() {
            0.0
        } else {
            differences.iter().map(|d| d.difference).sum::<f64>() / differences.len() as f64
        };

        let moved: Vec<FeatureDifference> = differences
            .into_iter()
            .filter(|d| d.difference > 0.0)
            .collect();
        let top_contributors = head_tails_breaks(|d: &FeatureDifference| d.difference, moved);

        DistanceResult {
            distance,
            significant: distance > self.threshold,
            top_contributors,
        }
    }
}
