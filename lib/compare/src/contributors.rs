//! Contributor ranking
//!
//! Flattens a comparison into the ordered list of features that drive the
//! difference. Composite comparisons are classified twice: once over the
//! per-field distances, then again over the flattened per-feature
//! contributions. Leaf comparisons pass the distance function's own
//! contributors through untouched.

use crate::breaks::head_tails_breaks;
use crate::engine::Comparison;
use serde::Serialize;

/// A feature surfaced as significantly differing between two assets
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contributor {
    pub feature: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contribution: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub difference: Option<f64>,
}

/// Rank the comparison's most significant contributing features.
pub fn top_contributors(comparison: &Comparison) -> Vec<Contributor> {
    match comparison {
        Comparison::Whole(result) => result
            .top_contributors
            .iter()
            .map(|d| Contributor {
                feature: d.feature.clone(),
                field: None,
                contribution: None,
                difference: Some(d.difference),
            })
            .collect(),
        Comparison::Fields(fields) => {
            let surviving =
                head_tails_breaks(|entry| entry.1.distance.abs(), fields.iter().collect());

            let flattened: Vec<Contributor> = surviving
                .into_iter()
                .flat_map(|(field, result)| {
                    result.top_contributors.iter().map(move |d| Contributor {
                        feature: d.feature.clone(),
                        field: Some(field.clone()),
                        contribution: Some(result.distance.sqrt() * d.difference),
                        difference: None,
                    })
                })
                .collect();

            head_tails_breaks(|c: &Contributor| c.contribution.unwrap_or(0.0), flattened)
        }
    }
}
