//! Feature sets
//!
//! A [`FeatureSet`] is the named mapping of computed statistical properties
//! for one column or asset. Values are opaque to the orchestration layer:
//! reducers put numbers in, the distance function reads numbers out, and the
//! extractor merges in refs to the assets the features describe.

use crate::asset::{CardRef, SegmentRef, TableRef};
use serde::Serialize;
use std::collections::BTreeMap;

/// One computed feature value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Number(f64),
    Count(u64),
    Bool(bool),
    Text(String),
    Table(TableRef),
    Segment(SegmentRef),
    Card(CardRef),
}

impl FeatureValue {
    /// Numeric view of the value, if it has one. Refs and text do not take
    /// part in numeric comparison.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FeatureValue::Number(x) => Some(*x),
            FeatureValue::Count(n) => Some(*n as f64),
            _ => None,
        }
    }
}

impl From<f64> for FeatureValue {
    fn from(value: f64) -> Self {
        FeatureValue::Number(value)
    }
}

impl From<u64> for FeatureValue {
    fn from(value: u64) -> Self {
        FeatureValue::Count(value)
    }
}

impl From<bool> for FeatureValue {
    fn from(value: bool) -> Self {
        FeatureValue::Bool(value)
    }
}

impl From<String> for FeatureValue {
    fn from(value: String) -> Self {
        FeatureValue::Text(value)
    }
}

impl From<&str> for FeatureValue {
    fn from(value: &str) -> Self {
        FeatureValue::Text(value.to_string())
    }
}

impl From<TableRef> for FeatureValue {
    fn from(value: TableRef) -> Self {
        FeatureValue::Table(value)
    }
}

impl From<SegmentRef> for FeatureValue {
    fn from(value: SegmentRef) -> Self {
        FeatureValue::Segment(value)
    }
}

impl From<CardRef> for FeatureValue {
    fn from(value: CardRef) -> Self {
        FeatureValue::Card(value)
    }
}

/// Named mapping of computed features, with deterministic iteration order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FeatureSet(BTreeMap<String, FeatureValue>);

impl FeatureSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FeatureValue>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<FeatureValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&FeatureValue> {
        self.0.get(name)
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(FeatureValue::as_number)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FeatureValue)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Fold another set in; on name collisions the incoming value wins.
    pub fn merge(&mut self, other: FeatureSet) {
        self.0.extend(other.0);
    }
}
