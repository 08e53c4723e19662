//! Default streaming statistics reducers
//!
//! One pass, O(1) state per column apart from the distinct set: counts for
//! every cell, Welford moments for the numeric ones. The pair reducer adds
//! streaming co-moments for the dimension-metric relationship.

use crate::reducer::{ExtractOptions, PairReducer, Reducer, ReducerFactory};
use ahash::AHashSet;
use driftx_core::{FeatureSet, Field};
use serde_json::Value;

/// Streaming moments of a numeric sequence (Welford)
#[derive(Debug, Clone, Copy, Default)]
struct Moments {
    count: u64,
    mean: f64,
    m2: f64,
    sum: f64,
    min: f64,
    max: f64,
}

impl Moments {
    fn step(&mut self, x: f64) {
        if self.count == 0 {
            self.min = x;
            self.max = x;
        } else {
            self.min = self.min.min(x);
            self.max = self.max.max(x);
        }
        self.count += 1;
        self.sum += x;
        let delta = x - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (x - self.mean);
    }

    fn sd(&self) -> f64 {
        (self.m2 / self.count as f64).sqrt()
    }
}

/// Per-column statistics reducer
#[derive(Debug, Default)]
pub struct ColumnStats {
    count: u64,
    nulls: u64,
    distinct: AHashSet<String>,
    numeric: Moments,
}

impl Reducer for ColumnStats {
    fn step(&mut self, cell: &Value) {
        self.count += 1;
        if cell.is_null() {
            self.nulls += 1;
            return;
        }
        self.distinct.insert(cell.to_string());
        if let Some(x) = cell.as_f64() {
            self.numeric.step(x);
        }
    }

    fn complete(self: Box<Self>) -> FeatureSet {
        let mut features = FeatureSet::new()
            .with("count", self.count)
            .with("nulls", self.nulls)
            .with("distinct", self.distinct.len() as u64);

        if self.numeric.count > 0 {
            features.insert("min", self.numeric.min);
            features.insert("max", self.numeric.max);
            features.insert("sum", self.numeric.sum);
            features.insert("mean", self.numeric.mean);
            features.insert("sd", self.numeric.sd());
        }
        features
    }
}

/// Streaming co-moments of an (x, y) pair
#[derive(Debug, Clone, Copy, Default)]
struct PairMoments {
    count: u64,
    mean_x: f64,
    mean_y: f64,
    m2_x: f64,
    m2_y: f64,
    co_moment: f64,
}

impl PairMoments {
    fn step(&mut self, x: f64, y: f64) {
        self.count += 1;
        let n = self.count as f64;

        let dx = x - self.mean_x;
        self.mean_x += dx / n;
        self.m2_x += dx * (x - self.mean_x);

        let dy = y - self.mean_y;
        self.mean_y += dy / n;
        self.m2_y += dy * (y - self.mean_y);

        self.co_moment += dx * (y - self.mean_y);
    }
}

/// Relation reducer summarizing the dimension-metric relationship
#[derive(Debug, Default)]
pub struct PairStats {
    rows: u64,
    numeric: PairMoments,
}

impl PairReducer for PairStats {
    fn step(&mut self, x: &Value, y: &Value) {
        self.rows += 1;
        if let (Some(x), Some(y)) = (x.as_f64(), y.as_f64()) {
            self.numeric.step(x, y);
        }
    }

    fn complete(self: Box<Self>) -> FeatureSet {
        let mut features = FeatureSet::new().with("count", self.rows);

        let pairs = self.numeric;
        if pairs.count > 1 {
            let n = pairs.count as f64;
            let covariance = pairs.co_moment / n;
            let var_x = pairs.m2_x / n;
            let var_y = pairs.m2_y / n;

            features.insert("covariance", covariance);
            if var_x > 0.0 && var_y > 0.0 {
                features.insert("correlation", covariance / (var_x.sqrt() * var_y.sqrt()));
            }
            if var_x > 0.0 {
                let slope = covariance / var_x;
                features.insert("slope", slope);
                features.insert("intercept", pairs.mean_y - slope * pairs.mean_x);
            }
        }
        features
    }
}

/// Default factory: [`ColumnStats`] per column, [`PairStats`] per pair
#[derive(Debug, Clone, Copy, Default)]
pub struct StatsReducerFactory;

impl ReducerFactory for StatsReducerFactory {
    fn build(&self, _options: &ExtractOptions, _field: &Field) -> Box<dyn Reducer> {
        Box::new(ColumnStats::default())
    }

    fn build_pair(
        &self,
        _options: &ExtractOptions,
        _fields: (&Field, &Field),
    ) -> Box<dyn PairReducer> {
        Box::new(PairStats::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn reduce(cells: &[Value]) -> FeatureSet {
        let mut reducer = Box::new(ColumnStats::default());
        for cell in cells {
            reducer.step(cell);
        }
        reducer.complete()
    }

    #[test]
    fn test_numeric_column() {
        let features = reduce(&[json!(1.0), json!(2.0), json!(3.0), json!(6.0)]);

        assert_eq!(features.number("count"), Some(4.0));
        assert_eq!(features.number("nulls"), Some(0.0));
        assert_eq!(features.number("distinct"), Some(4.0));
        assert_eq!(features.number("min"), Some(1.0));
        assert_eq!(features.number("max"), Some(6.0));
        assert_eq!(features.number("sum"), Some(12.0));
        assert_eq!(features.number("mean"), Some(3.0));

        // Population sd of [1, 2, 3, 6]
        let sd = features.number("sd").unwrap();
        assert!((sd - 3.5f64.sqrt()).abs() < 1e-9, "unexpected sd {}", sd);
    }

    #[test]
    fn test_nulls_and_distinct() {
        let features = reduce(&[json!("a"), json!("a"), Value::Null, json!("b")]);

        assert_eq!(features.number("count"), Some(4.0));
        assert_eq!(features.number("nulls"), Some(1.0));
        assert_eq!(features.number("distinct"), Some(2.0));
        // No numeric cells, no numeric features
        assert_eq!(features.number("mean"), None);
    }

    #[test]
    fn test_pair_correlation_perfect_fit() {
        let mut reducer = Box::new(PairStats::default());
        for i in 0..10 {
            reducer.step(&json!(i), &json!(2 * i + 1));
        }
        let features = reducer.complete();

        assert_eq!(features.number("count"), Some(10.0));
        let correlation = features.number("correlation").unwrap();
        assert!(
            (correlation - 1.0).abs() < 1e-9,
            "expected perfect correlation, got {}",
            correlation
        );
        assert!((features.number("slope").unwrap() - 2.0).abs() < 1e-9);
        assert!((features.number("intercept").unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_pair_ignores_non_numeric_cells() {
        let mut reducer = Box::new(PairStats::default());
        reducer.step(&json!("widgets"), &json!(3));
        reducer.step(&json!("gadgets"), &json!(5));
        let features = reducer.complete();

        assert_eq!(features.number("count"), Some(2.0));
        assert_eq!(features.number("correlation"), None);
    }
}
