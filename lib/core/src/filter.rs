// Predicate evaluation for segment definitions
use crate::dataset::Row;
use crate::field::Field;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A segment's stored predicate, evaluated row by row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterCondition {
    Equals { field: String, value: Value },
    NotEquals { field: String, value: Value },
    GreaterThan { field: String, value: f64 },
    LessThan { field: String, value: f64 },
    GreaterEqual { field: String, value: f64 },
    LessEqual { field: String, value: f64 },
    Contains { field: String, value: String },
    And(Vec<FilterCondition>),
    Or(Vec<FilterCondition>),
    Not(Box<FilterCondition>),
}

impl FilterCondition {
    fn cell<'a>(cols: &[Field], row: &'a Row, field: &str) -> Option<&'a Value> {
        cols.iter()
            .position(|col| col.name == field)
            .and_then(|index| row.get(index))
    }

    /// Whether the row satisfies the condition. References to columns the
    /// dataset does not have behave like null cells.
    pub fn matches(&self, cols: &[Field], row: &Row) -> bool {
        match self {
            FilterCondition::Equals { field, value } => {
                Self::cell(cols, row, field).map(|v| v == value).unwrap_or(false)
            }
            FilterCondition::NotEquals { field, value } => {
                Self::cell(cols, row, field).map(|v| v != value).unwrap_or(true)
            }
            FilterCondition::GreaterThan { field, value } => Self::cell(cols, row, field)
                .and_then(Value::as_f64)
                .map(|v| v > *value)
                .unwrap_or(false),
            FilterCondition::LessThan { field, value } => Self::cell(cols, row, field)
                .and_then(Value::as_f64)
                .map(|v| v < *value)
                .unwrap_or(false),
            FilterCondition::GreaterEqual { field, value } => Self::cell(cols, row, field)
                .and_then(Value::as_f64)
                .map(|v| v >= *value)
                .unwrap_or(false),
            FilterCondition::LessEqual { field, value } => Self::cell(cols, row, field)
                .and_then(Value::as_f64)
                .map(|v| v <= *value)
                .unwrap_or(false),
            FilterCondition::Contains { field, value } => Self::cell(cols, row, field)
                .and_then(Value::as_str)
                .map(|v| v.contains(value))
                .unwrap_or(false),
            FilterCondition::And(conditions) => {
                conditions.iter().all(|c| c.matches(cols, row))
            }
            FilterCondition::Or(conditions) => {
                conditions.iter().any(|c| c.matches(cols, row))
            }
            FilterCondition::Not(condition) => !condition.matches(cols, row),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_test_cols() -> Vec<Field> {
        vec![Field::new("category"), Field::new("price")]
    }

    #[test]
    fn test_equals_and_ordering() {
        let cols = create_test_cols();
        let row = vec![json!("widgets"), json!(9.99)];

        let eq = FilterCondition::Equals {
            field: "category".to_string(),
            value: json!("widgets"),
        };
        assert!(eq.matches(&cols, &row));

        let gt = FilterCondition::GreaterThan {
            field: "price".to_string(),
            value: 5.0,
        };
        assert!(gt.matches(&cols, &row));

        let lt = FilterCondition::LessThan {
            field: "price".to_string(),
            value: 5.0,
        };
        assert!(!lt.matches(&cols, &row));
    }

    #[test]
    fn test_missing_column_behaves_like_null() {
        let cols = create_test_cols();
        let row = vec![json!("widgets"), json!(9.99)];

        let gt = FilterCondition::GreaterThan {
            field: "discount".to_string(),
            value: 0.0,
        };
        assert!(!gt.matches(&cols, &row));

        let ne = FilterCondition::NotEquals {
            field: "discount".to_string(),
            value: json!(1),
        };
        assert!(ne.matches(&cols, &row));
    }

    #[test]
    fn test_boolean_combinators() {
        let cols = create_test_cols();
        let row = vec![json!("widgets"), json!(9.99)];

        let both = FilterCondition::And(vec![
            FilterCondition::Contains {
                field: "category".to_string(),
                value: "wid".to_string(),
            },
            FilterCondition::LessEqual {
                field: "price".to_string(),
                value: 9.99,
            },
        ]);
        assert!(both.matches(&cols, &row));

        let negated = FilterCondition::Not(Box::new(both));
        assert!(!negated.matches(&cols, &row));

        let either = FilterCondition::Or(vec![
            FilterCondition::Equals {
                field: "category".to_string(),
                value: json!("gadgets"),
            },
            FilterCondition::GreaterEqual {
                field: "price".to_string(),
                value: 9.0,
            },
        ]);
        assert!(either.matches(&cols, &row));
    }
}
