//! Column descriptors
//!
//! A [`Field`] describes one column of a dataset: its name, the analytical
//! role it plays in a query result, and the flags that exclude it from
//! aggregation. Two fields compare equal structurally, which is what the
//! column aligner matches on.

use serde::{Deserialize, Serialize};

/// Analytical role of a column in a query result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldRole {
    /// No declared role
    #[default]
    None,
    /// The column holds an aggregated metric
    Aggregation,
    /// The column holds a grouping dimension
    Breakout,
}

/// Descriptor for a single dataset column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,

    #[serde(default)]
    pub role: FieldRole,

    /// Remapped columns mirror another column's values under a display mapping
    #[serde(default)]
    pub remapped: bool,

    #[serde(default)]
    pub primary_key: bool,
}

impl Field {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: FieldRole::None,
            remapped: false,
            primary_key: false,
        }
    }

    pub fn with_role(mut self, role: FieldRole) -> Self {
        self.role = role;
        self
    }

    /// Whether this column takes part in per-column aggregation.
    ///
    /// Remapped and primary-key columns carry no distributional information
    /// of their own and are skipped.
    pub fn eligible(&self) -> bool {
        !self.remapped && !self.primary_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_role_is_none() {
        let field = Field::new("price");
        assert_eq!(field.role, FieldRole::None);
        assert!(field.eligible());
    }

    #[test]
    fn test_remapped_and_primary_key_are_ineligible() {
        let mut field = Field::new("id");
        field.primary_key = true;
        assert!(!field.eligible());

        let mut field = Field::new("category");
        field.remapped = true;
        assert!(!field.eligible());
    }

    #[test]
    fn test_structural_equality() {
        let a = Field::new("total").with_role(FieldRole::Aggregation);
        let b = Field::new("total").with_role(FieldRole::Aggregation);
        assert_eq!(a, b);

        let c = Field::new("total").with_role(FieldRole::Breakout);
        assert_ne!(a, c);
    }

    #[test]
    fn test_serde_defaults() {
        let field: Field = serde_json::from_str(r#"{"name": "price"}"#).unwrap();
        assert_eq!(field, Field::new("price"));
    }
}
