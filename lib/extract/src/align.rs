//! Column alignment
//!
//! A card's relation features are computed over a declared (dimension,
//! metric) pair. [`align`] makes the pair consumable positionally: when the
//! dataset's first two columns already are the pair, rows pass through
//! unchanged; otherwise each row is lazily projected to the cells at the
//! pair's column indices. Either way the rows are walked at most once, when
//! the result is consumed.

use driftx_core::{Error, Field, Result, Row};
use serde_json::Value;

/// Rows viewed through a two-column projection
#[derive(Debug, Clone, Copy)]
pub struct AlignedRows<'a> {
    rows: &'a [Row],
    indices: (usize, usize),
    identity: bool,
}

/// Align `rows` so the two target fields can be consumed positionally.
///
/// Each target resolves to the FIRST column whose descriptor equals it;
/// later structural duplicates never win. A target absent from `cols` is a
/// caller error and surfaces as [`Error::ColumnNotFound`].
pub fn align<'a>(
    fields: (&Field, &Field),
    cols: &[Field],
    rows: &'a [Row],
) -> Result<AlignedRows<'a>> {
    if cols.len() >= 2 && cols[0] == *fields.0 && cols[1] == *fields.1 {
        return Ok(AlignedRows {
            rows,
            indices: (0, 1),
            identity: true,
        });
    }

    let first = position(cols, fields.0)?;
    let second = position(cols, fields.1)?;
    Ok(AlignedRows {
        rows,
        indices: (first, second),
        identity: false,
    })
}

fn position(cols: &[Field], field: &Field) -> Result<usize> {
    cols.iter()
        .position(|col| col == field)
        .ok_or_else(|| Error::ColumnNotFound(field.name.clone()))
}

impl<'a> AlignedRows<'a> {
    /// True when the dataset's leading columns already were the target pair
    /// and rows are passed through unchanged.
    pub fn is_identity(&self) -> bool {
        self.identity
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> AlignedIter<'a> {
        AlignedIter {
            rows: self.rows.iter(),
            indices: self.indices,
        }
    }
}

impl<'a> IntoIterator for AlignedRows<'a> {
    type Item = (&'a Value, &'a Value);
    type IntoIter = AlignedIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct AlignedIter<'a> {
    rows: std::slice::Iter<'a, Row>,
    indices: (usize, usize),
}

impl<'a> Iterator for AlignedIter<'a> {
    type Item = (&'a Value, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        // Rows are positionally aligned with cols; the source owns that invariant.
        self.rows
            .next()
            .map(|row| (&row[self.indices.0], &row[self.indices.1]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use driftx_core::FieldRole;
    use serde_json::json;

    fn breakout(name: &str) -> Field {
        Field::new(name).with_role(FieldRole::Breakout)
    }

    fn aggregation(name: &str) -> Field {
        Field::new(name).with_role(FieldRole::Aggregation)
    }

    #[test]
    fn test_identity_when_leading_columns_match() {
        let cols = vec![breakout("Category"), aggregation("Count")];
        let rows = vec![
            vec![json!("widgets"), json!(7)],
            vec![json!("gadgets"), json!(3)],
        ];

        let aligned = align((&cols[0], &cols[1]), &cols, &rows).unwrap();
        assert!(aligned.is_identity());

        let pairs: Vec<(&Value, &Value)> = aligned.iter().collect();
        assert_eq!(
            pairs,
            vec![
                (&json!("widgets"), &json!(7)),
                (&json!("gadgets"), &json!(3)),
            ]
        );
    }

    #[test]
    fn test_identity_on_empty_rows() {
        let cols = vec![breakout("Category"), aggregation("Count")];
        let aligned = align((&cols[0], &cols[1]), &cols, &[]).unwrap();
        assert!(aligned.is_identity());
        assert!(aligned.is_empty());
        assert_eq!(aligned.iter().count(), 0);
    }

    #[test]
    fn test_projection_reorders_and_preserves_row_order() {
        let cols = vec![Field::new("id"), aggregation("Count"), breakout("Category")];
        let rows = vec![
            vec![json!(1), json!(7), json!("widgets")],
            vec![json!(2), json!(3), json!("gadgets")],
        ];

        let aligned = align((&cols[2], &cols[1]), &cols, &rows).unwrap();
        assert!(!aligned.is_identity());

        let pairs: Vec<(&Value, &Value)> = aligned.iter().collect();
        assert_eq!(
            pairs,
            vec![
                (&json!("widgets"), &json!(7)),
                (&json!("gadgets"), &json!(3)),
            ]
        );
    }

    #[test]
    fn test_first_match_wins_on_structural_duplicates() {
        let dup = breakout("Category");
        let cols = vec![Field::new("id"), dup.clone(), aggregation("Count"), dup.clone()];
        let rows = vec![vec![json!(1), json!("first"), json!(9), json!("second")]];

        let aligned = align((&dup, &cols[2]), &cols, &rows).unwrap();
        let pairs: Vec<(&Value, &Value)> = aligned.iter().collect();
        assert_eq!(pairs, vec![(&json!("first"), &json!(9))]);
    }

    #[test]
    fn test_missing_target_field_is_an_error() {
        let cols = vec![breakout("Category"), aggregation("Count")];
        let missing = aggregation("Sum");

        let result = align((&cols[0], &missing), &cols, &[]);
        assert!(matches!(result, Err(Error::ColumnNotFound(name)) if name == "Sum"));
    }

    #[test]
    fn test_role_mismatch_is_not_identity() {
        // Same names up front, but the first column's role differs from the
        // requested descriptor: structural equality fails, lookup resolves
        // the untagged duplicate further right.
        let cols = vec![Field::new("Category"), aggregation("Count"), breakout("Category")];
        let rows = vec![vec![json!("plain"), json!(4), json!("tagged")]];

        let aligned = align((&breakout("Category"), &aggregation("Count")), &cols, &rows).unwrap();
        assert!(!aligned.is_identity());
        let pairs: Vec<(&Value, &Value)> = aligned.iter().collect();
        assert_eq!(pairs, vec![(&json!("tagged"), &json!(4))]);
    }
}
