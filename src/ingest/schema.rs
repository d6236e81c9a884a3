//! Fuzzy header resolution
//!
//! Column names in uploaded datasets vary (`x`, `X_coord`, `ore_type`,
//! `Material Type`, ...). Each semantic field owns a list of exact aliases
//! and a list of substring patterns; matching is case-insensitive.
//!
//! Resolution runs in two passes so that a loose pattern never steals a
//! column another field names exactly:
//! 1. Exact alias matches
//! 2. Substring matches, most specific field first
//!
//! A column claimed by one field is never considered for another, which is
//! what keeps `ore_type` from being read as the y column.

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// Semantic field of an ingested row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    X,
    Y,
    Material,
    Hardness,
    Value,
}

/// Substring pass order: fields with long, distinctive patterns go first
const RESOLUTION_ORDER: [Field; 5] = [
    Field::Hardness,
    Field::Value,
    Field::Material,
    Field::X,
    Field::Y,
];

impl Field {
    pub const ALL: [Field; 5] = [
        Field::X,
        Field::Y,
        Field::Material,
        Field::Hardness,
        Field::Value,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::X => "x",
            Field::Y => "y",
            Field::Material => "material",
            Field::Hardness => "hardness",
            Field::Value => "value",
        }
    }

    /// Whether ingestion fails without this field
    pub fn is_required(&self) -> bool {
        matches!(self, Field::X | Field::Y | Field::Material)
    }

    /// Lowercase header names that match this field exactly
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Field::X => &["x"],
            Field::Y => &["y"],
            Field::Material => &["material", "ore", "ore_type", "type", "material_type"],
            Field::Hardness => &["hardness"],
            Field::Value => &["value"],
        }
    }

    /// Lowercase substrings that make a header a candidate for this field
    pub fn patterns(&self) -> &'static [&'static str] {
        match self {
            Field::X => &["x"],
            Field::Y => &["y"],
            Field::Material => &["ore", "material", "type"],
            Field::Hardness => &["hardness"],
            Field::Value => &["value"],
        }
    }
}

/// Column index for each semantic field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub x: usize,
    pub y: usize,
    pub material: usize,
    pub hardness: Option<usize>,
    pub value: Option<usize>,
}

/// Resolve header names to semantic columns
pub fn resolve_columns<S: AsRef<str>>(headers: &[S]) -> Result<ColumnMap, SchemaError> {
    let lowered: Vec<String> = headers
        .iter()
        .map(|h| h.as_ref().trim().to_lowercase())
        .collect();
    let mut claimed = vec![false; lowered.len()];
    let mut resolved: Vec<(Field, usize)> = Vec::with_capacity(Field::ALL.len());

    for field in RESOLUTION_ORDER {
        if let Some(i) = claim(&lowered, &mut claimed, |h| field.aliases().iter().any(|a| *a == h)) {
            resolved.push((field, i));
        }
    }

    for field in RESOLUTION_ORDER {
        if resolved.iter().any(|(f, _)| *f == field) {
            continue;
        }
        let patterns = field.patterns();
        if let Some(i) = claim(&lowered, &mut claimed, |h| patterns.iter().any(|p| h.contains(*p))) {
            resolved.push((field, i));
        }
    }

    let column = |field: Field| resolved.iter().find(|(f, _)| *f == field).map(|(_, i)| *i);

    match (column(Field::X), column(Field::Y), column(Field::Material)) {
        (Some(x), Some(y), Some(material)) => Ok(ColumnMap {
            x,
            y,
            material,
            hardness: column(Field::Hardness),
            value: column(Field::Value),
        }),
        _ => Err(SchemaError {
            found: headers.iter().map(|h| h.as_ref().trim().to_string()).collect(),
            missing: Field::ALL
                .into_iter()
                .filter(|f| f.is_required() && column(*f).is_none())
                .collect(),
        }),
    }
}

/// Claim the first unclaimed column accepted by `matches`
fn claim(lowered: &[String], claimed: &mut [bool], matches: impl Fn(&str) -> bool) -> Option<usize> {
    let index = lowered
        .iter()
        .enumerate()
        .position(|(i, h)| !claimed[i] && matches(h.as_str()))?;
    claimed[index] = true;
    Some(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_canonical_headers() {
        let map = resolve_columns(&["x", "y", "ore_type", "hardness", "value"]).unwrap();
        assert_eq!(map.x, 0);
        assert_eq!(map.y, 1);
        assert_eq!(map.material, 2);
        assert_eq!(map.hardness, Some(3));
        assert_eq!(map.value, Some(4));
    }

    #[test]
    fn test_type_column_not_taken_as_y() {
        // "ore_type" contains a 'y' and comes first; it must still be the material
        let map = resolve_columns(&["ore_type", "pos_x", "pos_y"]).unwrap();
        assert_eq!(map.material, 0);
        assert_eq!(map.x, 1);
        assert_eq!(map.y, 2);
    }

    #[test]
    fn test_value_column_not_taken_as_x() {
        let map = resolve_columns(&["max_value", "X", "Y", "Material"]).unwrap();
        assert_eq!(map.value, Some(0));
        assert_eq!(map.x, 1);
        assert_eq!(map.y, 2);
        assert_eq!(map.material, 3);
        assert_eq!(map.hardness, None);
    }

    #[test]
    fn test_case_insensitive_substring_match() {
        let map = resolve_columns(&[" X_Coord ", "Y_COORD", "Material Type", "Rock Hardness"]).unwrap();
        assert_eq!(map.x, 0);
        assert_eq!(map.y, 1);
        assert_eq!(map.material, 2);
        assert_eq!(map.hardness, Some(3));
    }

    #[test]
    fn test_missing_required_reports_found_columns() {
        let err = resolve_columns(&["x", "depth", "grade"]).unwrap_err();
        assert_eq!(err.found, vec!["x", "depth", "grade"]);
        assert_eq!(err.missing, vec![Field::Y, Field::Material]);
    }

    #[test]
    fn test_empty_header_is_schema_error() {
        let err = resolve_columns::<&str>(&[]).unwrap_err();
        assert!(err.found.is_empty());
        assert_eq!(err.missing, vec![Field::X, Field::Y, Field::Material]);
    }
}
