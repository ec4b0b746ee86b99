//! Attribute-field reconciliation.
//!
//! The same semantic field (e.g. the county name) is published under
//! different names across dataset versions and boundary providers, so callers
//! pass the known aliases in preference order.

use serde_json::Value;

use crate::models::BoundaryMatch;

/// Return the value of the first candidate key that is present and usable.
///
/// Null and blank/whitespace-only string values are skipped. Non-string
/// scalars (the layers store some fields as numbers) count as present and are
/// rendered as text.
pub fn first_non_empty(attrs: Option<&BoundaryMatch>, candidates: &[&str]) -> Option<String> {
    let attrs = attrs?;
    for key in candidates {
        match attrs.get(*key) {
            Some(Value::String(s)) if !s.trim().is_empty() => return Some(s.clone()),
            Some(Value::Null) | Some(Value::String(_)) | None => continue,
            Some(other) => return Some(other.to_string()),
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attrs(v: serde_json::Value) -> BoundaryMatch {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn test_fallback_key_used_when_primary_absent() {
        let a = attrs(json!({"POLYGON_NM": "Alameda"}));
        assert_eq!(
            first_non_empty(Some(&a), &["County", "POLYGON_NM"]),
            Some("Alameda".to_string())
        );
    }

    #[test]
    fn test_first_match_wins() {
        let a = attrs(json!({"County": "Kern", "POLYGON_NM": "X"}));
        assert_eq!(
            first_non_empty(Some(&a), &["County", "POLYGON_NM"]),
            Some("Kern".to_string())
        );
    }

    #[test]
    fn test_blank_value_skipped() {
        let a = attrs(json!({"County": "", "POLYGON_NM": "Placer"}));
        assert_eq!(
            first_non_empty(Some(&a), &["County", "POLYGON_NM"]),
            Some("Placer".to_string())
        );
    }

    #[test]
    fn test_whitespace_only_value_skipped() {
        let a = attrs(json!({"County": "   ", "POLYGON_NM": "Inyo"}));
        assert_eq!(
            first_non_empty(Some(&a), &["County", "POLYGON_NM"]),
            Some("Inyo".to_string())
        );
    }

    #[test]
    fn test_null_value_skipped() {
        let a = attrs(json!({"County": null, "POLYGON_NM": "Modoc"}));
        assert_eq!(
            first_non_empty(Some(&a), &["County", "POLYGON_NM"]),
            Some("Modoc".to_string())
        );
    }

    #[test]
    fn test_numeric_value_rendered_as_text() {
        let a = attrs(json!({"FIPS": 6037}));
        assert_eq!(first_non_empty(Some(&a), &["FIPS"]), Some("6037".to_string()));
    }

    #[test]
    fn test_absent_attributes() {
        assert_eq!(first_non_empty(None, &["County"]), None);
    }

    #[test]
    fn test_no_candidate_matches() {
        let a = attrs(json!({"OTHER": "value"}));
        assert_eq!(first_non_empty(Some(&a), &["County", "POLYGON_NM"]), None);
    }
}
