//! Module: coerce
//! Responsibility: raw-value kind checks and the numeric coercion table.
//! Does not own: schema declarations or record assembly.
//! Boundary: consumed by the normalizer; exposed for single-field use.

use crate::{ident, record::FieldValue};
use serde_json::Value;
use softnorm_schema::{node::Fallback, types::FieldKind};

/// Derive a numeric candidate from a raw value, the way the upstream call
/// sites did: coercion first, then the kind check on the candidate.
///
/// `null`, `false`, and the empty/whitespace string deliberately coerce to
/// `0` and count as valid numbers rather than taking the fallback. This is
/// a compatibility quirk of the upstream data contract, kept on purpose.
///
/// Non-finite candidates (a failed parse, or the `"inf"`/`"nan"` spellings
/// the float parser accepts) count as failures; records only ever carry
/// finite numbers.
#[must_use]
pub fn coerce_number(raw: &Value) -> Option<f64> {
    let candidate = match raw {
        Value::Null => Some(0.0),
        Value::Bool(b) => Some(f64::from(u8::from(*b))),
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Some(0.0)
            } else {
                trimmed.parse::<f64>().ok()
            }
        }
        Value::Array(_) | Value::Object(_) => None,
    };

    candidate.filter(|n| n.is_finite())
}

/// Validate one field. `None` means the field was absent from the source
/// record. Total: every input yields a well-typed value, substituting the
/// fallback when the raw value is missing or fails its kind check.
#[must_use]
pub fn validate_field(raw: Option<&Value>, kind: FieldKind, fallback: &Fallback) -> FieldValue {
    candidate(raw, kind).unwrap_or_else(|| produce(fallback))
}

// Text and Bool are strict: the raw value must already be of the right
// runtime type. Only Number coerces first.
fn candidate(raw: Option<&Value>, kind: FieldKind) -> Option<FieldValue> {
    let raw = raw?;

    match kind {
        FieldKind::Bool => raw.as_bool().map(FieldValue::Bool),
        FieldKind::Number => coerce_number(raw).map(FieldValue::Number),
        FieldKind::Text => raw.as_str().map(|s| FieldValue::Text(s.to_string())),
    }
}

/// Materialize a fallback value.
pub(crate) fn produce(fallback: &Fallback) -> FieldValue {
    match fallback {
        Fallback::Bool(b) => FieldValue::Bool(*b),
        Fallback::GeneratedId => FieldValue::Text(ident::fallback_id()),
        Fallback::Number(n) => FieldValue::Number(*n),
        Fallback::Text(s) => FieldValue::Text((*s).to_string()),
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ZERO: Fallback = Fallback::Number(0.0);

    fn number(raw: &Value) -> FieldValue {
        validate_field(Some(raw), FieldKind::Number, &ZERO)
    }

    #[test]
    fn numeric_strings_coerce() {
        assert_eq!(number(&json!("42")), FieldValue::Number(42.0));
        assert_eq!(number(&json!("  3.5 ")), FieldValue::Number(3.5));
        assert_eq!(number(&json!("1e3")), FieldValue::Number(1000.0));
        assert_eq!(number(&json!("-7")), FieldValue::Number(-7.0));
    }

    #[test]
    fn non_numeric_strings_fall_back() {
        assert_eq!(number(&json!("abc")), FieldValue::Number(0.0));
        assert_eq!(number(&json!("42px")), FieldValue::Number(0.0));
    }

    #[test]
    fn null_and_empty_coerce_to_zero() {
        // the documented upstream quirk, preserved
        assert_eq!(number(&Value::Null), FieldValue::Number(0.0));
        assert_eq!(number(&json!("")), FieldValue::Number(0.0));
        assert_eq!(number(&json!("   ")), FieldValue::Number(0.0));
        assert_eq!(number(&json!(false)), FieldValue::Number(0.0));
        assert_eq!(number(&json!(true)), FieldValue::Number(1.0));
    }

    #[test]
    fn non_finite_spellings_fall_back() {
        assert_eq!(number(&json!("inf")), FieldValue::Number(0.0));
        assert_eq!(number(&json!("infinity")), FieldValue::Number(0.0));
        assert_eq!(number(&json!("nan")), FieldValue::Number(0.0));
    }

    #[test]
    fn collections_never_coerce() {
        assert_eq!(number(&json!([])), FieldValue::Number(0.0));
        assert_eq!(number(&json!([5])), FieldValue::Number(0.0));
        assert_eq!(number(&json!({"n": 5})), FieldValue::Number(0.0));
    }

    #[test]
    fn text_and_bool_are_strict() {
        let name = Fallback::Text("Unknown");
        let off = Fallback::Bool(false);

        assert_eq!(
            validate_field(Some(&json!("Bob")), FieldKind::Text, &name),
            FieldValue::Text("Bob".to_string())
        );
        // no stringification of numbers or bools
        assert_eq!(
            validate_field(Some(&json!(5)), FieldKind::Text, &name),
            FieldValue::Text("Unknown".to_string())
        );
        assert_eq!(
            validate_field(Some(&json!(true)), FieldKind::Text, &name),
            FieldValue::Text("Unknown".to_string())
        );

        // no "yes"/"true" parsing for bools
        assert_eq!(
            validate_field(Some(&json!("true")), FieldKind::Bool, &off),
            FieldValue::Bool(false)
        );
        assert_eq!(
            validate_field(Some(&json!(1)), FieldKind::Bool, &off),
            FieldValue::Bool(false)
        );
        assert_eq!(
            validate_field(Some(&json!(true)), FieldKind::Bool, &off),
            FieldValue::Bool(true)
        );
    }

    #[test]
    fn absent_fields_take_the_fallback() {
        assert_eq!(
            validate_field(None, FieldKind::Number, &ZERO),
            FieldValue::Number(0.0)
        );
        assert_eq!(
            validate_field(None, FieldKind::Text, &Fallback::Text("x")),
            FieldValue::Text("x".to_string())
        );
    }

    #[test]
    fn generated_id_fallback_yields_fresh_text() {
        let a = validate_field(None, FieldKind::Text, &Fallback::GeneratedId);
        let b = validate_field(None, FieldKind::Text, &Fallback::GeneratedId);

        let (a, b) = (a.as_text().unwrap().to_string(), b.as_text().unwrap().to_string());
        assert_eq!(a.len(), 26);
        assert_ne!(a, b);
    }
}
