//! Module: normalize
//! Responsibility: record assembly against an entity schema.
//! Does not own: per-field kind checks (see `coerce`) or schema validation.
//! Boundary: the public entry point display layers call.

use crate::{coerce, record::Record};
use serde_json::Value;
use softnorm_schema::node::EntitySchema;

/// Normalize one raw record against a schema.
///
/// Non-object input (null, scalars, arrays) is treated as an empty object:
/// every field takes its fallback and the call still returns a fully
/// shaped record. Fields are independent; the output carries exactly the
/// schema's fields in declaration order.
#[must_use]
pub fn normalize(raw: &Value, schema: &EntitySchema) -> Record {
    let source = raw.as_object();

    let fields = schema
        .fields
        .iter()
        .map(|field| {
            let raw_field = source.and_then(|map| map.get(field.ident));

            (
                field.ident,
                coerce::validate_field(raw_field, field.kind, &field.fallback),
            )
        })
        .collect();

    Record::new(schema.ident, fields)
}

/// Normalize a batch eagerly. Order- and length-preserving; malformed
/// elements are normalized, never dropped.
#[must_use]
pub fn normalize_all(raws: &[Value], schema: &EntitySchema) -> Vec<Record> {
    raws.iter().map(|raw| normalize(raw, schema)).collect()
}

///
/// TESTS
///
