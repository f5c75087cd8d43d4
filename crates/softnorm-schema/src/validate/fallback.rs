use crate::{err, error::ErrorTree, node::{EntitySchema, Fallback}};

pub(crate) fn validate_fallbacks(schema: &EntitySchema, errs: &mut ErrorTree) {
    for field in schema.fields.iter() {
        let route = format!("{}.{}", schema.ident, field.ident);

        if field.fallback.kind() != field.kind {
            err!(
                errs,
                route,
                "fallback {:?} does not match field kind {}",
                field.fallback,
                field.kind
            );
            continue;
        }

        // NaN/inf fallbacks would leak non-finite numbers into records that
        // serializers cannot represent.
        if let Fallback::Number(n) = field.fallback
            && !n.is_finite()
        {
            err!(errs, route, "numeric fallback must be finite, got {n}");
        }
    }
}
