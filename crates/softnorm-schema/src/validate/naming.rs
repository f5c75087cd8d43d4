use crate::{MAX_ENTITY_NAME_LEN, MAX_FIELD_NAME_LEN, err, error::ErrorTree, node::EntitySchema};
use std::collections::BTreeMap;

pub(crate) fn validate_naming(schema: &EntitySchema, errs: &mut ErrorTree) {
    check_ident(schema.ident, schema.ident, MAX_ENTITY_NAME_LEN, errs);

    let mut seen: BTreeMap<&str, usize> = BTreeMap::new();

    for (pos, field) in schema.fields.iter().enumerate() {
        let route = format!("{}.{}", schema.ident, field.ident);
        check_ident(&route, field.ident, MAX_FIELD_NAME_LEN, errs);

        if let Some(prev) = seen.insert(field.ident, pos) {
            err!(
                errs,
                route,
                "duplicate field ident '{}' at positions {prev} and {pos}",
                field.ident
            );
        }
    }
}

// Idents mirror raw JSON keys, so camelCase is as legal as snake_case.
fn check_ident(route: &str, ident: &str, max_len: usize, errs: &mut ErrorTree) {
    if ident.is_empty() {
        err!(errs, route, "ident must be non-empty");
        return;
    }

    if ident.len() > max_len {
        err!(
            errs,
            route,
            "ident '{ident}' exceeds {max_len} characters"
        );
    }

    let mut chars = ident.chars();
    let head_ok = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    let tail_ok = chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

    if !head_ok || !tail_ok {
        err!(
            errs,
            route,
            "ident '{ident}' must start with a letter or underscore and contain only ASCII alphanumerics or underscores"
        );
    }
}
