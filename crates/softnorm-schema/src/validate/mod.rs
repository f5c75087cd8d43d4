mod fallback;
mod naming;

use crate::{SchemaError, error::ErrorTree, node::EntitySchema};

///
/// validate_schema
/// Validate an entity declaration, collecting issues by route.
///
/// Validation is non-failing at the traversal level. All issues are
/// collected and returned together so a bad declaration reports every
/// problem at once.
///
pub fn validate_schema(schema: &EntitySchema) -> Result<(), SchemaError> {
    let mut errs = ErrorTree::new();

    naming::validate_naming(schema, &mut errs);
    fallback::validate_fallbacks(schema, &mut errs);

    errs.result().map_err(|tree| SchemaError::Invalid {
        ident: schema.ident,
        tree,
    })
}

///
/// TESTS
///
