use crate::{SchemaError, node::FieldList};
use serde::Serialize;

///
/// EntitySchema
///
/// Declarative target shape for one entity kind. Declared once as a
/// static and shared by every normalization call site.
///

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EntitySchema {
    pub ident: &'static str,
    pub fields: FieldList,
}

impl EntitySchema {
    /// Run declaration-time validation, collecting every issue.
    pub fn validate(&self) -> Result<(), SchemaError> {
        crate::validate::validate_schema(self)
    }
}
