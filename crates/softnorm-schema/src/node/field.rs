use crate::types::FieldKind;
use serde::Serialize;

///
/// FieldList
///

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FieldList {
    pub fields: &'static [Field],
}

impl FieldList {
    // get
    #[must_use]
    pub fn get(&self, ident: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.ident == ident)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<'a> IntoIterator for &'a FieldList {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

///
/// Field
///

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Field {
    pub ident: &'static str,
    pub kind: FieldKind,
    pub fallback: Fallback,
}

///
/// Fallback
///
/// The value substituted when a source field is missing or fails its kind
/// check. `GeneratedId` synthesizes a fresh process-unique text value at
/// normalization time instead of carrying a static default.
///

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[remain::sorted]
pub enum Fallback {
    Bool(bool),
    GeneratedId,
    Number(f64),
    Text(&'static str),
}

impl Fallback {
    /// The kind of value this fallback produces.
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        match self {
            Self::Bool(_) => FieldKind::Bool,
            Self::GeneratedId | Self::Text(_) => FieldKind::Text,
            Self::Number(_) => FieldKind::Number,
        }
    }
}
