use serde::{Serialize, Serializer, ser::SerializeMap};
use softnorm_schema::types::FieldKind;

///
/// FieldValue
///
/// One normalized scalar. The variant always matches the schema kind the
/// value was validated against.
///

#[derive(Clone, Debug, PartialEq)]
#[remain::sorted]
pub enum FieldValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl FieldValue {
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        match self {
            Self::Bool(_) => FieldKind::Bool,
            Self::Number(_) => FieldKind::Number,
            Self::Text(_) => FieldKind::Text,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

// Display layers want plain scalars, not tagged variants.
impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Number(n) => serializer.serialize_f64(*n),
            Self::Text(s) => serializer.serialize_str(s),
        }
    }
}

///
/// Record
///
/// Schema-shaped output: exactly the declared fields, in declaration
/// order. Constructed fresh on every normalization call and never
/// mutated afterwards.
///

#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    ident: &'static str,
    fields: Vec<(&'static str, FieldValue)>,
}

impl Record {
    pub(crate) const fn new(ident: &'static str, fields: Vec<(&'static str, FieldValue)>) -> Self {
        Self { ident, fields }
    }

    /// The entity ident of the schema this record was shaped by.
    #[must_use]
    pub const fn ident(&self) -> &'static str {
        self.ident
    }

    // get
    #[must_use]
    pub fn get(&self, ident: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(field, _)| *field == ident)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> {
        self.fields.iter().map(|(ident, value)| (*ident, value))
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

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (ident, value) in &self.fields {
            map.serialize_entry(ident, value)?;
        }

        map.end()
    }
}
