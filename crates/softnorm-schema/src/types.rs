use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// FieldKind
///
/// The three primitive kinds a normalized field can carry. Numbers are
/// always `f64`; the upstream data source has no other numeric type.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum FieldKind {
    Bool,
    Number,
    Text,
}
