//! Core runtime for softnorm: raw-value coercion, field validation, entity
//! and batch normalization, and the fallback identifier generator.

pub mod coerce;
pub mod ident;
pub mod normalize;
pub mod record;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// The id generator and coercion internals are not re-exported here.
///

pub mod prelude {
    pub use crate::{
        normalize::{normalize, normalize_all},
        record::{FieldValue, Record},
    };
    pub use softnorm_schema::{
        node::{EntitySchema, Fallback, Field, FieldList},
        types::FieldKind,
    };
}
