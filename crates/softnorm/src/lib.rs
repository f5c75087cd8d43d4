//! ## Crate layout
//! - `core`: runtime coercion, normalization, records, and id generation.
//! - `schema`: schema AST and declaration-time validation.
//!
//! The `prelude` module mirrors the surface a display layer uses: declare
//! an [`schema::node::EntitySchema`] once, validate it at startup, then
//! feed raw `serde_json::Value` records through `normalize`.

pub use softnorm_core as core;
pub use softnorm_schema as schema;

mod error;
pub use error::Error;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::core::{
        coerce::validate_field,
        normalize::{normalize, normalize_all},
        record::{FieldValue, Record},
    };
    pub use crate::schema::{
        node::{EntitySchema, Fallback, Field, FieldList},
        types::FieldKind,
    };
}
