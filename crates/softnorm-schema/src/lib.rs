//! Schema AST for softnorm: field kinds, fallbacks, and entity declarations,
//! plus the declaration-time validation that keeps them honest.

pub mod error;
pub mod node;
pub mod types;
pub mod validate;

use crate::error::ErrorTree;
use thiserror::Error as ThisError;

/// Maximum length for entity schema identifiers.
pub const MAX_ENTITY_NAME_LEN: usize = 64;

/// Maximum length for field schema identifiers.
pub const MAX_FIELD_NAME_LEN: usize = 64;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        SchemaError,
        err,
        error::ErrorTree,
        node::{EntitySchema, Fallback, Field, FieldList},
        types::FieldKind,
    };
    pub use serde::{Deserialize, Serialize};
}

///
/// SchemaError
///
/// Declaration-time failure. Never raised during normalization; a schema
/// either validates once at startup or is rejected with every issue listed.
///

#[derive(Debug, ThisError)]
pub enum SchemaError {
    #[error("schema '{ident}' failed validation: {tree}")]
    Invalid {
        ident: &'static str,
        tree: ErrorTree,
    },
}
