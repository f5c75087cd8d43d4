mod entity;
mod field;

pub use entity::EntitySchema;
pub use field::{Fallback, Field, FieldList};
