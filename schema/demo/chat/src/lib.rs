//! Demo chat entity schemas and seed raw records, consumed by scenario
//! tests. Field idents mirror the raw JSON keys the upstream app emits.

pub mod seed;

use softnorm_schema::{
    node::{EntitySchema, Fallback, Field, FieldList},
    types::FieldKind,
};

///
/// Contact
///

pub static CONTACT: EntitySchema = EntitySchema {
    ident: "contact",
    fields: FieldList {
        fields: &[
            Field {
                ident: "id",
                kind: FieldKind::Text,
                fallback: Fallback::GeneratedId,
            },
            Field {
                ident: "name",
                kind: FieldKind::Text,
                fallback: Fallback::Text("Unknown"),
            },
            Field {
                ident: "status",
                kind: FieldKind::Text,
                fallback: Fallback::Text("Last seen recently"),
            },
            Field {
                ident: "online",
                kind: FieldKind::Bool,
                fallback: Fallback::Bool(false),
            },
            Field {
                ident: "notifications",
                kind: FieldKind::Bool,
                fallback: Fallback::Bool(false),
            },
            Field {
                ident: "lastMessageData",
                kind: FieldKind::Number,
                fallback: Fallback::Number(0.0),
            },
        ],
    },
};

///
/// History
///

pub static HISTORY: EntitySchema = EntitySchema {
    ident: "history",
    fields: FieldList {
        fields: &[Field {
            ident: "id",
            kind: FieldKind::Text,
            fallback: Fallback::GeneratedId,
        }],
    },
};

///
/// Message
///

pub static MESSAGE: EntitySchema = EntitySchema {
    ident: "message",
    fields: FieldList {
        fields: &[
            Field {
                ident: "id",
                kind: FieldKind::Text,
                fallback: Fallback::GeneratedId,
            },
            Field {
                ident: "body",
                kind: FieldKind::Text,
                fallback: Fallback::Text(""),
            },
            Field {
                ident: "outgoing",
                kind: FieldKind::Bool,
                fallback: Fallback::Bool(false),
            },
            Field {
                ident: "timestamp",
                kind: FieldKind::Number,
                fallback: Fallback::Number(0.0),
            },
        ],
    },
};

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_schemas_validate() {
        CONTACT.validate().unwrap();
        HISTORY.validate().unwrap();
        MESSAGE.validate().unwrap();
    }
}
