//! Deterministic demo record generators. Presentation fixture data only;
//! every third contact is deliberately malformed so scenario tests cover
//! the fallback paths without hand-written edge cases everywhere.

use serde_json::{Value, json};

const NAMES: &[&str] = &["Alice", "Bob", "Carol", "Dave", "Eve", "Mallory"];

const STATUSES: &[&str] = &[
    "online",
    "Last seen recently",
    "Last seen just now",
    "typing...",
];

const BODIES: &[&str] = &[
    "Hey, are you around?",
    "Sent the files over.",
    "Let's catch up tomorrow.",
    "Did you see this?",
    "On my way.",
];

// demo epoch, milliseconds
const EPOCH_MS: u64 = 1_700_000_000_000;

/// Seeded demo contacts. Index `i % 3 == 2` carries wrong-kind values on
/// purpose.
#[must_use]
pub fn demo_contacts(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| {
            if i % 3 == 2 {
                json!({
                    "id": i,
                    "name": (i as u64) * 7,
                    "status": true,
                    "online": "yes",
                    "lastMessageData": format!("{}", (i as u64) * 1000),
                })
            } else {
                json!({
                    "id": format!("contact-{i}"),
                    "name": NAMES[i % NAMES.len()],
                    "status": STATUSES[i % STATUSES.len()],
                    "online": i % 2 == 0,
                    "notifications": i % 5 == 0,
                    "lastMessageData": EPOCH_MS + (i as u64) * 60_000,
                })
            }
        })
        .collect()
}

/// Seeded demo history entries; every fourth entry is missing its id.
#[must_use]
pub fn demo_history(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| {
            if i % 4 == 3 {
                json!({})
            } else {
                json!({ "id": format!("history-{i}") })
            }
        })
        .collect()
}

/// Seeded demo messages alternating direction, one minute apart.
#[must_use]
pub fn demo_messages(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| {
            json!({
                "id": format!("message-{i}"),
                "body": BODIES[i % BODIES.len()],
                "outgoing": i % 2 == 1,
                "timestamp": EPOCH_MS + (i as u64) * 60_000,
            })
        })
        .collect()
}
