use rand::random;
use std::{
    sync::{LazyLock, Mutex},
    time::{SystemTime, UNIX_EPOCH},
};
use thiserror::Error as ThisError;
use ulid::Ulid;

///
/// GENERATOR is lazily initiated with a Mutex
/// it keeps state so ids produced within one millisecond stay ordered
///

static GENERATOR: LazyLock<Mutex<Generator>> = LazyLock::new(|| Mutex::new(Generator::default()));

///
/// IdentError
///

#[derive(Debug, ThisError)]
pub enum IdentError {
    #[error("monotonic id space exhausted within one millisecond")]
    GeneratorOverflow,
}

/// Generate a ULID using the global monotonic generator.
pub fn generate() -> Result<Ulid, IdentError> {
    let mut generator = GENERATOR.lock().expect("id generator mutex poisoned");

    generator.generate()
}

/// Total variant for the fail-soft fallback path: on overflow, reseed from
/// fresh randomness instead of surfacing an error.
#[must_use]
pub fn fallback_id() -> String {
    generate()
        .unwrap_or_else(|_| Ulid::from_parts(now_millis(), random::<u128>()))
        .to_string()
}

#[allow(clippy::cast_possible_truncation)]
fn now_millis() -> u64 {
    // pre-epoch clocks saturate to zero instead of panicking
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis() as u64)
}

///
/// Generator
///
/// Monotonic within the process: a ULID requested in the same millisecond
/// as the previous one increments it instead of drawing fresh randomness.
/// Not cryptographic; collision resistance is interactive-UI grade only.
///

pub struct Generator {
    previous: Ulid,
}

impl Default for Generator {
    fn default() -> Self {
        Self {
            previous: Ulid::nil(),
        }
    }
}

impl Generator {
    // generate
    /// Monotonic ULID generation; increments within the same millisecond.
    pub fn generate(&mut self) -> Result<Ulid, IdentError> {
        let last_ts = self.previous.timestamp_ms();
        let ts = now_millis();

        // maybe time went backward, or it is the same ms.
        // increment instead of generating a new random so order holds
        if ts <= last_ts {
            if let Some(next) = self.previous.increment() {
                self.previous = next;

                return Ok(self.previous);
            }

            return Err(IdentError::GeneratorOverflow);
        }

        let ulid = Ulid::from_parts(ts, random::<u128>());
        self.previous = ulid;

        Ok(ulid)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_is_monotonic() {
        let mut g = Generator::default();
        let a = g.generate().unwrap();
        let b = g.generate().unwrap();

        assert!(a < b);
    }

    #[test]
    fn string_order_matches_generation_order() {
        let mut g = Generator::default();
        let a = g.generate().unwrap().to_string();
        let b = g.generate().unwrap().to_string();

        // crockford base32 at fixed width sorts lexicographically
        assert_eq!(a.len(), 26);
        assert!(a < b);
    }

    #[test]
    fn fallback_id_is_total_and_fresh() {
        let a = fallback_id();
        let b = fallback_id();

        assert_eq!(a.len(), 26);
        assert_ne!(a, b);
    }
}
