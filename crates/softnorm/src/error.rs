use softnorm_core::ident::IdentError;
use softnorm_schema::SchemaError;
use thiserror::Error as ThisError;

///
/// Error
///
/// Public error type. Normalization itself never fails; the only error
/// surfaces are declaration-time schema validation and direct use of the
/// monotonic id generator.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Ident(#[from] IdentError),

    #[error(transparent)]
    Schema(#[from] SchemaError),
}
