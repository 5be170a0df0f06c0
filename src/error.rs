//! Crate-wide error type for decode failures.
//!
//! Every error is terminal for the call that raised it: a failing decode
//! never returns a partial object. Encoding has no failure path.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Buffer shorter than a declared or minimal length.
    #[error("too short to parse: {0}")]
    TooShortToParse(String),
    /// Structural minimum violated: under-populated routing key, a length
    /// field below its own header size, a mandatory parameter missing, or a
    /// value of the wrong size for its accessor.
    #[error("invalid length: {0}")]
    InvalidLength(String),
    /// Unrecognized parameter tag, a parameter that does not belong to the
    /// message or container being decoded, or a header class/type that does
    /// not match the expected message kind.
    #[error("invalid type: {0}")]
    InvalidType(String),
}
