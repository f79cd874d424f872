//! Bitgen-specific errors
use thiserror::Error;

/// An error that bitgen could end up producing.
///
/// Generating bits never fails once a random source exists, so there are only
/// two families of errors:
/// - setting up the random source
/// - parsing a bit string back from text
#[derive(Clone, Debug, Error, PartialEq)]
pub enum BitgenError {
    /// `{0}` is the message of the underlying entropy error.
    #[error("could not initialize the random source: {0}")]
    Initialization(String),
    #[error("invalid digit {found:?} at position {position}, expected '0' or '1'")]
    InvalidDigit { position: usize, found: char },
}
