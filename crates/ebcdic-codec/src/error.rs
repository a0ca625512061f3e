//! Transcoding error types.

use thiserror::Error;

/// Errors produced when transcoding strings to EBCDIC.
///
/// Byte and buffer conversions are total functions and never fail; only
/// string encoding can reject input, for characters outside the Latin-1
/// range the fixed table covers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TranscodeError {
    /// Character has no slot in the 256-entry translation table.
    #[error("character '{ch}' at position {position} cannot be encoded in EBCDIC")]
    Unmappable {
        /// The offending character.
        ch: char,
        /// Character index within the input string.
        position: usize,
    },
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, TranscodeError>;
