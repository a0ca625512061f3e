//! Bidirectional ASCII/EBCDIC transcoding with a fixed translation table.
//!
//! This crate owns the 256-entry forward mapping (ASCII to EBCDIC, the
//! classic CP037-style interchange table) and its derived inverse, and
//! exposes single-byte, buffer, and string conversions in both
//! directions. Streaming decorators over `std::io` live in the
//! companion `ebcdic-stream` crate.
//!
//! # Example
//!
//! ```rust
//! use ebcdic_codec::{ascii_to_ebcdic_bytes, ebcdic_to_ascii_bytes};
//!
//! let ebcdic = ascii_to_ebcdic_bytes(b"HELLO");
//! assert_eq!(ebcdic, [0xC8, 0xC5, 0xD3, 0xD3, 0xD6]);
//! assert_eq!(ebcdic_to_ascii_bytes(&ebcdic), b"HELLO");
//! ```

pub mod convert;
pub mod error;
pub mod tables;

pub use convert::{
    ascii_to_ebcdic, ascii_to_ebcdic_bytes, ascii_to_ebcdic_in_place, decode, ebcdic_to_ascii,
    ebcdic_to_ascii_bytes, ebcdic_to_ascii_in_place, encode,
};
pub use error::{Result, TranscodeError};
pub use tables::{ASCII_TO_EBCDIC, EBCDIC_TO_ASCII};
