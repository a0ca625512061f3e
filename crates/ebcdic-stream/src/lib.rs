//! Transparent ASCII/EBCDIC transcoding over `std::io` streams.
//!
//! Two symmetric decorators, built on the fixed translation table in
//! `ebcdic-codec`:
//!
//! - [`AsciiToEbcdicWriter`] translates bytes ASCII to EBCDIC on the
//!   write path before forwarding them to the wrapped sink.
//! - [`EbcdicToAsciiReader`] translates bytes EBCDIC to ASCII on the
//!   read path after reading them from the wrapped source.
//!
//! Both take exclusive ownership of the wrapped stream, delegate `flush`
//! verbatim, propagate I/O errors unchanged, and close the stream by
//! dropping it. They compose with any other `Read`/`Write` code.
//!
//! # Example
//!
//! ```rust
//! use std::io::{Read, Write};
//! use ebcdic_stream::{AsciiToEbcdicWriter, EbcdicToAsciiReader};
//!
//! let mut writer = AsciiToEbcdicWriter::new(Vec::new());
//! writer.write_all(b"ABC").unwrap();
//! let ebcdic = writer.into_inner();
//! assert_eq!(ebcdic, [0xC1, 0xC2, 0xC3]);
//!
//! let mut ascii = String::new();
//! EbcdicToAsciiReader::new(&ebcdic[..])
//!     .read_to_string(&mut ascii)
//!     .unwrap();
//! assert_eq!(ascii, "ABC");
//! ```

mod reader;
mod writer;

pub use reader::EbcdicToAsciiReader;
pub use writer::AsciiToEbcdicWriter;
