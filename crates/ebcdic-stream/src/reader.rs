//! EBCDIC-to-ASCII translating reader.

use std::io::{self, Read};

use ebcdic_codec::ebcdic_to_ascii_in_place;

/// A reader decorator that translates every byte from EBCDIC to ASCII
/// after reading it from the wrapped source.
///
/// The decorator adds no buffering: each `read` fills the caller's
/// buffer with one delegated read, then translates the filled prefix in
/// place. End-of-stream (a zero-byte read) passes through untouched —
/// the sentinel never goes through the translation table. Errors from
/// the source surface unchanged.
#[derive(Debug)]
pub struct EbcdicToAsciiReader<R: Read> {
    inner: R,
}

impl<R: Read> EbcdicToAsciiReader<R> {
    /// Wrap an input source.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Get a reference to the wrapped source.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Get a mutable reference to the wrapped source.
    ///
    /// Reading from the source directly bypasses translation.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    /// Unwrap, returning the inner source.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Read for EbcdicToAsciiReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        ebcdic_to_ascii_in_place(&mut buf[..n]);
        Ok(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn translates_then_signals_eof() {
        let mut reader = EbcdicToAsciiReader::new(Cursor::new(vec![0xC1, 0xC2, 0xC3]));

        let mut buf = [0u8; 8];
        let n = reader.read(&mut buf).unwrap();
        assert_eq!(&buf[..n], b"ABC");

        // Subsequent read is end-of-stream, untouched by the table.
        assert_eq!(reader.read(&mut buf).unwrap(), 0);
    }

    #[test]
    fn single_byte_reads() {
        let mut reader = EbcdicToAsciiReader::new(Cursor::new(vec![0xC1, 0xF0, 0x40]));
        let mut byte = [0u8; 1];
        for expected in [b'A', b'0', b' '] {
            assert_eq!(reader.read(&mut byte).unwrap(), 1);
            assert_eq!(byte[0], expected);
        }
        assert_eq!(reader.read(&mut byte).unwrap(), 0);
    }

    #[test]
    fn read_to_end_translates_everything() {
        let ebcdic = vec![0xC8, 0xC5, 0xD3, 0xD3, 0xD6, 0x40, 0xF1, 0xF2, 0xF3];
        let mut reader = EbcdicToAsciiReader::new(Cursor::new(ebcdic));

        let mut out = Vec::new();
        reader.read_to_end(&mut out).unwrap();
        assert_eq!(out, b"HELLO 123");
    }

    #[test]
    fn source_error_surfaces_unchanged() {
        struct FailingSource;

        impl Read for FailingSource {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::ConnectionReset, "source gone"))
            }
        }

        let mut reader = EbcdicToAsciiReader::new(FailingSource);
        let mut buf = [0u8; 4];
        assert_eq!(
            reader.read(&mut buf).unwrap_err().kind(),
            io::ErrorKind::ConnectionReset
        );
    }
}
