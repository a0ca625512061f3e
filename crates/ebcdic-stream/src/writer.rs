//! ASCII-to-EBCDIC translating writer.

use std::io::{self, Write};

use ebcdic_codec::ascii_to_ebcdic;

/// Translation scratch size; bounds the stack buffer per `write` call.
const CHUNK: usize = 512;

/// A writer decorator that translates every byte from ASCII to EBCDIC
/// before forwarding it to the wrapped sink.
///
/// The decorator adds no buffering of its own: each `write` performs one
/// table lookup per byte and a single delegated write, and `flush` goes
/// straight through to the sink. Errors from the sink surface unchanged.
/// Dropping the writer drops (and thereby closes) the wrapped sink.
#[derive(Debug)]
pub struct AsciiToEbcdicWriter<W: Write> {
    inner: W,
}

impl<W: Write> AsciiToEbcdicWriter<W> {
    /// Wrap an output sink.
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Get a reference to the wrapped sink.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Get a mutable reference to the wrapped sink.
    ///
    /// Writing to the sink directly bypasses translation.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Unwrap, returning the inner sink.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for AsciiToEbcdicWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        // Translate a bounded prefix into stack scratch and forward it
        // with one inner write. Translation is one-to-one, so the inner
        // count is also the count of input bytes consumed.
        let len = buf.len().min(CHUNK);
        let mut scratch = [0u8; CHUNK];
        for (dst, &src) in scratch[..len].iter_mut().zip(buf) {
            *dst = ascii_to_ebcdic(src);
        }
        self.inner.write(&scratch[..len])
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sink that records written bytes and counts flushes.
    #[derive(Debug, Default)]
    struct RecordingSink {
        data: Vec<u8>,
        flushes: usize,
    }

    impl Write for RecordingSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.data.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    #[test]
    fn translates_abc_and_delegates_flush() {
        let mut writer = AsciiToEbcdicWriter::new(RecordingSink::default());
        writer.write_all(b"ABC").unwrap();
        writer.flush().unwrap();

        let sink = writer.into_inner();
        assert_eq!(sink.data, vec![0xC1, 0xC2, 0xC3]);
        assert_eq!(sink.flushes, 1);
    }

    #[test]
    fn write_all_crosses_chunk_boundary() {
        let input = vec![b'A'; CHUNK * 2 + 17];
        let mut writer = AsciiToEbcdicWriter::new(Vec::new());
        writer.write_all(&input).unwrap();

        let out = writer.into_inner();
        assert_eq!(out.len(), input.len());
        assert!(out.iter().all(|&b| b == 0xC1));
    }

    #[test]
    fn empty_write_forwards_nothing() {
        let mut writer = AsciiToEbcdicWriter::new(RecordingSink::default());
        assert_eq!(writer.write(&[]).unwrap(), 0);
        assert!(writer.get_ref().data.is_empty());
    }

    #[test]
    fn sink_error_surfaces_unchanged() {
        struct FailingSink;

        impl Write for FailingSink {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink gone"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink gone"))
            }
        }

        let mut writer = AsciiToEbcdicWriter::new(FailingSink);
        assert_eq!(
            writer.write(b"x").unwrap_err().kind(),
            io::ErrorKind::BrokenPipe
        );
        assert_eq!(writer.flush().unwrap_err().kind(), io::ErrorKind::BrokenPipe);
    }
}
