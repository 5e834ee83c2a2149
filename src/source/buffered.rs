//! Heap-buffered content for stream inputs.

use std::io::{ErrorKind, Read};

use super::{warn_trailing, ContentSource};
use crate::record::RECORD_SIZE;
use crate::search::SearchMethod;
use crate::{Error, Result};

/// Growable byte buffer that doubles its capacity whenever it fills.
///
/// Only appends are allowed; [`finalize`](Self::finalize) hands the bytes
/// over as an immutable [`BufferedSource`].
#[derive(Debug)]
pub struct StreamBuffer {
    // Zero-filled up to the current capacity; `len` bytes are valid.
    buf: Vec<u8>,
    len: usize,
}

impl StreamBuffer {
    /// Allocate a buffer of `initial` bytes (at least one record).
    pub fn with_capacity(initial: usize) -> Result<Self> {
        let mut buffer = Self {
            buf: Vec::new(),
            len: 0,
        };
        buffer.grow_to(initial.max(RECORD_SIZE))?;
        Ok(buffer)
    }

    /// Bytes appended so far.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been appended.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Append `bytes`, doubling capacity as often as needed.
    pub fn append(&mut self, bytes: &[u8]) -> Result<()> {
        let needed = self.len.checked_add(bytes.len()).ok_or(Error::Alloc)?;
        while self.capacity() < needed {
            self.grow()?;
        }
        self.buf[self.len..needed].copy_from_slice(bytes);
        self.len = needed;
        Ok(())
    }

    /// Read `reader` to exhaustion straight into the buffer.
    pub fn fill_from<R: Read>(mut self, mut reader: R) -> Result<Self> {
        loop {
            if self.len == self.capacity() {
                self.grow()?;
            }
            match reader.read(&mut self.buf[self.len..]) {
                Ok(0) => return Ok(self),
                Ok(n) => self.len += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(Error::Read(e)),
            }
        }
    }

    /// Freeze the appended bytes.
    pub fn finalize(mut self) -> BufferedSource {
        self.buf.truncate(self.len);
        warn_trailing(self.len);
        BufferedSource { data: self.buf }
    }

    fn grow(&mut self) -> Result<()> {
        let target = self.capacity().checked_mul(2).ok_or(Error::Alloc)?;
        self.grow_to(target)
    }

    fn grow_to(&mut self, capacity: usize) -> Result<()> {
        let additional = capacity - self.buf.len();
        self.buf
            .try_reserve_exact(additional)
            .map_err(|_| Error::Alloc)?;
        self.buf.resize(capacity, 0);
        log::debug!("stream buffer capacity now {} bytes", capacity);
        Ok(())
    }
}

/// Owned content read from a stream.
#[derive(Debug, Clone)]
pub struct BufferedSource {
    data: Vec<u8>,
}

impl BufferedSource {
    /// Read all of `reader` into a new source.
    pub fn read_from<R: Read>(reader: R, initial_capacity: usize) -> Result<Self> {
        Ok(StreamBuffer::with_capacity(initial_capacity)?
            .fill_from(reader)?
            .finalize())
    }

    /// Give up the underlying buffer.
    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }
}

impl ContentSource for BufferedSource {
    fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    fn default_strategy(&self) -> SearchMethod {
        SearchMethod::Linear
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    /// Hands out at most `chunk` bytes per read, like a pipe.
    struct Trickle<'a> {
        data: &'a [u8],
        chunk: usize,
    }

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.chunk.min(buf.len()).min(self.data.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(ErrorKind::BrokenPipe, "gone"))
        }
    }

    fn pattern(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i % 251) as u8).collect()
    }

    #[test]
    fn test_empty_stream() {
        let source = BufferedSource::read_from(io::empty(), 64).unwrap();
        assert!(source.is_empty());
        assert_eq!(source.record_count(), 0);
        assert_eq!(source.default_strategy(), SearchMethod::Linear);
    }

    #[test]
    fn test_reassembles_across_growth() {
        let data = pattern(10_000);
        let buffer = StreamBuffer::with_capacity(64)
            .unwrap()
            .fill_from(Trickle {
                data: &data,
                chunk: 37,
            })
            .unwrap();
        // 64 -> 128 -> ... -> 16384
        assert_eq!(buffer.capacity(), 16_384);
        let source = buffer.finalize();
        assert_eq!(source.as_bytes(), &data[..]);
    }

    #[test]
    fn test_exact_capacity_input() {
        let data = pattern(128);
        let source = BufferedSource::read_from(Cursor::new(&data), 128).unwrap();
        assert_eq!(source.into_inner(), data);
    }

    #[test]
    fn test_minimum_capacity_is_one_record() {
        let buffer = StreamBuffer::with_capacity(0).unwrap();
        assert_eq!(buffer.capacity(), RECORD_SIZE);
    }

    #[test]
    fn test_append_doubles() {
        let mut buffer = StreamBuffer::with_capacity(32).unwrap();
        buffer.append(&[1u8; 20]).unwrap();
        assert_eq!(buffer.capacity(), 32);
        buffer.append(&[2u8; 20]).unwrap();
        assert_eq!(buffer.capacity(), 64);
        buffer.append(&[3u8; 100]).unwrap();
        assert_eq!(buffer.capacity(), 256);
        assert_eq!(buffer.len(), 140);

        let source = buffer.finalize();
        assert_eq!(&source.as_bytes()[..20], &[1u8; 20]);
        assert_eq!(&source.as_bytes()[20..40], &[2u8; 20]);
        assert_eq!(&source.as_bytes()[40..], &[3u8; 100][..]);
    }

    #[test]
    fn test_read_error() {
        let err = BufferedSource::read_from(Broken, 64).unwrap_err();
        assert!(matches!(err, Error::Read(_)));
    }
}
