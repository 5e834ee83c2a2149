//! Record accessor and the fixed-width field types it exposes.

use std::cmp::Ordering;
use std::fmt;

use super::format::*;

/// Six-digit search prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Prefix([u8; PREFIX_SIZE]);

impl Prefix {
    /// Wrap raw prefix bytes.
    pub const fn new(bytes: [u8; PREFIX_SIZE]) -> Self {
        Self(bytes)
    }

    /// Raw prefix bytes.
    pub fn as_bytes(&self) -> &[u8; PREFIX_SIZE] {
        &self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

/// Copy of a 25-byte payload taken from a matching record.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Payload([u8; PAYLOAD_SIZE]);

impl Payload {
    /// Copy the payload field out of a slot's payload bytes.
    ///
    /// `bytes` must be exactly [`PAYLOAD_SIZE`] long.
    pub fn from_slice(bytes: &[u8]) -> Self {
        let mut buf = [0u8; PAYLOAD_SIZE];
        buf.copy_from_slice(bytes);
        Self(buf)
    }

    /// The full fixed-width payload, padding included.
    pub fn as_bytes(&self) -> &[u8; PAYLOAD_SIZE] {
        &self.0
    }

    /// The payload with its trailing padding removed.
    pub fn trimmed(&self) -> &[u8] {
        trim_padding(&self.0)
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Payload")
            .field(&String::from_utf8_lossy(&self.0))
            .finish()
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.trimmed()))
    }
}

/// Strip trailing spaces and newlines from a payload field.
///
/// The field is treated as terminated at its first NUL byte, if any.
pub fn trim_padding(field: &[u8]) -> &[u8] {
    let field = match field.iter().position(|&b| b == 0) {
        Some(nul) => &field[..nul],
        None => field,
    };
    let end = field
        .iter()
        .rposition(|&b| b != PAD && b != b'\n')
        .map_or(0, |i| i + 1);
    &field[..end]
}

/// View of one 32-byte slot within backing content.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    bytes: &'a [u8],
}

impl<'a> Record<'a> {
    /// Record at `index` in `content`.
    ///
    /// Callers bound `index` by [`record_count`]; an index past the last
    /// whole slot panics.
    #[inline]
    pub fn at(content: &'a [u8], index: usize) -> Self {
        let offset = index * RECORD_SIZE;
        Self {
            bytes: &content[offset..offset + RECORD_SIZE],
        }
    }

    /// The 6-byte prefix field.
    #[inline]
    pub fn prefix(&self) -> &'a [u8] {
        &self.bytes[..PREFIX_SIZE]
    }

    /// The 25-byte payload field.
    #[inline]
    pub fn payload(&self) -> &'a [u8] {
        &self.bytes[PAYLOAD_OFFSET..SEPARATOR_OFFSET]
    }

    /// The reserved separator byte.
    #[inline]
    pub fn separator(&self) -> u8 {
        self.bytes[SEPARATOR_OFFSET]
    }

    /// Compare this record's prefix with `target`.
    ///
    /// Plain byte comparison over exactly six bytes; NUL bytes are compared
    /// like any other value.
    #[inline]
    pub fn compare_prefix(&self, target: &Prefix) -> Ordering {
        self.prefix().cmp(&target.as_bytes()[..])
    }

    /// Copy the payload out of the slot.
    pub fn to_payload(&self) -> Payload {
        Payload::from_slice(self.payload())
    }
}

/// Iterate over every whole record in `content`, in file order.
pub fn records(content: &[u8]) -> impl Iterator<Item = Record<'_>> {
    content
        .chunks_exact(RECORD_SIZE)
        .map(|bytes| Record { bytes })
}
