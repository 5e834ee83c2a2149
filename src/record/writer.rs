//! Record file writer.

use super::format::*;
use super::slot::Prefix;
use crate::{Error, Result};

/// Builds a sorted fixed-width record file.
#[derive(Debug, Default)]
pub struct RecordWriter {
    entries: Vec<(Prefix, Vec<u8>)>,
}

impl RecordWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries added so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries have been added.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add a prefix/location pair.
    ///
    /// The prefix must be six ASCII digits and the location at most
    /// [`PAYLOAD_SIZE`] bytes.
    pub fn add(&mut self, prefix: &str, location: &str) -> Result<()> {
        let prefix = parse_prefix(prefix)?;
        if location.len() > PAYLOAD_SIZE {
            return Err(Error::InvalidEntry(format!(
                "location is {} bytes, at most {} allowed",
                location.len(),
                PAYLOAD_SIZE
            )));
        }
        self.entries.push((prefix, location.as_bytes().to_vec()));
        Ok(())
    }

    /// Serialize all entries sorted ascending by prefix.
    ///
    /// Entries with equal prefixes keep their insertion order.
    pub fn write(&mut self) -> Vec<u8> {
        self.entries.sort_by(|a, b| a.0.cmp(&b.0));
        self.to_bytes()
    }

    /// Serialize all entries in insertion order, without sorting.
    pub fn write_unsorted(&self) -> Vec<u8> {
        self.to_bytes()
    }

    fn to_bytes(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.entries.len() * RECORD_SIZE);
        for (prefix, location) in &self.entries {
            buffer.extend_from_slice(prefix.as_bytes());
            buffer.extend_from_slice(location);
            buffer.resize(buffer.len() + PAYLOAD_SIZE - location.len(), PAD);
            buffer.push(SEPARATOR);
        }
        buffer
    }
}

fn parse_prefix(s: &str) -> Result<Prefix> {
    let bytes = s.as_bytes();
    if bytes.len() != PREFIX_SIZE || !bytes.iter().all(u8::is_ascii_digit) {
        return Err(Error::InvalidEntry(format!(
            "prefix must be {} ASCII digits: {:?}",
            PREFIX_SIZE, s
        )));
    }
    let mut buf = [0u8; PREFIX_SIZE];
    buf.copy_from_slice(bytes);
    Ok(Prefix::new(buf))
}
