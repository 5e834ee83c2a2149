//! Plain-text location list parser.
//!
//! One entry per line: a six-digit prefix, a separator (tab, comma or
//! whitespace), then the location. Blank lines and `#` comments are skipped.
//!
//! ```text
//! # prefix  location
//! 123456	New York, NY
//! 654321,Los Angeles, CA
//! ```

use std::io::{BufRead, BufReader, Read};

use crate::record::RecordWriter;
use crate::{Error, Result};

/// Location list parser.
pub struct TextParser;

impl TextParser {
    /// Parse entries from a reader into a writer.
    pub fn parse<R: Read>(reader: R) -> Result<RecordWriter> {
        let mut writer = RecordWriter::new();
        let buf_reader = BufReader::new(reader);

        for (index, line) in buf_reader.lines().enumerate() {
            let line = line.map_err(Error::Read)?;
            let line_no = index + 1;

            // Only whole-line comments; '#' may appear inside a location
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (prefix, location) = split_entry(line).ok_or_else(|| Error::InvalidRecord {
                line: line_no,
                reason: "expected PREFIX followed by a location".to_string(),
            })?;

            writer
                .add(prefix, location)
                .map_err(|e| Error::InvalidRecord {
                    line: line_no,
                    reason: e.to_string(),
                })?;
        }

        Ok(writer)
    }
}

/// Split a line at the first tab, comma or whitespace after the prefix.
fn split_entry(line: &str) -> Option<(&str, &str)> {
    let (idx, sep) = line
        .char_indices()
        .find(|&(_, c)| c == '\t' || c == ',' || c.is_whitespace())?;
    let prefix = &line[..idx];
    let location = line[idx + sep.len_utf8()..].trim();
    Some((prefix, location))
}
