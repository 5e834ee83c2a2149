//! Lookup key parsing.

use std::fmt;
use std::str::FromStr;

use crate::record::{Prefix, KEY_LEN, PREFIX_SIZE};
use crate::{Error, Result};

/// A validated 10-digit lookup key.
///
/// Only the first six digits take part in matching. The remaining four are
/// checked for format and otherwise ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetKey {
    digits: [u8; KEY_LEN],
}

impl TargetKey {
    /// Parse a key, rejecting anything that is not exactly ten ASCII digits.
    pub fn parse(s: &str) -> Result<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != KEY_LEN || !bytes.iter().all(u8::is_ascii_digit) {
            return Err(Error::InvalidKey(s.to_string()));
        }
        let mut digits = [0u8; KEY_LEN];
        digits.copy_from_slice(bytes);
        Ok(Self { digits })
    }

    /// The six-digit prefix used for matching.
    pub fn prefix(&self) -> Prefix {
        let mut buf = [0u8; PREFIX_SIZE];
        buf.copy_from_slice(&self.digits[..PREFIX_SIZE]);
        Prefix::new(buf)
    }

    /// The trailing four digits.
    pub fn suffix(&self) -> &str {
        // Validated as ASCII digits on construction.
        std::str::from_utf8(&self.digits[PREFIX_SIZE..]).unwrap_or_default()
    }

    /// The whole key as a string.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.digits).unwrap_or_default()
    }
}

impl FromStr for TargetKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for TargetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
