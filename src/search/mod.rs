//! Prefix search strategies over raw record content.
//!
//! Both strategies implement [`Locate`] and share the slot arithmetic in
//! [`Record`], so a given content and prefix resolve to the same slot
//! layout regardless of which one runs.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::record::{record_count, records, Payload, Prefix, Record};
use crate::{Error, Result};


/// Find the payload of a record whose prefix equals the target.
pub trait Locate {
    /// Return a copy of the matching record's payload, if any.
    fn locate(&self, content: &[u8], target: &Prefix) -> Option<Payload>;
}

/// Bounded binary search over content sorted ascending by prefix.
///
/// O(log n) comparisons. Results on unsorted content are unspecified.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinarySearch;

impl Locate for BinarySearch {
    fn locate(&self, content: &[u8], target: &Prefix) -> Option<Payload> {
        let count = record_count(content.len());
        if count == 0 {
            return None;
        }

        let mut left = 0usize;
        let mut right = count - 1;

        while left <= right {
            let mid = left + (right - left) / 2;
            let record = Record::at(content, mid);

            match record.compare_prefix(target) {
                Ordering::Equal => return Some(record.to_payload()),
                Ordering::Less => left = mid + 1,
                Ordering::Greater => {
                    if mid == 0 {
                        break;
                    }
                    right = mid - 1;
                }
            }
        }

        None
    }
}

/// Front-to-back scan returning the first matching record.
///
/// O(n) comparisons, no ordering requirement.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearSearch;

impl Locate for LinearSearch {
    fn locate(&self, content: &[u8], target: &Prefix) -> Option<Payload> {
        records(content)
            .find(|record| record.compare_prefix(target) == Ordering::Equal)
            .map(|record| record.to_payload())
    }
}

/// Concrete search method run over loaded content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchMethod {
    /// Bounded binary search, requires sorted content
    Binary,
    /// Front-to-back scan
    Linear,
}

impl SearchMethod {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMethod::Binary => "binary",
            SearchMethod::Linear => "linear",
        }
    }

    /// Run this method.
    pub fn locate(&self, content: &[u8], target: &Prefix) -> Option<Payload> {
        match self {
            SearchMethod::Binary => BinarySearch.locate(content, target),
            SearchMethod::Linear => LinearSearch.locate(content, target),
        }
    }
}

impl fmt::Display for SearchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Search strategy selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Pick by input capability: binary for mapped files, linear for streams
    #[default]
    Auto,
    /// Always binary search
    Binary,
    /// Always linear scan
    Linear,
}

impl Strategy {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Auto => "auto",
            Strategy::Binary => "binary",
            Strategy::Linear => "linear",
        }
    }

    /// The method to run, falling back to `capability_default` for `Auto`.
    pub fn resolve(&self, capability_default: SearchMethod) -> SearchMethod {
        match self {
            Strategy::Auto => capability_default,
            Strategy::Binary => SearchMethod::Binary,
            Strategy::Linear => SearchMethod::Linear,
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Strategy::Auto),
            "binary" => Ok(Strategy::Binary),
            "linear" => Ok(Strategy::Linear),
            other => Err(format!(
                "unknown strategy {:?} (expected auto, binary or linear)",
                other
            )),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Check that record prefixes are non-decreasing.
///
/// Returns the index of the first record that sorts below its predecessor.
pub fn verify_sorted(content: &[u8]) -> Result<()> {
    let mut prev: Option<&[u8]> = None;
    for (index, record) in records(content).enumerate() {
        let prefix = record.prefix();
        if let Some(prev) = prev {
            if prefix < prev {
                return Err(Error::Unsorted { index });
            }
        }
        prev = Some(prefix);
    }
    Ok(())
}
