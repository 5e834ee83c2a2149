//! findlocation - prefix lookup over fixed-width location records.
//!
//! A record file is a flat run of 32-byte slots, each holding a six-digit
//! prefix and a 25-byte space-padded location. Given a ten-digit key, the
//! location stored under the key's first six digits is returned.
//!
//! # Features
//!
//! - **Memory-mapped search**: seekable inputs are mapped read-only and
//!   binary searched in O(log n)
//! - **Stream fallback**: pipes and other non-seekable inputs are buffered
//!   and scanned linearly
//! - **Runtime detection**: the loader is chosen by probing the input, not by
//!   whether it is a named file or standard input
//! - **Record writer**: build sorted record files from text
//!
//! # Quick Start
//!
//! ```ignore
//! use findlocation::{find_location, Input, LookupConfig};
//!
//! let input = Input::Path("locations.dat".into());
//! let payload = find_location("1234569999", &input, &LookupConfig::default())?;
//! println!("{}", payload); // "New York, NY"
//! ```
//!
//! # Record Layout
//!
//! See [`record`] for the slot layout and [`search`] for the two search
//! strategies.

mod error;
mod key;
mod lookup;

pub mod converter;
pub mod lines;
pub mod present;
pub mod record;
pub mod search;
pub mod source;

// Re-export core types
pub use error::{Error, Result};
pub use key::TargetKey;
pub use lookup::{find_location, locate, LookupConfig};

pub use record::{Payload, Prefix, Record, RecordWriter};
pub use search::{BinarySearch, LinearSearch, Locate, SearchMethod, Strategy};
pub use source::{resolve, BufferedSource, ContentSource, Input, MappedSource};
