//! Fixed-width location record format.
//!
//! A record file is a flat sequence of 32-byte slots with no header. Slots
//! are expected to be sorted ascending by prefix when the file is searched
//! with the binary strategy.
//!
//! # Slot Layout
//!
//! ```text
//! +--------+---------------------------+---+
//! | PREFIX |          PAYLOAD          | S |
//! +--------+---------------------------+---+
//!   6 bytes          25 bytes           1 byte
//! ```
//!
//! `PREFIX` is six ASCII digits, `PAYLOAD` is ASCII text right-padded with
//! spaces, and `S` is a separator byte (a newline in files produced by
//! [`RecordWriter`]).

mod format;
mod slot;
pub mod writer;


pub use format::*;
pub use slot::{records, trim_padding, Payload, Prefix, Record};
pub use writer::RecordWriter;
