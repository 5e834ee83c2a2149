//! Seek capability detection.

use std::io::{ErrorKind, Seek};

/// How an input can be accessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Supports absolute positioning; content can be mapped
    RandomAccess,
    /// Sequential reads only
    Stream,
}

/// Classify `input` by querying its current position.
///
/// Only a "not seekable" failure marks a stream. Any other failure is left
/// to the size query that follows, which reports it. Querying the position
/// does not move it.
pub fn probe<S: Seek>(input: &mut S) -> Capability {
    match input.stream_position() {
        Ok(_) => Capability::RandomAccess,
        Err(e) if e.kind() == ErrorKind::NotSeekable => Capability::Stream,
        Err(e) => {
            log::debug!("position probe failed ({}), treating as random access", e);
            Capability::RandomAccess
        }
    }
}
