//! Record format constants.

/// Size of one record slot in bytes.
pub const RECORD_SIZE: usize = 32;

/// Size of the prefix field at the start of each slot.
pub const PREFIX_SIZE: usize = 6;

/// Size of the payload (location) field following the prefix.
pub const PAYLOAD_SIZE: usize = 25;

/// Offset of the payload field within a slot.
pub const PAYLOAD_OFFSET: usize = PREFIX_SIZE;

/// Offset of the trailing separator byte within a slot.
pub const SEPARATOR_OFFSET: usize = PREFIX_SIZE + PAYLOAD_SIZE;

/// Separator byte written by [`RecordWriter`](super::RecordWriter).
pub const SEPARATOR: u8 = b'\n';

/// Byte used to right-pad payloads.
pub const PAD: u8 = b' ';

/// Length of a lookup key in ASCII digits.
pub const KEY_LEN: usize = 10;

/// Initial capacity of the stream buffer (1024 records).
pub const INITIAL_BUFFER_SIZE: usize = 1024 * RECORD_SIZE;

const _: () = assert!(SEPARATOR_OFFSET + 1 == RECORD_SIZE);

/// Number of whole records in `len` bytes.
///
/// Trailing bytes that do not fill a slot are ignored.
#[inline]
pub fn record_count(len: usize) -> usize {
    len / RECORD_SIZE
}

/// Number of trailing bytes that do not form a whole record.
#[inline]
pub fn trailing_bytes(len: usize) -> usize {
    len % RECORD_SIZE
}
