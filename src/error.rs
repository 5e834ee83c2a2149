//! Error types for findlocation.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for findlocation operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Key is not exactly ten ASCII digits
    #[error("Invalid number format. Please provide a 10-digit number.")]
    InvalidKey(String),

    /// Named input file could not be opened
    #[error("Error opening file")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// End-relative seek failed on a seekable input
    #[error("Error getting file size")]
    SizeQuery(#[source] std::io::Error),

    /// Read-only mapping could not be established
    #[error("Error mapping file into memory")]
    Map(#[source] std::io::Error),

    /// Stream buffer could not grow
    #[error("Memory allocation error")]
    Alloc,

    /// Read from a stream input failed
    #[error("Error reading file")]
    Read(#[source] std::io::Error),

    /// No record carries the requested prefix
    #[error("Prefix not found")]
    NotFound,

    /// Records are not ascending at the given index
    #[error("Records not sorted by prefix at record {index}")]
    Unsorted { index: usize },

    /// Prefix or location rejected by the record writer
    #[error("invalid record: {0}")]
    InvalidEntry(String),

    /// Generator input line could not be turned into a record
    #[error("invalid record on line {line}: {reason}")]
    InvalidRecord { line: usize, reason: String },

    /// Line count for head/tail is not a usable number
    #[error("Invalid number of lines: {0}")]
    InvalidLineCount(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Process exit status for this error.
    ///
    /// Every failure is terminal for a single-shot lookup, so all of them
    /// map to `1`.
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Whether this error is a lookup miss rather than a usage or I/O fault.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound)
    }
}

/// Result type alias for findlocation operations.
pub type Result<T> = std::result::Result<T, Error>;
