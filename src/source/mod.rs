//! Backing content for a lookup.
//!
//! An input is probed once for seek support. Seekable inputs are mapped
//! read-only with [`MappedSource`]; anything else is drained into an owned
//! [`BufferedSource`]. Callers only see the [`ContentSource`] trait.

mod buffered;
mod mapped;
mod probe;

use std::fs::File;
use std::path::PathBuf;

pub use buffered::{BufferedSource, StreamBuffer};
pub use mapped::{query_size, MappedSource};
pub use probe::{probe, Capability};

use crate::record::{record_count, trailing_bytes};
use crate::search::SearchMethod;
use crate::{Error, LookupConfig, Result};

/// Read-only byte content that records are searched in.
pub trait ContentSource {
    /// The entire content.
    fn as_bytes(&self) -> &[u8];

    /// Search method suited to how this content was loaded.
    fn default_strategy(&self) -> SearchMethod;

    /// Content length in bytes.
    fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Whether the content is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Byte at `offset`, or `None` past the end.
    fn byte_at(&self, offset: usize) -> Option<u8> {
        self.as_bytes().get(offset).copied()
    }

    /// Number of whole records in the content.
    fn record_count(&self) -> usize {
        record_count(self.len())
    }
}

/// Where record content comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Standard input
    Stdin,
    /// A named file
    Path(PathBuf),
}

impl Input {
    /// `Path` when a filename is given, `Stdin` otherwise.
    pub fn from_arg(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => Input::Path(path),
            None => Input::Stdin,
        }
    }
}

/// Open `input` and load its content with the loader its capability allows.
pub fn resolve(input: &Input, config: &LookupConfig) -> Result<Box<dyn ContentSource>> {
    let file = match input {
        Input::Path(path) => File::open(path).map_err(|source| Error::Open {
            path: path.clone(),
            source,
        })?,
        Input::Stdin => match stdin_file()? {
            Some(file) => file,
            None => {
                log::debug!("stdin: no descriptor access, reading as stream");
                let source = StreamBuffer::with_capacity(config.initial_buffer_capacity)?
                    .fill_from(std::io::stdin().lock())?
                    .finalize();
                return Ok(Box::new(source));
            }
        },
    };

    load(&file, config)
}

/// Load content from an already opened file.
///
/// The file may be dropped once this returns; a mapping outlives its
/// descriptor.
pub fn load(file: &File, config: &LookupConfig) -> Result<Box<dyn ContentSource>> {
    let mut handle = file;
    match probe(&mut handle) {
        Capability::RandomAccess => {
            let source = MappedSource::map(file)?;
            log::debug!(
                "mapped {} bytes ({} records)",
                source.len(),
                source.record_count()
            );
            Ok(Box::new(source))
        }
        Capability::Stream => {
            let source = StreamBuffer::with_capacity(config.initial_buffer_capacity)?
                .fill_from(file)?
                .finalize();
            log::debug!(
                "buffered {} bytes from stream ({} records)",
                source.len(),
                source.record_count()
            );
            Ok(Box::new(source))
        }
    }
}

#[cfg(unix)]
fn stdin_file() -> Result<Option<File>> {
    use std::os::fd::AsFd;

    // A duplicate shares the file offset with descriptor 0.
    let fd = std::io::stdin().as_fd().try_clone_to_owned()?;
    Ok(Some(File::from(fd)))
}

#[cfg(not(unix))]
fn stdin_file() -> Result<Option<File>> {
    Ok(None)
}

/// Warn when content carries bytes that do not fill a whole slot.
pub(crate) fn warn_trailing(len: usize) {
    let extra = trailing_bytes(len);
    if extra != 0 {
        log::warn!(
            "ignoring {} trailing bytes after {} whole records",
            extra,
            record_count(len)
        );
    }
}
