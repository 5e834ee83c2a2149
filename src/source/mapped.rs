//! Memory-mapped content for seekable inputs.

use memmap2::{Mmap, MmapOptions};
use std::fs::File;
use std::io::{self, Seek, SeekFrom};

use super::{warn_trailing, ContentSource};
use crate::search::SearchMethod;
use crate::{Error, Result};

/// Read-only mapping of an entire file.
pub struct MappedSource {
    // None for empty files, which cannot be mapped.
    mmap: Option<Mmap>,
}

impl MappedSource {
    /// Map the whole of `file`.
    ///
    /// The length comes from an end-relative seek; the file position is
    /// restored afterwards.
    pub fn map(file: &File) -> Result<Self> {
        let mut handle = file;
        let size = query_size(&mut handle).map_err(Error::SizeQuery)?;
        let len = usize::try_from(size).map_err(|_| {
            Error::SizeQuery(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("{} bytes exceeds addressable memory", size),
            ))
        })?;

        if len == 0 {
            return Ok(Self { mmap: None });
        }

        let mmap = unsafe { MmapOptions::new().len(len).map(file) }.map_err(Error::Map)?;
        warn_trailing(len);

        Ok(Self { mmap: Some(mmap) })
    }

    /// Map a copy of `data`.
    ///
    /// This writes the data to a temp file and then memory-maps it.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        use std::io::Write;

        let mut temp_file = tempfile::tempfile()?;
        temp_file.write_all(data)?;
        temp_file.rewind()?;

        Self::map(&temp_file)
    }
}

impl ContentSource for MappedSource {
    fn as_bytes(&self) -> &[u8] {
        match &self.mmap {
            Some(mmap) => &mmap[..],
            None => &[],
        }
    }

    fn default_strategy(&self) -> SearchMethod {
        SearchMethod::Binary
    }
}

/// Total length of a seekable input, leaving its position unchanged.
pub fn query_size<S: Seek>(input: &mut S) -> io::Result<u64> {
    let current = input.stream_position()?;
    let size = input.seek(SeekFrom::End(0))?;
    input.seek(SeekFrom::Start(current))?;
    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    #[test]
    fn test_query_size_restores_position() {
        let mut cursor = Cursor::new(vec![7u8; 100]);
        cursor.set_position(40);
        assert_eq!(query_size(&mut cursor).unwrap(), 100);
        assert_eq!(cursor.position(), 40);
    }

    #[test]
    fn test_map_empty_file() {
        let file = tempfile::tempfile().unwrap();
        let source = MappedSource::map(&file).unwrap();
        assert!(source.is_empty());
        assert_eq!(source.record_count(), 0);
        assert_eq!(source.byte_at(0), None);
    }

    #[test]
    fn test_map_whole_file_from_any_position() {
        let mut file = tempfile::tempfile().unwrap();
        file.write_all(&[b'x'; 96]).unwrap();
        // Position is at the end after writing.
        let source = MappedSource::map(&file).unwrap();
        assert_eq!(source.len(), 96);
        assert_eq!(source.record_count(), 3);
        assert_eq!(source.byte_at(95), Some(b'x'));
        assert_eq!(source.default_strategy(), SearchMethod::Binary);
    }

    #[test]
    fn test_from_bytes_ignores_trailing_partial_record() {
        let source = MappedSource::from_bytes(&[b'1'; 40]).unwrap();
        assert_eq!(source.len(), 40);
        assert_eq!(source.record_count(), 1);
    }
}
