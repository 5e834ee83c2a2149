//! Line-oriented companions: first and last N lines of a text stream.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use crate::{Error, Result};

/// Default number of lines for [`head`] and [`tail`].
pub const DEFAULT_LINES: usize = 10;

/// Copy the first `n` lines of `input` to `out`.
///
/// A line ends at `'\n'`; an unterminated last line is copied as-is.
pub fn head<R: BufRead, W: Write>(mut input: R, out: &mut W, n: usize) -> Result<()> {
    let mut line = Vec::new();
    for _ in 0..n {
        line.clear();
        let read = input.read_until(b'\n', &mut line).map_err(Error::Read)?;
        if read == 0 {
            break;
        }
        out.write_all(&line)?;
    }
    out.flush()?;
    Ok(())
}

/// Copy the last `n` lines of `input` to `out`.
///
/// Only `n` lines are held at any time. An unterminated last line counts as
/// a line and is written without a newline.
pub fn tail<R: BufRead, W: Write>(mut input: R, out: &mut W, n: usize) -> Result<()> {
    if n == 0 {
        return Err(Error::InvalidLineCount("0".to_string()));
    }

    let mut ring: VecDeque<Vec<u8>> = VecDeque::with_capacity(n.min(DEFAULT_LINES));
    let mut line = Vec::new();
    loop {
        let read = input.read_until(b'\n', &mut line).map_err(Error::Read)?;
        if read == 0 {
            break;
        }
        if ring.len() == n {
            ring.pop_front();
        }
        ring.push_back(std::mem::take(&mut line));
    }

    for line in &ring {
        out.write_all(line)?;
    }
    out.flush()?;
    Ok(())
}

/// Parse a `-n` line count.
pub fn parse_count(s: &str) -> Result<usize> {
    s.trim()
        .parse::<usize>()
        .map_err(|_| Error::InvalidLineCount(s.to_string()))
}
