//! Output of a found location.

use std::io::{self, Write};

use crate::record::Payload;

/// Write the payload with its padding trimmed, followed by one newline.
pub fn write_location<W: Write>(out: &mut W, payload: &Payload) -> io::Result<()> {
    out.write_all(payload.trimmed())?;
    out.write_all(b"\n")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(field: &[u8]) -> Payload {
        let mut buf = [b' '; 25];
        buf[..field.len()].copy_from_slice(field);
        Payload::from_slice(&buf)
    }

    #[test]
    fn test_trailing_spaces_trimmed() {
        let mut out = Vec::new();
        write_location(&mut out, &payload(b"New York, NY")).unwrap();
        assert_eq!(out, b"New York, NY\n");
    }

    #[test]
    fn test_inner_spaces_kept() {
        let mut out = Vec::new();
        write_location(&mut out, &payload(b"  San  Jose \n")).unwrap();
        assert_eq!(out, b"  San  Jose\n");
    }

    #[test]
    fn test_all_padding_prints_empty_line() {
        let mut out = Vec::new();
        write_location(&mut out, &payload(b"")).unwrap();
        assert_eq!(out, b"\n");
    }

    #[test]
    fn test_full_width_payload() {
        let mut out = Vec::new();
        write_location(&mut out, &payload(b"ABCDEFGHIJKLMNOPQRSTUVWXY")).unwrap();
        assert_eq!(out, b"ABCDEFGHIJKLMNOPQRSTUVWXY\n");
    }

    #[test]
    fn test_nul_ends_payload() {
        let mut out = Vec::new();
        write_location(&mut out, &payload(b"Boston \0junk")).unwrap();
        assert_eq!(out, b"Boston\n");
    }
}
