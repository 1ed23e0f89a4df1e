//! In-place rewriting of escaped JSON string bodies.

use crate::error::LexError;
use crate::unicode::{decode_utf16_unit, hex4_to_u16, Utf16Step};

/// Rewrites `buf` from its escaped form to literal UTF-8 bytes, returning the
/// number of bytes written. The result occupies `buf[..written]`; after a
/// failure the buffer contents are unspecified.
///
/// `buf` is a JSON string body without the surrounding quotes. Recognized
/// escapes are `\n \r \t \b \f \\ \/ \"` and `\uXXXX` (with `\U` accepted as
/// a synonym). A `\u` escape decoding to a high surrogate must be followed
/// immediately by a `\u` escape holding its low partner.
///
/// The write cursor never overtakes the read cursor: every escape sequence
/// occupies at least as many input bytes as it produces output bytes (a
/// two-byte simple escape yields one byte, a six-byte `\uXXXX` at most three,
/// and a twelve-byte surrogate pair exactly four).
pub fn unescape_in_place(buf: &mut [u8]) -> Result<usize, LexError> {
    let mut read = 0;
    let mut write = 0;
    let mut pending_high: Option<u16> = None;

    while read < buf.len() {
        let b = buf[read];
        if b != b'\\' {
            if let Some(high) = pending_high {
                return Err(LexError::InvalidSurrogatePair {
                    high,
                    low: u16::from(b),
                });
            }
            buf[write] = b;
            write += 1;
            read += 1;
            continue;
        }

        let specifier = *buf.get(read + 1).ok_or(LexError::IncompleteEscape)?;
        match specifier {
            b'u' | b'U' => {
                let digits = buf
                    .get(read + 2..read + 6)
                    .ok_or(LexError::IncompleteEscape)?;
                let unit = hex4_to_u16(digits)?;
                read += 6;
                match decode_utf16_unit(unit, pending_high.take())? {
                    Utf16Step::Emit(c) => {
                        let mut tmp = [0u8; 4];
                        let encoded = c.encode_utf8(&mut tmp);
                        buf[write..write + encoded.len()].copy_from_slice(encoded.as_bytes());
                        write += encoded.len();
                    }
                    Utf16Step::Pending(high) => pending_high = Some(high),
                }
            }
            _ => {
                if let Some(high) = pending_high {
                    return Err(LexError::InvalidSurrogatePair {
                        high,
                        low: u16::from(specifier),
                    });
                }
                buf[write] = match specifier {
                    b'n' => b'\n',
                    b'r' => b'\r',
                    b't' => b'\t',
                    b'b' => 0x08,
                    b'f' => 0x0C,
                    b'\\' => b'\\',
                    b'/' => b'/',
                    b'"' => b'"',
                    _ => return Err(LexError::InvalidEscape(specifier)),
                };
                write += 1;
                read += 2;
            }
        }
    }

    if pending_high.is_some() {
        return Err(LexError::IncompleteEscape);
    }
    Ok(write)
}
