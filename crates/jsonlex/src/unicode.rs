//! Hex and UTF-16 decoding helpers for unicode escape sequences.

use crate::error::LexError;

/// Parses a single ASCII hex digit, case-insensitive.
pub(crate) fn decode_hex(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Interprets exactly four ASCII hex digits as a big-endian UTF-16 code unit.
pub(crate) fn hex4_to_u16(digits: &[u8]) -> Result<u16, LexError> {
    debug_assert_eq!(digits.len(), 4);
    let mut unit = 0u16;
    for &b in digits {
        let nibble = decode_hex(b).ok_or(LexError::InvalidHex(b))?;
        unit = (unit << 4) | u16::from(nibble);
    }
    Ok(unit)
}

/// Outcome of feeding one UTF-16 code unit to [`decode_utf16_unit`].
pub(crate) enum Utf16Step {
    /// The unit (or the surrogate pair it completed) decoded to a scalar.
    Emit(char),
    /// The unit is a high surrogate waiting for its low partner.
    Pending(u16),
}

/// Decodes one UTF-16 code unit, combining surrogate pairs across calls.
///
/// `pending` carries the high surrogate from the previous call, if any. A
/// pending high surrogate must be resolved by a low surrogate in the very
/// next unit.
pub(crate) fn decode_utf16_unit(unit: u16, pending: Option<u16>) -> Result<Utf16Step, LexError> {
    match (pending, unit) {
        (None, 0xD800..=0xDBFF) => Ok(Utf16Step::Pending(unit)),
        (Some(high), low @ 0xDC00..=0xDFFF) => {
            let code = 0x10000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
            match char::from_u32(code) {
                Some(c) => Ok(Utf16Step::Emit(c)),
                None => Err(LexError::InvalidSurrogatePair { high, low }),
            }
        }
        (Some(high), low) => Err(LexError::InvalidSurrogatePair { high, low }),
        (None, unit) => char::from_u32(u32::from(unit))
            .map(Utf16Step::Emit)
            .ok_or(LexError::InvalidSurrogatePair {
                high: unit,
                low: 0,
            }),
    }
}
