use std::io;
use std::str::Utf8Error;

use thiserror::Error;

/// Errors reported while lexing a JSON byte stream.
///
/// Every error is terminal: once a token-producing call has failed, the lexer
/// is left in an unspecified state and must be abandoned.
#[derive(Debug, Error)]
pub enum LexError {
    /// A byte that cannot begin a token in the current state.
    #[error("unexpected byte '{}' in input", printable(.0))]
    UnexpectedByte(u8),
    /// `\x` where `x` is not a recognized escape specifier.
    #[error("invalid escape sequence '\\{}'", printable(.0))]
    InvalidEscape(u8),
    /// A non-hex byte inside a `\uXXXX` escape.
    #[error("invalid hex digit '{}' in unicode escape", printable(.0))]
    InvalidHex(u8),
    /// A UTF-16 surrogate that is not part of a valid high/low pair.
    #[error("invalid utf-16 surrogate pair {high:#06x}:{low:#06x}")]
    InvalidSurrogatePair {
        /// The unit that opened the pair, or the offending unit itself.
        high: u16,
        /// What was found where a low surrogate was required.
        low: u16,
    },
    /// Input ended in the middle of an escape sequence.
    #[error("incomplete escape sequence")]
    IncompleteEscape,
    /// The scanner accepted a numeric-looking token that is not a valid float.
    #[error("could not parse '{0}' as a float")]
    InvalidNumber(String),
    /// A `true`/`false`/`null` literal that stopped matching.
    #[error("invalid literal '{}' while parsing '{expected}'", printable(.found))]
    InvalidLiteral {
        /// The literal being matched.
        expected: &'static str,
        /// The byte that broke the match.
        found: u8,
    },
    /// Input ended outside of the resting state.
    #[error("unexpected end of input")]
    UnexpectedEof,
    /// An unescaped string token is not valid UTF-8.
    #[error("string token is not valid utf-8: {0}")]
    InvalidUtf8(#[from] Utf8Error),
    /// The byte source failed.
    #[error("could not fetch new data: {0}")]
    Io(#[from] io::Error),
}

fn printable(byte: &u8) -> char {
    char::from(*byte)
}
