//! The token sum type and its owned projection.

use core::fmt;

/// Tag identifying the five kinds of JSON token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    /// A structural delimiter.
    Delim,
    /// A string value.
    String,
    /// A numeric value.
    Number,
    /// A boolean value.
    Bool,
    /// The null value.
    Null,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenType::Delim => "delim",
            TokenType::String => "string",
            TokenType::Number => "number",
            TokenType::Bool => "bool",
            TokenType::Null => "null",
        };
        name.fmt(f)
    }
}

/// A single JSON token borrowed from the lexer's scan buffer.
///
/// A `Str` view points into the buffer and stays valid until the next
/// token-producing call on the same lexer, which may overwrite or relocate
/// the storage. The borrow checker enforces this; use [`Token::to_owned`]
/// for a copy that outlives the lexer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token<'buf> {
    /// One of `{ } [ ] : ,`.
    Delim(u8),
    /// Unescaped string contents, without the surrounding quotes.
    Str(&'buf str),
    /// A number parsed as a 64-bit float.
    Num(f64),
    /// A `true` or `false` literal.
    Bool(bool),
    /// A `null` literal.
    Null,
}

impl Token<'_> {
    /// The tag of this token.
    pub fn token_type(&self) -> TokenType {
        match self {
            Token::Delim(_) => TokenType::Delim,
            Token::Str(_) => TokenType::String,
            Token::Num(_) => TokenType::Number,
            Token::Bool(_) => TokenType::Bool,
            Token::Null => TokenType::Null,
        }
    }

    /// The delimiter byte, if this is a `Delim` token.
    pub fn as_delim(&self) -> Option<u8> {
        match self {
            Token::Delim(d) => Some(*d),
            _ => None,
        }
    }

    /// The string contents, if this is a `Str` token.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Token::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The numeric value, if this is a `Num` token.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Token::Num(n) => Some(*n),
            _ => None,
        }
    }

    /// The boolean value, if this is a `Bool` token.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Token::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// True for the `Null` token.
    pub fn is_null(&self) -> bool {
        matches!(self, Token::Null)
    }

    /// Deep-copies the token, detaching it from the scan buffer.
    pub fn to_owned(&self) -> OwnedToken {
        match *self {
            Token::Delim(d) => OwnedToken::Delim(d),
            Token::Str(s) => OwnedToken::Str(s.to_string()),
            Token::Num(n) => OwnedToken::Num(n),
            Token::Bool(b) => OwnedToken::Bool(b),
            Token::Null => OwnedToken::Null,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Delim(d) => char::from(*d).fmt(f),
            Token::Str(s) => s.fmt(f),
            Token::Num(n) => n.fmt(f),
            Token::Bool(b) => b.fmt(f),
            Token::Null => "null".fmt(f),
        }
    }
}

/// A token with owned contents, detached from the lexer's buffer.
#[derive(Debug, Clone, PartialEq)]
pub enum OwnedToken {
    /// One of `{ } [ ] : ,`.
    Delim(u8),
    /// Unescaped string contents.
    Str(String),
    /// A number parsed as a 64-bit float.
    Num(f64),
    /// A `true` or `false` literal.
    Bool(bool),
    /// A `null` literal.
    Null,
}

impl OwnedToken {
    /// The tag of this token.
    pub fn token_type(&self) -> TokenType {
        match self {
            OwnedToken::Delim(_) => TokenType::Delim,
            OwnedToken::Str(_) => TokenType::String,
            OwnedToken::Num(_) => TokenType::Number,
            OwnedToken::Bool(_) => TokenType::Bool,
            OwnedToken::Null => TokenType::Null,
        }
    }
}

impl From<Token<'_>> for OwnedToken {
    fn from(token: Token<'_>) -> Self {
        token.to_owned()
    }
}

impl fmt::Display for OwnedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OwnedToken::Delim(d) => char::from(*d).fmt(f),
            OwnedToken::Str(s) => s.fmt(f),
            OwnedToken::Num(n) => n.fmt(f),
            OwnedToken::Bool(b) => b.fmt(f),
            OwnedToken::Null => "null".fmt(f),
        }
    }
}
