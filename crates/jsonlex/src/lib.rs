//! Streaming JSON lexical analyzer.
//!
//! Reads a byte stream and produces a lazy sequence of JSON tokens: strings,
//! numbers, booleans, nulls, and structural delimiters. Memory stays
//! proportional to the longest single token rather than the document, and the
//! fast path allocates nothing per token: string contents are unescaped in
//! place inside the internal scan buffer and returned as borrowed views.
//!
//! This is a lexer, not a parser. It does not check that braces balance or
//! that commas and colons appear where the JSON grammar wants them; it
//! recognizes tokens and leaves syntax to the caller.
//!
//! # Examples
//!
//! ```
//! use jsonlex::{Lexer, Token};
//!
//! let mut lexer = Lexer::new(&br#"{"delta": 3.14}"#[..]);
//! assert_eq!(lexer.next_token().unwrap(), Some(Token::Delim(b'{')));
//! assert_eq!(lexer.next_token().unwrap(), Some(Token::Str("delta")));
//! assert_eq!(lexer.next_token().unwrap(), Some(Token::Delim(b':')));
//! assert_eq!(lexer.next_token().unwrap(), Some(Token::Num(3.14)));
//! assert_eq!(lexer.next_token().unwrap(), Some(Token::Delim(b'}')));
//! assert_eq!(lexer.next_token().unwrap(), None);
//! ```
//!
//! A [`Token::Str`] borrows the lexer's buffer and is valid only until the
//! next token-producing call; copy it out with [`Token::to_owned`] when it
//! must live longer.

#![warn(missing_docs)]

mod buffer;
mod error;
mod lexer;
mod literal;
mod token;
mod unescape;
mod unicode;

pub use error::LexError;
pub use lexer::{Lexer, LexerOptions, OwnedTokens};
pub use token::{OwnedToken, Token, TokenType};
pub use unescape::unescape_in_place;
