//! Byte-driven state machine producing JSON tokens.

use std::io::Read;
use std::str;

use crate::buffer::ScanBuffer;
use crate::error::LexError;
use crate::literal::{LiteralMatcher, LiteralStep};
use crate::token::{OwnedToken, Token, TokenType};
use crate::unescape::unescape_in_place;
use crate::unicode::decode_hex;

const DEFAULT_BUFFER_SIZE: usize = 4096;

/// Configuration for a [`Lexer`].
///
/// # Examples
///
/// ```
/// use jsonlex::{Lexer, LexerOptions};
///
/// let options = LexerOptions {
///     skip_delims: true,
///     ..Default::default()
/// };
/// let mut lexer = Lexer::with_options(&b"[1, 2]"[..], options);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LexerOptions {
    /// Initial scan-buffer capacity in bytes.
    ///
    /// Every token must fit in the buffer; one that does not makes the buffer
    /// grow by doubling, so this is a floor, not a ceiling. Prefer a larger
    /// value when most tokens are known to be long.
    ///
    /// # Default
    ///
    /// `4096`
    pub buffer_size: usize,

    /// Whether to swallow structural delimiters.
    ///
    /// When `true`, `{ } [ ] : ,` are consumed without ever yielding a
    /// `Delim` token, leaving only keys and values. Useful for matching the
    /// input against a grammar without doing full syntax analysis.
    ///
    /// # Default
    ///
    /// `false`
    pub skip_delims: bool,
}

impl Default for LexerOptions {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            skip_delims: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Skipping,
    InString,
    PendingEscape,
    InUnicodeEscape,
    InNumber,
    InBool,
    InNull,
}

/// What the state machine decided about the byte it was fed.
enum Step {
    /// Consume the byte and keep scanning.
    Continue,
    /// Consume the byte; it completes the current token.
    EmitAfter,
    /// The byte terminates the current token but belongs to the next one.
    EmitBefore,
}

/// Streaming JSON lexer over a blocking byte source.
///
/// The lexer does its own buffering, so favor low-level readers over
/// pre-buffered ones to minimize the memory footprint. Memory use is bounded
/// by the longest single token, not the document: the scan buffer starts at
/// [`LexerOptions::buffer_size`] bytes and doubles only when a token outgrows
/// it.
///
/// String tokens are unescaped in place and borrowed straight from the scan
/// buffer; see [`Token`] for the lifetime contract.
///
/// A lexer is not a parser: it does not check that braces balance or that
/// delimiters appear between values.
pub struct Lexer<R> {
    source: R,
    buf: ScanBuffer,
    state: State,
    token_type: TokenType,
    literal: Option<LiteralMatcher>,
    hex_digits_left: u8,
    skip_delims: bool,
}

impl<R: Read> Lexer<R> {
    /// Creates a lexer with default options.
    pub fn new(source: R) -> Self {
        Self::with_options(source, LexerOptions::default())
    }

    /// Creates a lexer with the given options.
    pub fn with_options(source: R, options: LexerOptions) -> Self {
        Self {
            source,
            buf: ScanBuffer::with_capacity(options.buffer_size),
            state: State::Idle,
            token_type: TokenType::Null,
            literal: None,
            hex_digits_left: 0,
            skip_delims: options.skip_delims,
        }
    }

    /// Produces the next token, or `None` once the input is exhausted.
    ///
    /// A returned [`Token::Str`] borrows the scan buffer and is invalidated
    /// by the next call; deep-copy it with [`Token::to_owned`] to keep it.
    /// After `None`, further calls keep returning `None`. Errors are
    /// terminal.
    pub fn next_token(&mut self) -> Result<Option<Token<'_>>, LexError> {
        if self.state == State::Idle {
            self.buf.refill(&mut self.source)?;
            self.state = State::Skipping;
        }

        let end = loop {
            let Some(b) = self.buf.peek() else {
                if self.buf.is_eof() {
                    return if self.state == State::Skipping {
                        Ok(None)
                    } else {
                        Err(LexError::UnexpectedEof)
                    };
                }
                self.buf.refill(&mut self.source)?;
                continue;
            };

            match self.step(b)? {
                Step::Continue => self.buf.advance(),
                Step::EmitAfter => {
                    self.buf.advance();
                    break self.buf.read_pos();
                }
                Step::EmitBefore => break self.buf.read_pos(),
            }
        };

        self.emit(end).map(Some)
    }

    /// Like [`Lexer::next_token`], but deep-copies the token so it can
    /// outlive the lexer's buffer.
    pub fn next_owned(&mut self) -> Result<Option<OwnedToken>, LexError> {
        Ok(self.next_token()?.map(|token| token.to_owned()))
    }

    /// Converts the lexer into an iterator over deep-copied tokens.
    pub fn into_owned_tokens(self) -> OwnedTokens<R> {
        OwnedTokens {
            lexer: self,
            done: false,
        }
    }

    /// Returns the underlying byte source.
    pub fn into_inner(self) -> R {
        self.source
    }

    fn step(&mut self, b: u8) -> Result<Step, LexError> {
        match self.state {
            State::Idle | State::Skipping => self.step_skipping(b),
            State::InString => Ok(self.step_string(b)),
            State::PendingEscape => self.step_escape(b),
            State::InUnicodeEscape => self.step_unicode(b),
            State::InNumber => Ok(self.step_number(b)),
            State::InBool | State::InNull => self.step_literal(b),
        }
    }

    fn step_skipping(&mut self, b: u8) -> Result<Step, LexError> {
        match b {
            b if is_whitespace(b) => Ok(Step::Continue),
            b if is_delim(b) => {
                if self.skip_delims {
                    Ok(Step::Continue)
                } else {
                    self.token_type = TokenType::Delim;
                    self.buf.mark_token_start();
                    Ok(Step::EmitAfter)
                }
            }
            b'"' => {
                self.token_type = TokenType::String;
                self.buf.mark_token_start();
                self.state = State::InString;
                Ok(Step::Continue)
            }
            b if can_appear_in_number(b) => {
                self.token_type = TokenType::Number;
                self.buf.mark_token_start();
                self.state = State::InNumber;
                Ok(Step::Continue)
            }
            b't' | b'T' | b'f' | b'F' => {
                self.token_type = TokenType::Bool;
                self.buf.mark_token_start();
                self.literal = Some(LiteralMatcher::new(b));
                self.state = State::InBool;
                Ok(Step::Continue)
            }
            b'n' | b'N' => {
                self.token_type = TokenType::Null;
                self.buf.mark_token_start();
                self.literal = Some(LiteralMatcher::new(b));
                self.state = State::InNull;
                Ok(Step::Continue)
            }
            _ => Err(LexError::UnexpectedByte(b)),
        }
    }

    fn step_string(&mut self, b: u8) -> Step {
        match b {
            b'"' => {
                self.state = State::Skipping;
                Step::EmitAfter
            }
            b'\\' => {
                self.state = State::PendingEscape;
                Step::Continue
            }
            _ => Step::Continue,
        }
    }

    fn step_escape(&mut self, b: u8) -> Result<Step, LexError> {
        self.state = match b {
            b'u' | b'U' => {
                self.hex_digits_left = 4;
                State::InUnicodeEscape
            }
            b'n' | b'r' | b't' | b'b' | b'f' | b'\\' | b'/' | b'"' => State::InString,
            _ => return Err(LexError::InvalidEscape(b)),
        };
        Ok(Step::Continue)
    }

    fn step_unicode(&mut self, b: u8) -> Result<Step, LexError> {
        if decode_hex(b).is_none() {
            return Err(LexError::InvalidHex(b));
        }
        self.hex_digits_left -= 1;
        if self.hex_digits_left == 0 {
            self.state = State::InString;
        }
        Ok(Step::Continue)
    }

    fn step_number(&mut self, b: u8) -> Step {
        if is_whitespace(b) || is_delim(b) {
            self.state = State::Skipping;
            Step::EmitBefore
        } else {
            // anything else accumulates; the final float parse rejects it
            Step::Continue
        }
    }

    fn step_literal(&mut self, b: u8) -> Result<Step, LexError> {
        let Some(matcher) = self.literal.as_mut() else {
            return Err(LexError::UnexpectedByte(b));
        };
        match matcher.step(b) {
            LiteralStep::NeedMore => Ok(Step::Continue),
            LiteralStep::Done => {
                self.state = State::Skipping;
                Ok(Step::EmitAfter)
            }
            LiteralStep::Reject => Err(LexError::InvalidLiteral {
                expected: matcher.literal(),
                found: b,
            }),
        }
    }

    /// Builds the token whose raw bytes occupy `storage[token_start..end]`.
    fn emit(&mut self, end: usize) -> Result<Token<'_>, LexError> {
        let Some(start) = self.buf.token_start() else {
            return Err(LexError::UnexpectedEof);
        };
        self.buf.clear_token();

        match self.token_type {
            TokenType::Delim => Ok(Token::Delim(self.buf.byte_at(start))),
            TokenType::Bool => {
                let value = self.buf.byte_at(start).to_ascii_lowercase() == b't';
                Ok(Token::Bool(value))
            }
            TokenType::Null => Ok(Token::Null),
            TokenType::Number => {
                let bytes = self.buf.slice(start, end);
                match str::from_utf8(bytes).ok().and_then(|t| t.parse().ok()) {
                    Some(value) => Ok(Token::Num(value)),
                    None => Err(LexError::InvalidNumber(
                        String::from_utf8_lossy(bytes).into_owned(),
                    )),
                }
            }
            TokenType::String => {
                // the raw range includes both quotes
                let written = unescape_in_place(self.buf.slice_mut(start + 1, end - 1))?;
                let body = self.buf.slice(start + 1, start + 1 + written);
                Ok(Token::Str(str::from_utf8(body)?))
            }
        }
    }
}

/// Iterator over deep-copied tokens, created by [`Lexer::into_owned_tokens`].
///
/// Yields `None` after the end of the stream or after the first error.
pub struct OwnedTokens<R> {
    lexer: Lexer<R>,
    done: bool,
}

impl<R: Read> Iterator for OwnedTokens<R> {
    type Item = Result<OwnedToken, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.lexer.next_owned() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

fn is_delim(b: u8) -> bool {
    matches!(b, b'{' | b'}' | b'[' | b']' | b':' | b',')
}

fn can_appear_in_number(b: u8) -> bool {
    matches!(b, b'0'..=b'9' | b'-' | b'+' | b'.' | b'e' | b'E')
}
