#![allow(missing_docs, dead_code)]

use jsonlex::{LexError, Lexer, LexerOptions, OwnedToken};

/// A realistic document exercising nested objects, arrays, escapes, numbers,
/// booleans, and null.
pub const SAMPLE: &str = r#" {
  "schema" : "audit.v2",
  "position" : 471,
  "recorded" : "2023-11-08T06:12:41.550912Z",
  "flags" : { "replayed" : false, "sampled" : true, "shard" : null },
  "entries" : [
    { "name" : "event_id", "value" : 253 },
    { "name" : "ip", "value" : "203.0.113.9" },
    { "name" : "path", "value" : "\/api\/v2\/sessions" },
    { "name" : "ua", "value" : "\"curl\/8.4\"" },
    { "name" : "note", "value" : "greeting: привет" },
    { "name" : "latency_ms", "value" : 1.57e1 }
  ]
}"#;

/// Collects every token of `input`, deep-copied.
pub fn lex_all(input: &str, options: LexerOptions) -> Result<Vec<OwnedToken>, LexError> {
    let mut lexer = Lexer::with_options(input.as_bytes(), options);
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next_token()? {
        tokens.push(token.to_owned());
    }
    Ok(tokens)
}

/// Collects every token of `input` with default options.
pub fn lex(input: &str) -> Result<Vec<OwnedToken>, LexError> {
    lex_all(input, LexerOptions::default())
}

/// Runs `input` through the lexer until the first error.
pub fn lex_err(input: &str) -> LexError {
    match lex(input) {
        Ok(tokens) => panic!("input {input:?} must fail, got {tokens:?}"),
        Err(err) => err,
    }
}
