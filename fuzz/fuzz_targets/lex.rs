#![no_main]

use jsonlex::{Lexer, LexerOptions};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // a tiny buffer forces the preserve-and-grow refill path constantly
    let options = LexerOptions {
        buffer_size: 8,
        ..Default::default()
    };
    let mut lexer = Lexer::with_options(data, options);
    while let Ok(Some(_)) = lexer.next_token() {}

    let mut lexer = Lexer::new(data);
    while let Ok(Some(_)) = lexer.next_token() {}
});
