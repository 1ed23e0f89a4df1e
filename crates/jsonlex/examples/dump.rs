//! Lexes stdin as JSON and dumps one token per line to stdout.
//!
//! ```sh
//! echo '{"hello": "world"}' | cargo run --example dump
//! ```

use std::io;
use std::process::ExitCode;

use jsonlex::Lexer;

fn main() -> ExitCode {
    let stdin = io::stdin();
    let mut lexer = Lexer::new(stdin.lock());

    loop {
        match lexer.next_token() {
            Ok(Some(token)) => println!("{} {token}", token.token_type()),
            Ok(None) => return ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("error: could not lex input: {err}");
                return ExitCode::FAILURE;
            }
        }
    }
}
