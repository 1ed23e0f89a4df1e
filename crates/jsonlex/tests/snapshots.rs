#![allow(missing_docs)]

mod common;

use jsonlex::Lexer;

/// Renders the stream the way the `dump` example does, one token per line.
fn dump(input: &str) -> String {
    let mut lexer = Lexer::new(input.as_bytes());
    let mut lines = Vec::new();
    while let Some(token) = lexer.next_token().unwrap() {
        lines.push(format!("{} {token}", token.token_type()));
    }
    lines.join("\n")
}

#[test]
fn token_dump_of_small_document() {
    insta::assert_snapshot!(
        dump(r#"{"name":"pin","tags":[true,null],"weight":12.5}"#),
        @r#"
    delim {
    string name
    delim :
    string pin
    delim ,
    string tags
    delim :
    delim [
    bool true
    delim ,
    null null
    delim ]
    delim ,
    string weight
    delim :
    number 12.5
    delim }
    "#
    );
}

#[test]
fn token_dump_with_escapes() {
    insta::assert_snapshot!(
        dump(r#"["a\"b", "\u0416", -2.5e3]"#),
        @r##"
    delim [
    string a"b
    delim ,
    string Ж
    delim ,
    number -2500
    delim ]
    "##
    );
}
