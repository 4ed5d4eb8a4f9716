#![no_main]

use libfuzzer_sys::fuzz_target;
use sprig::lexer::{self, TokenKind};
use sprig::parser;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(tokens) = lexer::tokenize(s) {
            assert_eq!(tokens.iter().filter(|t| t.kind == TokenKind::Eof).count(), 1);
            assert!(tokens.last().is_some_and(|t| t.kind == TokenKind::Eof));

            let first = parser::parse(&tokens);
            assert_eq!(first, parser::parse(&tokens));
        }
    }
});
