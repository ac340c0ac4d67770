//! Property tests for the scanner's literal and keyword handling.

use eduscript::lexer::{
    lexer::{tokenize, Lexer},
    tokens::{TokenKind, TokenValue},
};
use proptest::prelude::*;

const RESERVED: [&str; 15] = [
    "let", "function", "if", "else", "while", "return", "break", "continue", "number", "string",
    "boolean", "void", "null", "true", "false",
];

proptest! {
    #[test]
    fn reserved_word_with_tail_is_identifier(
        index in 0usize..RESERVED.len(),
        tail in "[a-zA-Z0-9_]{1,8}",
    ) {
        let source = format!("{}{}", RESERVED[index], tail);
        let token = Lexer::new(source.clone(), None).scan_token().unwrap();

        prop_assert_eq!(token.kind, TokenKind::Identifier);
        prop_assert_eq!(token.lexeme, source);
    }

    #[test]
    fn digit_run_is_number(digits in "[0-9]{1,18}") {
        let token = Lexer::new(digits.clone(), None).scan_token().unwrap();

        prop_assert_eq!(token.kind, TokenKind::Number);
        prop_assert_eq!(token.end_offset() as usize, digits.len());
        prop_assert_eq!(token.value, Some(TokenValue::Number(digits.parse::<i64>().unwrap())));
    }

    #[test]
    fn quoted_text_is_string(text in "[^\"]{0,32}") {
        let source = format!("\"{}\"", text);
        let token = Lexer::new(source.clone(), None).scan_token().unwrap();

        prop_assert_eq!(token.kind, TokenKind::String);
        prop_assert_eq!(token.lexeme, source);
        prop_assert_eq!(token.value, Some(TokenValue::String(text)));
    }

    #[test]
    fn lexemes_slice_the_source(source in "[ -~\n\t]{0,64}") {
        if let Ok(tokens) = tokenize(source.clone(), None) {
            let mut last_end = 0;
            for token in &tokens {
                let (start, end) = (token.start_offset() as usize, token.end_offset() as usize);
                prop_assert_eq!(&source[start..end], token.lexeme.as_str());
                prop_assert!(start >= last_end);
                prop_assert!(token.start_line <= token.end_line);
                last_end = end;
            }

            let eof = tokens.last().unwrap();
            prop_assert!(eof.is_eof());
            prop_assert_eq!(eof.start_offset() as usize, source.len());
        }
    }
}
