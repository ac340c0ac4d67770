//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn at(offset: u32) -> Position {
    Position(offset, Arc::new("test.edu".to_string()))
}

#[test]
fn test_unexpected_token_message() {
    let error = Error::new(ErrorImpl::UnexpectedToken { token: '@', line: 1 }, at(0));

    assert_eq!(error.to_string(), "Unexpected token '@' at line 1");
    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.line(), 1);
}

#[test]
fn test_error_position() {
    let error = Error::new(ErrorImpl::UnexpectedToken { token: '#', line: 3 }, at(42));

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position().1.as_str(), "test.edu");
}

#[test]
fn test_unterminated_errors() {
    let string = Error::new(ErrorImpl::UnterminatedString { line: 2 }, at(5));
    assert_eq!(string.get_error_name(), "UnterminatedString");
    assert_eq!(string.to_string(), "Unterminated string literal starting at line 2");
    assert_eq!(string.line(), 2);

    let comment = Error::new(ErrorImpl::UnterminatedComment { line: 7 }, at(9));
    assert_eq!(comment.get_error_name(), "UnterminatedComment");
    assert_eq!(comment.to_string(), "Unterminated block comment starting at line 7");
    assert_eq!(comment.line(), 7);
}

#[test]
fn test_number_parse_error() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "99999999999999999999".to_string(),
            line: 4,
        },
        at(0),
    );

    assert_eq!(error.get_error_name(), "NumberParseError");
    assert_eq!(error.line(), 4);
    assert!(matches!(error.kind(), ErrorImpl::NumberParseError { .. }));
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(ErrorImpl::UnexpectedToken { token: '@', line: 1 }, at(0));

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(ErrorImpl::UnterminatedComment { line: 1 }, at(0));

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("*/")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
