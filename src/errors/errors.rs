use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A scan failure together with the source position it was raised at.
///
/// Displays as the message of the underlying [`ErrorImpl`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    /// 1-based line the error was reported at.
    pub fn line(&self) -> u32 {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { line, .. }
            | ErrorImpl::UnterminatedString { line }
            | ErrorImpl::UnterminatedComment { line }
            | ErrorImpl::NumberParseError { line, .. } => *line,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnterminatedString { .. } => "UnterminatedString",
            ErrorImpl::UnterminatedComment { .. } => "UnterminatedComment",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedString { .. } => {
                ErrorTip::Suggestion(String::from("String literal is missing its closing `\"`"))
            }
            ErrorImpl::UnterminatedComment { .. } => {
                ErrorTip::Suggestion(String::from("Block comment is missing its closing `*/`"))
            }
            ErrorImpl::NumberParseError { token, .. } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("Unexpected token '{token}' at line {line}")]
    UnexpectedToken { token: char, line: u32 },
    #[error("Unterminated string literal starting at line {line}")]
    UnterminatedString { line: u32 },
    #[error("Unterminated block comment starting at line {line}")]
    UnterminatedComment { line: u32 },
    #[error("error parsing number: {token:?} at line {line}")]
    NumberParseError { token: String, line: u32 },
}
