//! Lexical analysis for eduscript.
//!
//! This module contains the scanner that turns source text into tokens for
//! a parser to pull one at a time. It handles:
//!
//! - Recognition of keywords, type names, identifiers, literals and operators
//! - Line and byte-offset tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;
