use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    /// Reserved words keyed by their first letter.
    ///
    /// Each entry holds the fixed suffixes that may follow that letter, tried
    /// in order. This is a closed-set table rather than a trie: a letter only
    /// ever has a handful of candidates, so a linear check per letter is enough.
    pub static ref RESERVED_LOOKUP: HashMap<u8, Vec<(&'static str, TokenKind)>> = {
        let mut map = HashMap::new();
        map.insert(b'b', vec![("reak", TokenKind::Break), ("oolean", TokenKind::Type)]);
        map.insert(b'c', vec![("ontinue", TokenKind::Continue)]);
        map.insert(b'e', vec![("lse", TokenKind::Else)]);
        map.insert(b'f', vec![("unction", TokenKind::Function), ("alse", TokenKind::Boolean)]);
        map.insert(b'i', vec![("f", TokenKind::If)]);
        map.insert(b'l', vec![("et", TokenKind::Let)]);
        map.insert(b'n', vec![("umber", TokenKind::Type), ("ull", TokenKind::Type)]);
        map.insert(b'r', vec![("eturn", TokenKind::Return)]);
        map.insert(b's', vec![("tring", TokenKind::Type)]);
        map.insert(b't', vec![("rue", TokenKind::Boolean)]);
        map.insert(b'v', vec![("oid", TokenKind::Type)]);
        map.insert(b'w', vec![("hile", TokenKind::While)]);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    // Symbols
    Dot,
    Colon,
    Semicolon,
    Comma,
    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    OpenBracket,
    CloseBracket,

    Additive,       // + -
    Multiplicative, // * /

    Not,       // !
    Equals,    // ==
    NotEquals, // !=

    Assignment, // =

    // Literals
    Number,
    String,
    Boolean,

    // Reserved
    Let,
    Function,
    If,
    Else,
    While,
    Return,
    Break,
    Continue,

    /// Built-in type names: `number`, `string`, `boolean`, `void`, `null`.
    Type,

    Identifier,
    EOF,
}

impl TokenKind {
    pub const ALL: [TokenKind; 30] = [
        TokenKind::Dot,
        TokenKind::Colon,
        TokenKind::Semicolon,
        TokenKind::Comma,
        TokenKind::OpenParen,
        TokenKind::CloseParen,
        TokenKind::OpenCurly,
        TokenKind::CloseCurly,
        TokenKind::OpenBracket,
        TokenKind::CloseBracket,
        TokenKind::Additive,
        TokenKind::Multiplicative,
        TokenKind::Not,
        TokenKind::Equals,
        TokenKind::NotEquals,
        TokenKind::Assignment,
        TokenKind::Number,
        TokenKind::String,
        TokenKind::Boolean,
        TokenKind::Let,
        TokenKind::Function,
        TokenKind::If,
        TokenKind::Else,
        TokenKind::While,
        TokenKind::Return,
        TokenKind::Break,
        TokenKind::Continue,
        TokenKind::Type,
        TokenKind::Identifier,
        TokenKind::EOF,
    ];

    /// Canonical name of the category: the symbol itself for punctuation and
    /// operators, a capitalised word for everything else.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Dot => ".",
            TokenKind::Colon => ":",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::OpenCurly => "{",
            TokenKind::CloseCurly => "}",
            TokenKind::OpenBracket => "[",
            TokenKind::CloseBracket => "]",
            TokenKind::Additive => "+",
            TokenKind::Multiplicative => "*",
            TokenKind::Not => "!",
            TokenKind::Equals => "==",
            TokenKind::NotEquals => "!=",
            TokenKind::Assignment => "=",
            TokenKind::Number => "Number",
            TokenKind::String => "String",
            TokenKind::Boolean => "Boolean",
            TokenKind::Let => "Let",
            TokenKind::Function => "Function",
            TokenKind::If => "If",
            TokenKind::Else => "Else",
            TokenKind::While => "While",
            TokenKind::Return => "Return",
            TokenKind::Break => "Break",
            TokenKind::Continue => "Continue",
            TokenKind::Type => "Type",
            TokenKind::Identifier => "Identifier",
            TokenKind::EOF => "Eof",
        }
    }

    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Let
                | TokenKind::Function
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::While
                | TokenKind::Return
                | TokenKind::Break
                | TokenKind::Continue
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Literal payload carried by `Number`, `String` and `Boolean` tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenValue {
    Number(i64),
    String(String),
    Boolean(bool),
}

impl Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenValue::Number(n) => write!(f, "{}", n),
            TokenValue::String(s) => write!(f, "{:?}", s),
            TokenValue::Boolean(b) => write!(f, "{}", b),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source text, `source[span.start.0..span.end.0]`.
    pub lexeme: String,
    pub value: Option<TokenValue>,
    pub start_line: u32,
    pub end_line: u32,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Token {{\nkind: {},\nlexeme: {:?},\nlines: {}-{}}}",
            self.kind, self.lexeme, self.start_line, self.end_line
        )
    }
}

impl Token {
    pub fn start_offset(&self) -> u32 {
        self.span.start.0
    }

    pub fn end_offset(&self) -> u32 {
        self.span.end.0
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EOF
    }

    /// One-line summary used by the token dump.
    pub fn debug(&self) -> String {
        match &self.value {
            Some(value) => format!(
                "{}:{}..{} {} ({})",
                self.start_line,
                self.start_offset(),
                self.end_offset(),
                self.kind,
                value
            ),
            None => format!(
                "{}:{}..{} {} {:?}",
                self.start_line,
                self.start_offset(),
                self.end_offset(),
                self.kind,
                self.lexeme
            ),
        }
    }
}
