use std::sync::Arc;

use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, TokenValue, RESERVED_LOOKUP};

/// Settings for a scan session.
#[derive(Debug, Clone, Default)]
pub struct LexerConfig {
    /// Name reported in token spans and diagnostics. Defaults to `shell`.
    pub file: Option<String>,
    /// When set, an unterminated string literal runs to end of input and an
    /// unterminated block comment silently ends there, instead of raising
    /// `UnterminatedString` / `UnterminatedComment`.
    pub lenient_terminators: bool,
}

/// A single scan session over one source string.
///
/// Call [`Lexer::scan_token`] until it yields an `EOF` token; further calls keep
/// returning `EOF`. After an error the position is unspecified and the session
/// has to be restarted with [`Lexer::init`].
#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
    line: u32,
    start: usize,
    start_line: u32,
    file: Arc<String>,
    lenient_terminators: bool,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        Lexer::with_config(
            source,
            LexerConfig {
                file,
                ..LexerConfig::default()
            },
        )
    }

    pub fn with_config(source: String, config: LexerConfig) -> Lexer {
        let file_name = Arc::new(config.file.unwrap_or_else(|| String::from("shell")));

        let mut lexer = Lexer {
            source: String::new(),
            pos: 0,
            line: 1,
            start: 0,
            start_line: 1,
            file: file_name,
            lenient_terminators: config.lenient_terminators,
        };
        lexer.init(source);
        lexer
    }

    /// Restarts the session on `source` at offset 0, line 1.
    pub fn init(&mut self, source: String) {
        debug!(file = %self.file, len = source.len(), "starting scan session");

        self.source = source;
        self.pos = 0;
        self.line = 1;
        self.start = 0;
        self.start_line = 1;
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn file(&self) -> &Arc<String> {
        &self.file
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn scan_token(&mut self) -> Result<Token, Error> {
        self.skip_trivia()?;

        self.start = self.pos;
        self.start_line = self.line;

        let token = match self.advance() {
            None => self.make_token(TokenKind::EOF, None),
            Some(c) if c.is_ascii_digit() => self.number()?,
            Some(b'"') => self.string()?,
            Some(c) => {
                if let Some(kind) = self.symbol(c) {
                    self.make_token(kind, None)
                } else if let Some(kind) = self.keyword(c) {
                    self.keyword_token(kind)
                } else if is_identifier_start(c) {
                    self.identifier()
                } else {
                    return Err(self.unexpected());
                }
            }
        };

        trace!(
            kind = %token.kind,
            lexeme = %token.lexeme,
            line = token.start_line,
            "scanned token"
        );
        Ok(token)
    }

    /// Skips whitespace and comments in any interleaving.
    fn skip_trivia(&mut self) -> Result<(), Error> {
        loop {
            match (self.peek(), self.peek_at(1)) {
                (Some(b'\n'), _) => {
                    self.pos += 1;
                    self.line += 1;
                }
                (Some(b' ' | b'\t' | b'\r'), _) => self.pos += 1,
                (Some(b'/'), Some(b'/')) => self.skip_line_comment(),
                (Some(b'/'), Some(b'*')) => self.skip_block_comment()?,
                _ => return Ok(()),
            }
        }
    }

    // Stops before the newline so the trivia loop counts it.
    fn skip_line_comment(&mut self) {
        while self.peek().is_some_and(|c| c != b'\n') {
            self.pos += 1;
        }
    }

    fn skip_block_comment(&mut self) -> Result<(), Error> {
        let opened_at = self.pos;
        let opened_line = self.line;
        self.pos += 2;

        loop {
            match (self.peek(), self.peek_at(1)) {
                (Some(b'*'), Some(b'/')) => {
                    self.pos += 2;
                    return Ok(());
                }
                (Some(c), _) => {
                    if c == b'\n' {
                        self.line += 1;
                    }
                    self.pos += 1;
                }
                (None, _) if self.lenient_terminators => {
                    debug!(line = opened_line, "block comment runs to end of input");
                    return Ok(());
                }
                (None, _) => {
                    return Err(self.error(
                        ErrorImpl::UnterminatedComment { line: opened_line },
                        opened_at,
                    ))
                }
            }
        }
    }

    fn symbol(&mut self, c: u8) -> Option<TokenKind> {
        let kind = match c {
            b'.' => TokenKind::Dot,
            b':' => TokenKind::Colon,
            b';' => TokenKind::Semicolon,
            b',' => TokenKind::Comma,
            b'(' => TokenKind::OpenParen,
            b')' => TokenKind::CloseParen,
            b'{' => TokenKind::OpenCurly,
            b'}' => TokenKind::CloseCurly,
            b'[' => TokenKind::OpenBracket,
            b']' => TokenKind::CloseBracket,

            b'+' | b'-' => TokenKind::Additive,
            b'*' | b'/' => TokenKind::Multiplicative,

            b'=' => {
                if self.match_char(b'=') {
                    TokenKind::Equals
                } else {
                    TokenKind::Assignment
                }
            }
            b'!' => {
                if self.match_char(b'=') {
                    TokenKind::NotEquals
                } else {
                    TokenKind::Not
                }
            }

            _ => return None,
        };

        Some(kind)
    }

    /// Tries the reserved words starting with `c`, consuming the rest of the
    /// word on a match.
    fn keyword(&mut self, c: u8) -> Option<TokenKind> {
        let candidates = RESERVED_LOOKUP.get(&c)?;

        for (suffix, kind) in candidates {
            if self.followed_by(suffix) {
                self.pos += suffix.len();
                return Some(*kind);
            }
        }

        None
    }

    fn keyword_token(&self, kind: TokenKind) -> Token {
        if kind == TokenKind::Boolean {
            let value = &self.source[self.start..self.pos] == "true";
            return self.make_token(kind, Some(TokenValue::Boolean(value)));
        }

        self.make_token(kind, None)
    }

    /// A keyword only matches when it is not the prefix of a longer identifier,
    /// so `letter` stays an identifier rather than `let` + `ter`.
    fn followed_by(&self, suffix: &str) -> bool {
        let rest = &self.source.as_bytes()[self.pos..];

        rest.starts_with(suffix.as_bytes())
            && !rest
                .get(suffix.len())
                .is_some_and(|&c| is_identifier_continue(c))
    }

    fn identifier(&mut self) -> Token {
        while self.peek().is_some_and(is_identifier_continue) {
            self.pos += 1;
        }

        self.make_token(TokenKind::Identifier, None)
    }

    fn number(&mut self) -> Result<Token, Error> {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
        }

        let digits = &self.source[self.start..self.pos];
        match digits.parse::<i64>() {
            Ok(value) => Ok(self.make_token(TokenKind::Number, Some(TokenValue::Number(value)))),
            Err(_) => Err(self.error(
                ErrorImpl::NumberParseError {
                    token: digits.to_string(),
                    line: self.start_line,
                },
                self.start,
            )),
        }
    }

    // The opening quote has already been consumed. No escape sequences.
    // Newlines inside the literal advance the line counter, so a multi-line
    // string ends on a later line than it starts.
    fn string(&mut self) -> Result<Token, Error> {
        loop {
            match self.advance() {
                Some(b'"') => break,
                Some(b'\n') => self.line += 1,
                Some(_) => {}
                None if self.lenient_terminators => {
                    debug!(line = self.start_line, "string literal runs to end of input");
                    let value = self.source[self.start + 1..].to_string();
                    return Ok(self.make_token(TokenKind::String, Some(TokenValue::String(value))));
                }
                None => {
                    return Err(self.error(
                        ErrorImpl::UnterminatedString {
                            line: self.start_line,
                        },
                        self.start,
                    ))
                }
            }
        }

        let value = self.source[self.start + 1..self.pos - 1].to_string();
        Ok(self.make_token(TokenKind::String, Some(TokenValue::String(value))))
    }

    fn unexpected(&self) -> Error {
        let token = self.source[self.start..].chars().next().unwrap_or('\0');

        self.error(
            ErrorImpl::UnexpectedToken {
                token,
                line: self.start_line,
            },
            self.start,
        )
    }

    fn error(&self, kind: ErrorImpl, offset: usize) -> Error {
        debug!(file = %self.file, offset, "{}", kind);
        Error::new(kind, self.position(offset))
    }

    fn make_token(&self, kind: TokenKind, value: Option<TokenValue>) -> Token {
        MK_TOKEN!(
            kind,
            self.source[self.start..self.pos].to_string(),
            value,
            (self.start_line, self.line),
            Span {
                start: self.position(self.start),
                end: self.position(self.pos),
            }
        )
    }

    fn position(&self, offset: usize) -> Position {
        Position(offset as u32, Arc::clone(&self.file))
    }

    fn match_char(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            return true;
        }

        false
    }

    fn advance(&mut self) -> Option<u8> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    fn peek_at(&self, n: usize) -> Option<u8> {
        self.source.as_bytes().get(self.pos + n).copied()
    }
}

fn is_identifier_start(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

fn is_identifier_continue(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_'
}

/// Scans `source` to completion. The result always ends with a single `EOF` token.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.scan_token()?;
        let is_eof = token.is_eof();
        tokens.push(token);

        if is_eof {
            break;
        }
    }

    Ok(tokens)
}
