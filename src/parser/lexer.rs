//! Lexer (tokenizer) for Sprig source code
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the
//! parser. Scanning is a single linear pass: line comments (`--`) are
//! skipped, string/number/identifier runs each fire on their own character
//! class, and single-character punctuation is resolved through a static
//! lexeme table. Characters that match nothing are dropped silently.

use super::ast::SourceLocation;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

/// All token categories produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    // Keywords
    Let,
    Fun,
    If,
    Else,
    While,
    For,
    Asm,
    Struct,
    Import,

    // Literal classes
    Number,
    Boolean,
    String,
    Identifier,

    // Punctuation and operators
    Plus,      // +
    Minus,     // -
    Star,      // *
    Slash,     // /
    Percent,   // %
    Eq,        // =
    LParen,    // (
    RParen,    // )
    LBrace,    // {
    RBrace,    // }
    Lt,        // <
    Gt,        // >
    Comma,     // ,
    Semicolon, // ;
    Colon,     // :
    Pipe,      // |
    Bang,      // !

    // End of input
    Eof,
}

impl TokenKind {
    /// Canonical source text for keyword and punctuation kinds. Literal
    /// classes and end-of-input have no fixed lexeme.
    pub fn lexeme(self) -> Option<&'static str> {
        match self {
            TokenKind::Let => Some("let"),
            TokenKind::Fun => Some("fun"),
            TokenKind::If => Some("if"),
            TokenKind::Else => Some("else"),
            TokenKind::While => Some("while"),
            TokenKind::For => Some("for"),
            TokenKind::Asm => Some("asm"),
            TokenKind::Struct => Some("struct"),
            TokenKind::Import => Some("import"),
            TokenKind::Plus => Some("+"),
            TokenKind::Minus => Some("-"),
            TokenKind::Star => Some("*"),
            TokenKind::Slash => Some("/"),
            TokenKind::Percent => Some("%"),
            TokenKind::Eq => Some("="),
            TokenKind::LParen => Some("("),
            TokenKind::RParen => Some(")"),
            TokenKind::LBrace => Some("{"),
            TokenKind::RBrace => Some("}"),
            TokenKind::Lt => Some("<"),
            TokenKind::Gt => Some(">"),
            TokenKind::Comma => Some(","),
            TokenKind::Semicolon => Some(";"),
            TokenKind::Colon => Some(":"),
            TokenKind::Pipe => Some("|"),
            TokenKind::Bang => Some("!"),
            TokenKind::Number
            | TokenKind::Boolean
            | TokenKind::String
            | TokenKind::Identifier
            | TokenKind::Eof => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number => write!(f, "number literal"),
            TokenKind::Boolean => write!(f, "boolean literal"),
            TokenKind::String => write!(f, "string literal"),
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::Eof => write!(f, "end of input"),
            other => match other.lexeme() {
                Some(lexeme) => write!(f, "'{}'", lexeme),
                None => write!(f, "{:?}", other),
            },
        }
    }
}

/// A classified, positioned lexical unit.
///
/// `location` is the scanner position at the end of the lexeme.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    /// Raw lexeme. `None` only for the end-of-input token.
    pub text: Option<String>,
    pub location: SourceLocation,
}

/// Reserved words, matched by exact full-lexeme equality once an identifier
/// run has been completely scanned. `true` and `false` classify as boolean
/// literals rather than keywords.
fn keyword_kind(text: &str) -> Option<TokenKind> {
    static KEYWORDS: OnceLock<FxHashMap<&'static str, TokenKind>> =
        OnceLock::new();
    let table = KEYWORDS.get_or_init(|| {
        let mut table = FxHashMap::default();
        table.insert("let", TokenKind::Let);
        table.insert("fun", TokenKind::Fun);
        table.insert("if", TokenKind::If);
        table.insert("else", TokenKind::Else);
        table.insert("while", TokenKind::While);
        table.insert("for", TokenKind::For);
        table.insert("asm", TokenKind::Asm);
        table.insert("struct", TokenKind::Struct);
        table.insert("import", TokenKind::Import);
        table.insert("true", TokenKind::Boolean);
        table.insert("false", TokenKind::Boolean);
        table
    });
    table.get(text).copied()
}

/// Single-character punctuation lexemes.
fn punctuation_kind(ch: char) -> Option<TokenKind> {
    static PUNCTUATION: OnceLock<FxHashMap<char, TokenKind>> = OnceLock::new();
    let table = PUNCTUATION.get_or_init(|| {
        let mut table = FxHashMap::default();
        table.insert('+', TokenKind::Plus);
        table.insert('-', TokenKind::Minus);
        table.insert('*', TokenKind::Star);
        table.insert('/', TokenKind::Slash);
        table.insert('%', TokenKind::Percent);
        table.insert('=', TokenKind::Eq);
        table.insert('(', TokenKind::LParen);
        table.insert(')', TokenKind::RParen);
        table.insert('{', TokenKind::LBrace);
        table.insert('}', TokenKind::RBrace);
        table.insert('<', TokenKind::Lt);
        table.insert('>', TokenKind::Gt);
        table.insert(',', TokenKind::Comma);
        table.insert(';', TokenKind::Semicolon);
        table.insert(':', TokenKind::Colon);
        table.insert('|', TokenKind::Pipe);
        table.insert('!', TokenKind::Bang);
        table
    });
    table.get(&ch).copied()
}

/// Lexer error type
#[derive(Debug)]
pub struct LexError {
    pub message: String,
    pub location: SourceLocation,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lexer error at line {}, column {}: {}",
            self.location.line, self.location.column, self.message
        )
    }
}

impl std::error::Error for LexError {}

/// Lexer for Sprig source code
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 0,
        }
    }

    /// Tokenize the entire input.
    ///
    /// The returned sequence is in source order and always ends with exactly
    /// one [`TokenKind::Eof`] token. The only error is a malformed number
    /// literal, which aborts the run.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        while !self.is_at_end() {
            self.skip_whitespace();

            // `--` starts a line comment running up to the next newline.
            if self.peek() == Some('-') && self.peek_ahead(1) == Some('-') {
                self.skip_line_comment();
                continue;
            }

            // The scanners below trigger on disjoint character classes, so
            // at most one fires per position. The checks are independent on
            // purpose; nothing relies on early exit between them.
            if self.peek() == Some('"') {
                tokens.push(self.string());
            }
            if self.peek().is_some_and(|ch| ch.is_ascii_digit()) {
                tokens.push(self.number()?);
            }
            if self.peek().is_some_and(|ch| ch.is_alphabetic()) {
                tokens.push(self.identifier());
            }

            if let Some(ch) = self.peek() {
                match punctuation_kind(ch) {
                    Some(kind) => {
                        self.advance();
                        tokens.push(Token {
                            kind,
                            text: Some(ch.to_string()),
                            location: self.current_location(),
                        });
                    }
                    // Unmatched characters are dropped, not reported.
                    None => {
                        self.advance();
                    }
                }
            }
        }

        tokens.push(Token {
            kind: TokenKind::Eof,
            text: None,
            location: self.current_location(),
        });

        Ok(tokens)
    }

    /// Scan a string literal. A backslash escapes the following character by
    /// taking it verbatim; escape codes are not interpreted. The closing
    /// quote is consumed and excluded from the value. A string that reaches
    /// end of input without a closing quote simply ends there.
    fn string(&mut self) -> Token {
        self.advance(); // opening quote
        let mut value = String::new();

        while let Some(ch) = self.peek() {
            if ch == '"' {
                break;
            }
            if ch == '\\' {
                self.advance();
                if let Some(escaped) = self.peek() {
                    value.push(escaped);
                    self.advance();
                }
                continue;
            }
            value.push(ch);
            self.advance();
        }

        self.advance(); // closing quote, absent at end of input

        Token {
            kind: TokenKind::String,
            text: Some(value),
            location: self.current_location(),
        }
    }

    /// Scan a number literal: a maximal alphanumeric/`.`/`_` run, validated
    /// against the numeral grammar afterwards.
    fn number(&mut self) -> Result<Token, LexError> {
        let mut value = String::new();

        while let Some(ch) = self.peek() {
            if ch.is_alphanumeric() || ch == '.' || ch == '_' {
                value.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let location = self.current_location();
        if !is_valid_number(&value) {
            return Err(LexError {
                message: format!("Illegal number format: {}", value),
                location,
            });
        }

        Ok(Token {
            kind: TokenKind::Number,
            text: Some(value),
            location,
        })
    }

    /// Scan an identifier or keyword: a maximal letter/digit/`_` run,
    /// classified against the keyword table only once fully scanned, so a
    /// keyword is never recognized as a prefix of a longer identifier.
    fn identifier(&mut self) -> Token {
        let mut value = String::new();

        while let Some(ch) = self.peek() {
            if ch.is_alphanumeric() || ch == '_' {
                value.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let location = self.current_location();
        let kind = keyword_kind(&value).unwrap_or(TokenKind::Identifier);

        Token {
            kind,
            text: Some(value),
            location,
        }
    }

    /// Skip whitespace, keeping line/column tracking current.
    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.advance();
        }
    }

    /// Skip a `--` comment up to, but not past, the end of the line.
    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.peek() {
            if ch == '\n' || ch == '\r' {
                break;
            }
            self.advance();
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Peek ahead n characters
    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.input.get(self.position + n).copied()
    }

    /// Advance to the next character. Every consumed character bumps the
    /// column; a newline control character bumps the line and resets the
    /// column to 0 instead.
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' || ch == '\r' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    /// Check if at end of input
    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Get current source location
    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

/// Numeral grammar: a decimal run (a digit followed by any mix of digits,
/// `.` and `_`) or a bounded hex-style literal (a digit, `x`, then up to
/// eight alphanumerics).
fn is_valid_number(text: &str) -> bool {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_ascii_digit() {
        return false;
    }

    let rest = chars.as_str();
    if let Some(tail) = rest.strip_prefix('x') {
        return tail.chars().count() <= 8
            && tail.chars().all(|ch| ch.is_ascii_alphanumeric());
    }

    rest.chars()
        .all(|ch| ch.is_ascii_digit() || ch == '.' || ch == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let mut lexer = Lexer::new(source);
        lexer
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|token| token.kind)
            .collect()
    }

    #[test]
    fn test_simple_tokens() {
        let mut lexer = Lexer::new("let x = 5;");
        let tokens = lexer.tokenize().unwrap();

        assert_eq!(tokens.len(), 6); // five lexical units plus end of input
        assert_eq!(tokens[0].kind, TokenKind::Let);
        assert!(matches!(&tokens[1], Token { kind: TokenKind::Identifier, text: Some(t), .. } if t == "x"));
        assert_eq!(tokens[2].kind, TokenKind::Eq);
        assert!(matches!(&tokens[3], Token { kind: TokenKind::Number, text: Some(t), .. } if t == "5"));
        assert_eq!(tokens[4].kind, TokenKind::Semicolon);
        assert_eq!(tokens[5].kind, TokenKind::Eof);
        assert_eq!(tokens[5].text, None);
    }

    #[test]
    fn test_keyword_requires_full_lexeme() {
        let mut lexer = Lexer::new("let");
        let tokens = lexer.tokenize().unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Let);
        assert_eq!(tokens[0].location, SourceLocation::new(1, 3));

        let mut lexer = Lexer::new("letter");
        let tokens = lexer.tokenize().unwrap();
        assert!(matches!(&tokens[0], Token { kind: TokenKind::Identifier, text: Some(t), .. } if t == "letter"));
    }

    #[test]
    fn test_all_keywords() {
        assert_eq!(
            kinds("let fun if else while for asm struct import"),
            vec![
                TokenKind::Let,
                TokenKind::Fun,
                TokenKind::If,
                TokenKind::Else,
                TokenKind::While,
                TokenKind::For,
                TokenKind::Asm,
                TokenKind::Struct,
                TokenKind::Import,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_boolean_literals() {
        let mut lexer = Lexer::new("true false");
        let tokens = lexer.tokenize().unwrap();
        assert!(matches!(&tokens[0], Token { kind: TokenKind::Boolean, text: Some(t), .. } if t == "true"));
        assert!(matches!(&tokens[1], Token { kind: TokenKind::Boolean, text: Some(t), .. } if t == "false"));
    }

    #[test]
    fn test_string_escape_taken_verbatim() {
        let mut lexer = Lexer::new(r#""a\"b""#);
        let tokens = lexer.tokenize().unwrap();

        assert_eq!(tokens.len(), 2);
        assert!(matches!(&tokens[0], Token { kind: TokenKind::String, text: Some(t), .. } if t == "a\"b"));
    }

    #[test]
    fn test_string_escape_no_interpretation() {
        // `\n` stays a literal 'n', not a newline
        let mut lexer = Lexer::new(r#""a\nb""#);
        let tokens = lexer.tokenize().unwrap();
        assert!(matches!(&tokens[0], Token { text: Some(t), .. } if t == "anb"));
    }

    #[test]
    fn test_number_formats() {
        let mut lexer = Lexer::new("123");
        let tokens = lexer.tokenize().unwrap();
        assert!(matches!(&tokens[0], Token { kind: TokenKind::Number, text: Some(t), .. } if t == "123"));

        // underscores and dots are part of the decimal run
        let mut lexer = Lexer::new("1_000 1.5");
        let tokens = lexer.tokenize().unwrap();
        assert!(matches!(&tokens[0], Token { text: Some(t), .. } if t == "1_000"));
        assert!(matches!(&tokens[1], Token { text: Some(t), .. } if t == "1.5"));

        // hex-style literal: digit, x, up to eight alphanumerics
        let mut lexer = Lexer::new("0xff");
        let tokens = lexer.tokenize().unwrap();
        assert!(matches!(&tokens[0], Token { kind: TokenKind::Number, text: Some(t), .. } if t == "0xff"));
    }

    #[test]
    fn test_illegal_number_is_fatal() {
        let mut lexer = Lexer::new("12a");
        let err = lexer.tokenize().unwrap_err();
        assert!(err.message.contains("Illegal number format"));

        // more than eight characters after the x
        let mut lexer = Lexer::new("0x123456789");
        assert!(lexer.tokenize().is_err());
    }

    #[test]
    fn test_line_comment_skipped() {
        assert_eq!(
            kinds("let a = 1; -- trailing note\nlet b = 2;"),
            vec![
                TokenKind::Let,
                TokenKind::Identifier,
                TokenKind::Eq,
                TokenKind::Number,
                TokenKind::Semicolon,
                TokenKind::Let,
                TokenKind::Identifier,
                TokenKind::Eq,
                TokenKind::Number,
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_unmatched_character_dropped() {
        // `@` and `#` have no lexeme; they vanish without an error
        assert_eq!(
            kinds("let @ x #"),
            vec![TokenKind::Let, TokenKind::Identifier, TokenKind::Eof]
        );
    }

    #[test]
    fn test_punctuation_table() {
        assert_eq!(
            kinds("+ - * / % = ( ) { } < > , ; : | !"),
            vec![
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Star,
                TokenKind::Slash,
                TokenKind::Percent,
                TokenKind::Eq,
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::LBrace,
                TokenKind::RBrace,
                TokenKind::Lt,
                TokenKind::Gt,
                TokenKind::Comma,
                TokenKind::Semicolon,
                TokenKind::Colon,
                TokenKind::Pipe,
                TokenKind::Bang,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_positions_monotonic() {
        let source = "let a = 1;\nlet b = \"two\";\nfun f() { let c = 3; }\n";
        let mut lexer = Lexer::new(source);
        let tokens = lexer.tokenize().unwrap();

        for pair in tokens.windows(2) {
            let first = (pair[0].location.line, pair[0].location.column);
            let second = (pair[1].location.line, pair[1].location.column);
            assert!(
                first <= second,
                "token at {:?} precedes token at {:?}",
                first,
                second
            );
        }
    }

    #[test]
    fn test_empty_input() {
        let mut lexer = Lexer::new("");
        let tokens = lexer.tokenize().unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Eof);
        assert_eq!(tokens[0].location, SourceLocation::new(1, 0));
    }

    #[test]
    fn test_unterminated_string_ends_at_input_end() {
        let mut lexer = Lexer::new("\"abc");
        let tokens = lexer.tokenize().unwrap();
        assert!(matches!(&tokens[0], Token { kind: TokenKind::String, text: Some(t), .. } if t == "abc"));
        assert_eq!(tokens[1].kind, TokenKind::Eof);
    }
}
