//! Expression parsing implementation
//!
//! Binary operators are parsed with a precedence ladder, loosest first:
//!
//! ```text
//! expr   ::= term   (('+' | '-') term)*
//! term   ::= comp   (('*' | '/') comp)*
//! comp   ::= bit    (('!' | '=' | '<' | '>') ['='] bit)*
//! bit    ::= factor ('|' factor)*
//! factor ::= STRING | NUMBER | BOOLEAN | IDENT
//! ```
//!
//! A comparison operator immediately followed by `=` fuses into a single
//! two-character operator symbol (`<=`, `>=`, `==`, `!=`). Numbers are
//! integers; there is no floating point.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the
//! [`Parser`] struct.

use crate::parser::ast::AstNode;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};

/// Canonical text of a punctuation kind, used to build operator symbols.
fn operator_text(kind: TokenKind) -> String {
    kind.lexeme().unwrap_or_default().to_string()
}

impl Parser {
    /// Parse an expression (additive level, the loosest binding).
    pub(crate) fn expr(&mut self) -> Result<AstNode, ParseError> {
        let mut node = self.term()?;

        while matches!(self.kind(), TokenKind::Plus | TokenKind::Minus) {
            let location = self.current_location();
            let kind = self.kind();
            self.consume(kind)?;

            let right = self.term()?;
            node = AstNode::BinaryOp {
                op: operator_text(kind),
                left: Box::new(node),
                right: Box::new(right),
                location,
            };
        }

        Ok(node)
    }

    /// Multiplicative level: `*` and `/` bind tighter than `+` and `-`.
    fn term(&mut self) -> Result<AstNode, ParseError> {
        let mut node = self.comparison()?;

        while matches!(self.kind(), TokenKind::Star | TokenKind::Slash) {
            let location = self.current_location();
            let kind = self.kind();
            self.consume(kind)?;

            let right = self.comparison()?;
            node = AstNode::BinaryOp {
                op: operator_text(kind),
                left: Box::new(node),
                right: Box::new(right),
                location,
            };
        }

        Ok(node)
    }

    /// Comparison/equality level. A base symbol (`!`, `=`, `<`, `>`)
    /// followed immediately by `=` fuses into one two-character operator.
    fn comparison(&mut self) -> Result<AstNode, ParseError> {
        let mut node = self.bit()?;

        while matches!(
            self.kind(),
            TokenKind::Bang | TokenKind::Eq | TokenKind::Lt | TokenKind::Gt
        ) {
            let location = self.current_location();
            let kind = self.kind();
            let mut op = operator_text(kind);
            self.consume(kind)?;

            if self.kind() == TokenKind::Eq {
                self.consume(TokenKind::Eq)?;
                op.push('=');
            }

            let right = self.bit()?;
            node = AstNode::BinaryOp {
                op,
                left: Box::new(node),
                right: Box::new(right),
                location,
            };
        }

        Ok(node)
    }

    /// Bitwise-or level, the tightest binary operator.
    fn bit(&mut self) -> Result<AstNode, ParseError> {
        let mut node = self.factor()?;

        while self.kind() == TokenKind::Pipe {
            let location = self.current_location();
            self.consume(TokenKind::Pipe)?;

            let right = self.factor()?;
            node = AstNode::BinaryOp {
                op: operator_text(TokenKind::Pipe),
                left: Box::new(node),
                right: Box::new(right),
                location,
            };
        }

        Ok(node)
    }

    /// Parse a leaf. String, number and boolean literals become literal
    /// nodes; an identifier is consumed but has no node form, so it yields
    /// the no-op placeholder. Any other token also yields the placeholder,
    /// without being consumed — the enclosing statement decides whether the
    /// leftover token is acceptable.
    fn factor(&mut self) -> Result<AstNode, ParseError> {
        let token = self.peek().clone();

        match token.kind {
            TokenKind::String => {
                self.consume(TokenKind::String)?;
                Ok(AstNode::StringLiteral(
                    token.text.unwrap_or_default(),
                    token.location,
                ))
            }
            TokenKind::Number => {
                self.consume(TokenKind::Number)?;
                let text = token.text.unwrap_or_default();
                let value = text.parse::<i32>().map_err(|_| {
                    ParseError::InvalidNumber {
                        text: text.clone(),
                        location: token.location,
                    }
                })?;
                Ok(AstNode::NumberLiteral(value, token.location))
            }
            TokenKind::Boolean => {
                self.consume(TokenKind::Boolean)?;
                let value = token.text.as_deref() == Some("true");
                Ok(AstNode::BooleanLiteral(value, token.location))
            }
            TokenKind::Identifier => {
                self.consume(TokenKind::Identifier)?;
                Ok(AstNode::Empty {
                    location: token.location,
                })
            }
            _ => Ok(AstNode::Empty {
                location: token.location,
            }),
        }
    }
}
