//! Statement parsing implementation
//!
//! This module handles the statement-level productions:
//!
//! ```text
//! import_stmt ::= 'import' IDENT (':' IDENT)* ';'
//! let_stmt    ::= 'let' IDENT '=' expr ';'
//! ident_stmt  ::= IDENT ('=' expr | '(' args? ')' | ε)        (';' by caller)
//! fun_def     ::= 'fun' IDENT '(' params? ')' '{' body '}'
//! if_stmt     ::= 'if' expr '{' body '}'
//!                 ('else' (if_stmt | '{' body '}'))?
//! ```
//!
//! All parsing methods are implemented as `pub(crate)` methods on the
//! [`Parser`] struct.

use crate::parser::ast::{AstNode, SourceLocation};
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse `import a:b:c;` into the ordered segment list.
    pub(crate) fn import_statement(&mut self) -> Result<AstNode, ParseError> {
        let location = self.current_location();
        self.consume(TokenKind::Import)?;

        let mut path = vec![self.expect_identifier()?];
        while self.kind() == TokenKind::Colon {
            self.consume(TokenKind::Colon)?;
            path.push(self.expect_identifier()?);
        }
        self.consume(TokenKind::Semicolon)?;

        Ok(AstNode::Import { path, location })
    }

    /// Parse `let name = value;`
    pub(crate) fn let_statement(&mut self) -> Result<AstNode, ParseError> {
        let location = self.current_location();
        self.consume(TokenKind::Let)?;
        let name = self.expect_identifier()?;
        self.consume(TokenKind::Eq)?;
        let value = Box::new(self.expr()?);
        self.consume(TokenKind::Semicolon)?;

        Ok(AstNode::Let {
            name,
            value,
            location,
        })
    }

    /// Parse a statement led by an identifier, dispatching on the follow
    /// token: `=` makes it a reassignment, `(` a function call. Any other
    /// follow token yields a no-op placeholder rather than an error. The
    /// terminating `;` is consumed by the caller.
    pub(crate) fn identifier_statement(
        &mut self,
    ) -> Result<AstNode, ParseError> {
        let location = self.current_location();
        let name = self.expect_identifier()?;

        match self.kind() {
            TokenKind::Eq => self.reassignment_statement(name, location),
            TokenKind::LParen => self.function_invoke(name, location),
            _ => Ok(AstNode::Empty { location }),
        }
    }

    /// Parse the `= value` tail of a reassignment.
    fn reassignment_statement(
        &mut self,
        name: String,
        location: SourceLocation,
    ) -> Result<AstNode, ParseError> {
        self.consume(TokenKind::Eq)?;
        let value = Box::new(self.expr()?);

        Ok(AstNode::Reassignment {
            name,
            value,
            location,
        })
    }

    /// Parse the `(args)` tail of a function call. Argument order is call
    /// order and is preserved.
    fn function_invoke(
        &mut self,
        name: String,
        location: SourceLocation,
    ) -> Result<AstNode, ParseError> {
        self.consume(TokenKind::LParen)?;
        let mut args = Vec::new();

        if self.kind() != TokenKind::RParen {
            args.push(self.expr()?);
            while self.kind() == TokenKind::Comma {
                self.consume(TokenKind::Comma)?;
                args.push(self.expr()?);
            }
        }
        self.consume(TokenKind::RParen)?;

        Ok(AstNode::FunctionInvoke {
            name,
            args,
            location,
        })
    }

    /// Parse `fun name(params) { body }`; parameters are comma-separated
    /// identifiers, zero or more.
    pub(crate) fn function_definition(
        &mut self,
    ) -> Result<AstNode, ParseError> {
        let location = self.current_location();
        self.consume(TokenKind::Fun)?;
        let name = self.expect_identifier()?;

        self.consume(TokenKind::LParen)?;
        let mut params = Vec::new();
        if self.kind() != TokenKind::RParen {
            params.push(self.expect_identifier()?);
            while self.kind() == TokenKind::Comma {
                self.consume(TokenKind::Comma)?;
                params.push(self.expect_identifier()?);
            }
        }
        self.consume(TokenKind::RParen)?;

        self.consume(TokenKind::LBrace)?;
        let body = self.body()?;
        self.consume(TokenKind::RBrace)?;

        Ok(AstNode::FunctionDef {
            name,
            params,
            body,
            location,
        })
    }

    /// Parse `if cond { ... }` with an optional `else if` chain or `else`
    /// arm. An `else if` recurses into a nested [`AstNode::If`] and consumes
    /// the else slot, so `else_if` and a non-empty `else_body` never
    /// coexist.
    pub(crate) fn if_statement(&mut self) -> Result<AstNode, ParseError> {
        let location = self.current_location();
        self.consume(TokenKind::If)?;
        let condition = Box::new(self.expr()?);

        self.consume(TokenKind::LBrace)?;
        let then_body = self.body()?;
        self.consume(TokenKind::RBrace)?;

        let mut else_body = Vec::new();
        let mut else_if = None;

        if self.kind() == TokenKind::Else {
            self.consume(TokenKind::Else)?;
            if self.kind() == TokenKind::If {
                else_if = Some(Box::new(self.if_statement()?));
            } else {
                self.consume(TokenKind::LBrace)?;
                else_body = self.body()?;
                self.consume(TokenKind::RBrace)?;
            }
        }

        Ok(AstNode::If {
            condition,
            then_body,
            else_body,
            else_if,
            location,
        })
    }

    /// Parse statements inside braces. Only `let` and `if` have body forms
    /// so far; anything else is skipped one token at a time, like the
    /// top-level fallback. The loop also stops at end of input so an
    /// unclosed brace cannot spin forever.
    // TODO: support reassignments and calls inside function bodies
    pub(crate) fn body(&mut self) -> Result<Vec<AstNode>, ParseError> {
        let mut statements = Vec::new();

        while self.kind() != TokenKind::RBrace && !self.is_at_end() {
            match self.kind() {
                TokenKind::Let => statements.push(self.let_statement()?),
                TokenKind::If => statements.push(self.if_statement()?),
                _ => self.advance(),
            }
        }

        Ok(statements)
    }
}
