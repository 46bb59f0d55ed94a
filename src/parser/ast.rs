// AST (Abstract Syntax Tree) definitions for the Sprig front end

use serde::Serialize;

/// Source location information for error reporting.
///
/// `line` is 1-based. `column` is the scanner's character counter at the end
/// of the lexeme; it starts at 0 and resets to 0 after a newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// AST nodes representing statements and expressions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum AstNode {
    // Statements
    Import {
        /// Module path segments in source order, e.g. `std:io` -> ["std", "io"]
        path: Vec<String>,
        location: SourceLocation,
    },
    Let {
        name: String,
        value: Box<AstNode>,
        location: SourceLocation,
    },
    Reassignment {
        name: String,
        value: Box<AstNode>,
        location: SourceLocation,
    },
    FunctionDef {
        name: String,
        params: Vec<String>,
        body: Vec<AstNode>,
        location: SourceLocation,
    },
    FunctionInvoke {
        name: String,
        /// Arguments in call order.
        args: Vec<AstNode>,
        location: SourceLocation,
    },
    If {
        condition: Box<AstNode>,
        then_body: Vec<AstNode>,
        /// Filled only by a plain `else { ... }` arm.
        else_body: Vec<AstNode>,
        /// A chained `else if`, itself an [`AstNode::If`]. When present,
        /// `else_body` stays empty: the chain consumes the else slot.
        else_if: Option<Box<AstNode>>,
        location: SourceLocation,
    },

    // Expressions
    BinaryOp {
        /// Operator symbol as written, including fused forms such as `<=`.
        op: String,
        left: Box<AstNode>,
        right: Box<AstNode>,
        location: SourceLocation,
    },
    StringLiteral(String, SourceLocation),
    NumberLiteral(i32, SourceLocation),
    BooleanLiteral(bool, SourceLocation),

    /// No-op placeholder produced where the grammar tolerates an
    /// unrecognized construct instead of failing.
    Empty { location: SourceLocation },
}

impl AstNode {
    /// Get the source location of this node
    pub fn location(&self) -> &SourceLocation {
        match self {
            AstNode::Import { location, .. } => location,
            AstNode::Let { location, .. } => location,
            AstNode::Reassignment { location, .. } => location,
            AstNode::FunctionDef { location, .. } => location,
            AstNode::FunctionInvoke { location, .. } => location,
            AstNode::If { location, .. } => location,
            AstNode::BinaryOp { location, .. } => location,
            AstNode::StringLiteral(_, loc) => loc,
            AstNode::NumberLiteral(_, loc) => loc,
            AstNode::BooleanLiteral(_, loc) => loc,
            AstNode::Empty { location } => location,
        }
    }
}

/// Top-level program structure
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Program {
    pub nodes: Vec<AstNode>, // All top-level statements in source order
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }
}
