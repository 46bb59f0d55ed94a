//! # Introduction
//!
//! Sprig is a small scripting language; this crate is its front end. Source
//! text is scanned into a flat token stream and then parsed into an AST
//! that a downstream code generator consumes.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → AST
//! ```
//!
//! 1. [`parser::lexer`] — single-pass tokenizer with line/column tracking.
//! 2. [`parser::parse`] — recursive descent parser building a
//!    [`parser::ast::Program`].
//! 3. [`dump`] — JSON sidecar naming and rendering for both boundary
//!    outputs.
//!
//! The library performs no I/O. The `sprig` binary reads the source file,
//! runs the pipeline, and writes the `<path>.tokens.json` and
//! `<path>.ast.json` sidecars.

pub mod dump;
pub mod parser;
