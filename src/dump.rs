//! Sidecar serialization for the front end's boundary outputs
//!
//! Tokens and the parsed [`Program`] are persisted next to the source file
//! they came from, keyed by the source path plus a fixed suffix:
//! `<path>.tokens.json` and `<path>.ast.json`. This module owns the suffix
//! convention and the JSON rendering; where the bytes go is the caller's
//! business, so the library itself performs no I/O.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::parser::ast::Program;
use crate::parser::lexer::Token;

/// Suffix appended to the source path for the token dump.
pub const TOKENS_SUFFIX: &str = ".tokens.json";

/// Suffix appended to the source path for the AST dump.
pub const AST_SUFFIX: &str = ".ast.json";

/// Sidecar path for the token dump: `<path>.tokens.json`.
pub fn tokens_sidecar(source: &Path) -> PathBuf {
    append_suffix(source, TOKENS_SUFFIX)
}

/// Sidecar path for the AST dump: `<path>.ast.json`.
pub fn ast_sidecar(source: &Path) -> PathBuf {
    append_suffix(source, AST_SUFFIX)
}

fn append_suffix(source: &Path, suffix: &str) -> PathBuf {
    let mut path = OsString::from(source.as_os_str());
    path.push(suffix);
    PathBuf::from(path)
}

/// Render the token sequence as pretty-printed JSON.
pub fn tokens_json(tokens: &[Token]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(tokens)
}

/// Render the parsed program as pretty-printed JSON.
pub fn program_json(program: &Program) -> serde_json::Result<String> {
    serde_json::to_string_pretty(program)
}
