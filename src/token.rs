//! Source locations carried by AST nodes for diagnostics.
//!
//! The lexer/parser that actually produces these is out of scope for this
//! crate; `Token` only needs to be an opaque, cheaply-cloned location triple.

use std::fmt;
use std::sync::Arc;

/// A source location: which file, and the 1-indexed line/column within it.
///
/// The filename lives on the token itself rather than behind a process-wide
/// global, so diagnostics never need to consult hidden state (see DESIGN.md).
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Token {
    pub file: Arc<str>,
    pub line: usize,
    pub col: usize,
}

impl Token {
    pub fn new(file: impl Into<Arc<str>>, line: usize, col: usize) -> Self {
        Token {
            file: file.into(),
            line,
            col,
        }
    }

    /// A placeholder location used for symbols synthesized by the checker
    /// itself (e.g. function parameters with no declaration site of their own).
    pub fn synthetic() -> Self {
        Token::new("<synthetic>", 0, 0)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.col)
    }
}
