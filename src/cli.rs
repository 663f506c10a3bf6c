//! `clap`-derived command line surface (spec §10.3).
//!
//! There is no lexer/parser in this crate, so the CLI's only job is to load
//! a pre-built AST fixture from JSON and run the checker over it — a stand-in
//! for the out-of-scope driver, used for manual inspection and the
//! subprocess-based fixture tests.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::ast::Node;

#[derive(Parser)]
#[command(name = "zen-typecheck")]
#[command(about = "Semantic type checker for Zen AST fixtures")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug/trace logging (equivalent to RUST_LOG=debug).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load a JSON AST fixture and run the type checker over it.
    Check(CheckArgs),
}

#[derive(clap::Args)]
pub struct CheckArgs {
    /// Path to a JSON-serialized `Node` (the fixture's root).
    pub fixture: PathBuf,

    /// Display name used in diagnostics in place of the fixture's own path.
    #[arg(long)]
    pub file: Option<String>,
}

/// Loads and (optionally) relabels an AST fixture.
pub fn load_fixture(args: &CheckArgs) -> Result<Node, FixtureError> {
    let content = fs::read_to_string(&args.fixture).map_err(|e| FixtureError {
        message: format!("Failed to read '{}': {}", args.fixture.display(), e),
    })?;

    let mut root: Node = serde_json::from_str(&content).map_err(|e| FixtureError {
        message: format!("Failed to parse '{}': {}", args.fixture.display(), e),
    })?;

    if let Some(file) = &args.file {
        relabel(&mut root, file);
    }

    Ok(root)
}

/// Overwrites every node's token file name, so diagnostics read against a
/// caller-chosen display name rather than the fixture's own path.
fn relabel(node: &mut Node, file: &str) {
    node.token = crate::token::Token::new(file.to_string(), node.token.line, node.token.col);

    if let Some(next) = node.next.as_deref_mut() {
        relabel(next, file);
    }

    use crate::ast::NodeKind::*;
    match &mut node.kind {
        Root { children } => {
            if let Some(c) = children.as_deref_mut() {
                relabel(c, file);
            }
        }
        Block { statements } => {
            if let Some(s) = statements.as_deref_mut() {
                relabel(s, file);
            }
        }
        VarDecl { init_expr, .. } => {
            if let Some(e) = init_expr.as_deref_mut() {
                relabel(e, file);
            }
        }
        Function { body, .. } => relabel(body, file),
        ExprVar { .. } => {}
        Return { value } => {
            if let Some(v) = value.as_deref_mut() {
                relabel(v, file);
            }
        }
        If {
            condition,
            then_body,
            else_body,
        } => {
            relabel(condition, file);
            relabel(then_body, file);
            if let Some(e) = else_body.as_deref_mut() {
                relabel(e, file);
            }
        }
        While { condition, body } => {
            relabel(condition, file);
            relabel(body, file);
        }
        For {
            init,
            condition,
            step,
            body,
        } => {
            if let Some(n) = init.as_deref_mut() {
                relabel(n, file);
            }
            if let Some(n) = condition.as_deref_mut() {
                relabel(n, file);
            }
            if let Some(n) = step.as_deref_mut() {
                relabel(n, file);
            }
            relabel(body, file);
        }
        ExprBinary { left, right } => {
            relabel(left, file);
            relabel(right, file);
        }
        ExprCall { callee, args } => {
            relabel(callee, file);
            if let Some(a) = args.as_deref_mut() {
                relabel(a, file);
            }
        }
        ExprLiteral { .. } => {}
    }
}

/// Anything that can go wrong loading a fixture: missing file, unreadable
/// file, or malformed JSON.
#[derive(Debug, Clone)]
pub struct FixtureError {
    pub message: String,
}

impl fmt::Display for FixtureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for FixtureError {}
