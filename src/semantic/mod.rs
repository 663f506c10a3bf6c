//! Semantic analysis: the type checker itself.
//!
//! `TypeChecker` owns the scope stack, the current function's return type,
//! the running error count, and wherever diagnostics are reported to. The
//! tree walk lives in [`dispatch`]; the compatibility relation lives in
//! [`compatibility`].

mod compatibility;
mod dispatch;
pub mod scope;
pub mod types;

use crate::ast::Node;
use crate::config::CheckerLimits;
use crate::diagnostics::{truncate_message, Diagnostic, DiagnosticSink};
use crate::semantic::scope::ScopeStack;
use crate::semantic::types::Type;
use crate::token::Token;

/// Ties the scope stack, the in-flight function's return type, and
/// diagnostic reporting together for one pass over an AST.
///
/// Mirrors the spec's global checker state (`current_scope`, `current_func`,
/// `error_count`) as struct fields rather than module statics, so multiple
/// passes (e.g. one per test) never share state.
pub struct TypeChecker {
    scopes: ScopeStack,
    /// Only the return type of `current_func` is ever consulted, so that's
    /// all that's carried — not the whole enclosing function node.
    current_return_type: Option<Type>,
    error_count: usize,
    sink: Box<dyn DiagnosticSink>,
    limits: CheckerLimits,
}

impl TypeChecker {
    pub fn new(sink: Box<dyn DiagnosticSink>, limits: CheckerLimits) -> Self {
        TypeChecker {
            scopes: ScopeStack::new(),
            current_return_type: None,
            error_count: 0,
            sink,
            limits,
        }
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Diagnostic messages recorded so far, in emission order. Empty unless
    /// the configured sink buffers them (see [`crate::diagnostics::CollectingSink`]).
    pub fn diagnostic_messages(&self) -> Vec<&str> {
        self.sink.messages()
    }

    /// Records a type error: truncates the message to the configured limit,
    /// emits it through the sink, and bumps the error count. Never panics
    /// and never aborts the walk — the checker always runs to completion.
    fn tc_error(&mut self, tok: &Token, message: String) {
        let message = truncate_message(message, self.limits.max_diagnostic_message_len);
        log::debug!("{}: {}", tok, message);
        self.sink.emit(Diagnostic {
            token: tok.clone(),
            message,
        });
        self.error_count += 1;
    }

    /// Pushes a scope unless doing so would exceed `limits.max_scope_depth`,
    /// in which case it refuses and returns `false` so the caller can skip
    /// walking the subtree that would have lived in it — a hard recursion
    /// breaker, not a diagnostic. Depth-limit fixtures are a configuration
    /// concern, not a type error, so nothing here touches `error_count` or
    /// the diagnostic sink; only `log::warn!` records that it fired.
    fn enter_scope_checked(&mut self, tok: &Token) -> bool {
        if self.scopes.depth() >= self.limits.max_scope_depth {
            log::warn!(
                "{}: scope nesting limit ({}) reached, not descending further",
                tok,
                self.limits.max_scope_depth
            );
            return false;
        }
        self.scopes.enter_scope();
        true
    }

    /// Runs a full pass over `root`, printing the same start/finish banner
    /// the CLI and tests key off of. Returns a process-style exit code: `0`
    /// on a clean pass, `1` if any diagnostic was emitted.
    ///
    /// The banner is written with `println!`, not `log::info!`: it is the
    /// checker's actual reported result, not ambient instrumentation, and
    /// must reach stdout regardless of what logger (if any) is installed.
    pub fn check_program(&mut self, root: &mut Node) -> i32 {
        println!("[TypeCheck] Starting semantic analysis...");
        self.check_node(root);

        if self.error_count > 0 {
            println!("[TypeCheck] Found {} errors.", self.error_count);
            1
        } else {
            println!("[TypeCheck] Passed.");
            0
        }
    }
}
