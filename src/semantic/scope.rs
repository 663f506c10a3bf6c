//! Lexical scope stack: `enter_scope`/`exit_scope`/`add_symbol`/`lookup`.
//!
//! A scope is destroyed (its symbols dropped) the moment it's popped, same
//! as the original's `malloc`/`free` pair per scope — there is no arena
//! keeping old scopes alive for later inspection.

use crate::semantic::types::Type;
use crate::token::Token;

/// A named binding to a (possibly still-unresolved) type.
#[derive(Debug, Clone)]
pub struct Symbol {
    pub name: String,
    pub type_info: Option<Type>,
    pub decl_token: Token,
}

/// One lexical scope's symbols, in declaration order.
#[derive(Debug, Default)]
struct Scope {
    symbols: Vec<Symbol>,
}

/// The stack of currently-open scopes, rooted at the global scope once a
/// pass is underway.
///
/// `current_scope` in the spec is represented here as "the stack is
/// non-empty"; `ScopeStack::new()` starts empty (no scope pushed yet),
/// matching invariant 1 ("`current_scope` is null only before the root scope
/// is pushed and after it is popped").
#[derive(Debug, Default)]
pub struct ScopeStack {
    scopes: Vec<Scope>,
}

impl ScopeStack {
    pub fn new() -> Self {
        ScopeStack { scopes: Vec::new() }
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Pushes a new empty scope; the previous current scope becomes its
    /// parent implicitly (lookup walks the stack from the top down).
    pub fn enter_scope(&mut self) {
        self.scopes.push(Scope::default());
        log::trace!("enter_scope: depth now {}", self.scopes.len());
    }

    /// Pops the current scope and drops all of its symbols. A no-op if the
    /// stack is already empty — defensive, should not occur on a balanced
    /// traversal.
    pub fn exit_scope(&mut self) {
        self.scopes.pop();
        log::trace!("exit_scope: depth now {}", self.scopes.len());
    }

    /// Prepends a symbol to the current scope. Shadowing is permitted:
    /// lookup always finds the most recently added binding for a name
    /// first. A no-op if no scope is open.
    pub fn add_symbol(&mut self, name: impl Into<String>, type_info: Option<Type>, tok: Token) {
        let Some(scope) = self.scopes.last_mut() else {
            return;
        };
        scope.symbols.push(Symbol {
            name: name.into(),
            type_info,
            decl_token: tok,
        });
    }

    /// Walks scopes innermost-first, returning the most recent binding for
    /// `name`, or `None`.
    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        for scope in self.scopes.iter().rev() {
            if let Some(sym) = scope.symbols.iter().rev().find(|s| s.name == name) {
                return Some(sym);
            }
        }
        None
    }
}
