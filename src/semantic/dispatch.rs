//! `check_node`: the recursive AST walk (spec §4.5).
//!
//! After dispatching on a node's kind, `check_node` unconditionally recurses
//! into `node.next` — the statement-list sibling chain — regardless of what
//! the per-kind handler did. Every handler below is null-safe in the sense
//! that an absent child (`Option<Box<Node>>`) is simply skipped.

use crate::ast::{Node, NodeKind};
use crate::semantic::TypeChecker;
use crate::token::Token;

/// A cheap, `Copy` tag mirroring `NodeKind`'s variants.
///
/// `check_node` computes this first and matches on the owned tag rather
/// than matching directly on `&node.kind`, so the immutable borrow needed
/// to read the variant ends before the chosen handler takes `&mut node`.
#[derive(Clone, Copy, PartialEq, Eq)]
enum NodeTag {
    Root,
    Block,
    VarDecl,
    Function,
    ExprVar,
    Return,
    If,
    While,
    For,
    ExprBinary,
    ExprCall,
    ExprLiteral,
}

fn tag_of(kind: &NodeKind) -> NodeTag {
    match kind {
        NodeKind::Root { .. } => NodeTag::Root,
        NodeKind::Block { .. } => NodeTag::Block,
        NodeKind::VarDecl { .. } => NodeTag::VarDecl,
        NodeKind::Function { .. } => NodeTag::Function,
        NodeKind::ExprVar { .. } => NodeTag::ExprVar,
        NodeKind::Return { .. } => NodeTag::Return,
        NodeKind::If { .. } => NodeTag::If,
        NodeKind::While { .. } => NodeTag::While,
        NodeKind::For { .. } => NodeTag::For,
        NodeKind::ExprBinary { .. } => NodeTag::ExprBinary,
        NodeKind::ExprCall { .. } => NodeTag::ExprCall,
        NodeKind::ExprLiteral { .. } => NodeTag::ExprLiteral,
    }
}

impl TypeChecker {
    /// The core recursive walk. Dispatches on `node`'s kind, then always
    /// continues into `node.next`.
    pub fn check_node(&mut self, node: &mut Node) {
        match tag_of(&node.kind) {
            NodeTag::Root => self.check_root(node),
            NodeTag::Block => self.check_block(node),
            NodeTag::VarDecl => self.check_var_decl(node),
            NodeTag::Function => self.check_function(node),
            NodeTag::ExprVar => self.check_expr_var(node),
            NodeTag::Return => self.check_return(node),
            NodeTag::If => self.check_if(node),
            NodeTag::While => self.check_while(node),
            NodeTag::For => self.check_for(node),
            NodeTag::ExprBinary => self.check_binary(node),
            NodeTag::ExprCall => self.check_call(node),
            // Literals keep whatever type_info parsing already assigned.
            NodeTag::ExprLiteral => {}
        }

        if let Some(next) = node.next.as_deref_mut() {
            self.check_node(next);
        }
    }

    fn check_root(&mut self, node: &mut Node) {
        if let NodeKind::Root { children } = &mut node.kind {
            if let Some(child) = children.as_deref_mut() {
                self.check_node(child);
            }
        }
    }

    fn check_block(&mut self, node: &mut Node) {
        if !self.enter_scope_checked(&node.token) {
            return;
        }
        if let NodeKind::Block { statements } = &mut node.kind {
            if let Some(stmt) = statements.as_deref_mut() {
                self.check_node(stmt);
            }
        }
        // Exited unconditionally: diagnostics recorded inside the block
        // never unwind, so this always runs.
        self.scopes.exit_scope();
    }

    fn check_var_decl(&mut self, node: &mut Node) {
        let NodeKind::VarDecl { init_expr, .. } = &mut node.kind else {
            unreachable!("check_var_decl called on non-VarDecl node");
        };
        if let Some(init) = init_expr.as_deref_mut() {
            self.check_node(init);
        }

        let declared_type = node.type_info.clone();
        if declared_type.is_some() {
            let NodeKind::VarDecl { init_expr, .. } = &node.kind else {
                unreachable!()
            };
            self.check_type_compatibility(declared_type.as_ref(), init_expr.as_deref(), &node.token);
        }

        let NodeKind::VarDecl { name, init_expr } = &node.kind else {
            unreachable!()
        };
        let effective_type = declared_type
            .or_else(|| init_expr.as_deref().and_then(|n| n.type_info.clone()));

        self.scopes
            .add_symbol(name.clone(), effective_type.clone(), node.token.clone());
        node.type_info = effective_type;
    }

    fn check_function(&mut self, node: &mut Node) {
        let declared_return = node.type_info.clone();
        let saved_return = std::mem::replace(&mut self.current_return_type, declared_return);

        if self.enter_scope_checked(&node.token) {
            if let NodeKind::Function {
                param_names,
                arg_types,
                ..
            } = &node.kind
            {
                for (name, ty) in param_names.iter().zip(arg_types.iter()) {
                    self.scopes
                        .add_symbol(name.clone(), ty.clone(), Token::synthetic());
                }
            }

            if let NodeKind::Function { body, .. } = &mut node.kind {
                self.check_node(body);
            }

            self.scopes.exit_scope();
        }

        self.current_return_type = saved_return;
    }

    fn check_expr_var(&mut self, node: &mut Node) {
        // Unknown identifiers are not reported here: the out-of-scope
        // resolver is responsible for that diagnostic (spec §4.5, §9).
        let NodeKind::ExprVar { name } = &node.kind else {
            unreachable!("check_expr_var called on non-ExprVar node");
        };
        if let Some(ty) = self.scopes.lookup(name).and_then(|s| s.type_info.clone()) {
            node.type_info = Some(ty);
        }
    }

    fn check_return(&mut self, node: &mut Node) {
        let NodeKind::Return { value } = &mut node.kind else {
            unreachable!("check_return called on non-Return node");
        };
        let Some(value) = value.as_deref_mut() else {
            return;
        };
        self.check_node(value);

        let return_type = self.current_return_type.clone();
        let NodeKind::Return { value } = &node.kind else {
            unreachable!()
        };
        self.check_type_compatibility(return_type.as_ref(), value.as_deref(), &node.token);
    }

    fn check_if(&mut self, node: &mut Node) {
        if let NodeKind::If {
            condition,
            then_body,
            else_body,
        } = &mut node.kind
        {
            self.check_node(condition);
            self.check_node(then_body);
            if let Some(else_body) = else_body.as_deref_mut() {
                self.check_node(else_body);
            }
        }
    }

    fn check_while(&mut self, node: &mut Node) {
        if let NodeKind::While { condition, body } = &mut node.kind {
            self.check_node(condition);
            self.check_node(body);
        }
    }

    fn check_for(&mut self, node: &mut Node) {
        if !self.enter_scope_checked(&node.token) {
            return;
        }
        if let NodeKind::For {
            init,
            condition,
            step,
            body,
        } = &mut node.kind
        {
            if let Some(init) = init.as_deref_mut() {
                self.check_node(init);
            }
            if let Some(condition) = condition.as_deref_mut() {
                self.check_node(condition);
            }
            if let Some(step) = step.as_deref_mut() {
                self.check_node(step);
            }
            self.check_node(body);
        }
        self.scopes.exit_scope();
    }

    fn check_binary(&mut self, node: &mut Node) {
        if let NodeKind::ExprBinary { left, right } = &mut node.kind {
            self.check_node(left);
            self.check_node(right);
        }

        let left_type = match &node.kind {
            NodeKind::ExprBinary { left, .. } => left.type_info.clone(),
            _ => None,
        };
        if left_type.is_none() {
            return;
        }
        node.type_info = left_type.clone();

        let tok = node.token.clone();
        let NodeKind::ExprBinary { right, .. } = &node.kind else {
            unreachable!()
        };
        // Tie-breaking convention: left wins. `usize > 0` accepts (right is
        // a safe literal); `i32 == u32` rejects.
        self.check_type_compatibility(left_type.as_ref(), Some(right.as_ref()), &tok);
    }

    fn check_call(&mut self, node: &mut Node) {
        if let NodeKind::ExprCall { callee, args } = &mut node.kind {
            self.check_node(callee);
            if let Some(args) = args.as_deref_mut() {
                self.check_node(args);
            }
        }

        // Argument/parameter arity and compatibility are deliberately not
        // enforced here (spec §9 open question, preserved as specified).
        let NodeKind::ExprCall { callee, .. } = &node.kind else {
            unreachable!()
        };
        if let Some(ty) = callee.type_info.clone() {
            node.type_info = Some(ty);
        }
    }
}
