//! `check_type_compatibility`: the assignment/return/operand compatibility
//! relation (spec §4.4). Rules are applied in order; the first match wins.

use crate::ast::Node;
use crate::semantic::types::{is_integer, is_signed_integer, type_eq, type_to_string, Type};
use crate::semantic::TypeChecker;
use crate::token::Token;

impl TypeChecker {
    /// Returns `true` if `value_expr` may be used where `target` is
    /// expected, emitting at most one diagnostic on failure.
    ///
    /// Both `target` and `value_expr` are `Option` so call sites can pass
    /// through "unresolved" uniformly — rule 1 below accepts silently
    /// whenever either side (or the value's inferred type) is missing, to
    /// avoid cascading errors off of earlier, already-reported problems.
    pub(super) fn check_type_compatibility(
        &mut self,
        target: Option<&Type>,
        value_expr: Option<&Node>,
        tok: &Token,
    ) -> bool {
        let Some(target) = target else {
            return true;
        };
        let Some(value_expr) = value_expr else {
            return true;
        };
        let Some(value_type) = value_expr.type_info.as_ref() else {
            return true;
        };

        // 2. Exact structural match.
        if type_eq(target, value_type) {
            return true;
        }

        // 3. Void-pointer generics, symmetric.
        if target.is_void_pointer() || value_type.is_void_pointer() {
            return true;
        }

        // 4. Integer compatibility.
        if is_integer(target) && is_integer(value_type) {
            let target_signed = is_signed_integer(target);
            let value_signed = is_signed_integer(value_type);

            if target_signed != value_signed {
                if value_expr.is_safe_integer_literal() {
                    return true;
                }
                self.tc_error(
                    tok,
                    format!(
                        "Sign mismatch: cannot implicitly convert '{}' to '{}' (use cast or unsigned literal)",
                        type_to_string(value_type),
                        type_to_string(target),
                    ),
                );
                return false;
            }

            // Width-narrowing detection is a reserved extension; not required.
            return true;
        }

        // 5. Default failure.
        self.tc_error(
            tok,
            format!(
                "Type mismatch: expected '{}', got '{}'",
                type_to_string(target),
                type_to_string(value_type),
            ),
        );
        false
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::build;
    use crate::diagnostics::CollectingSink;
    use crate::semantic::types::{SignedIntKind, Type, UnsignedIntKind};
    use crate::semantic::TypeChecker;
    use crate::token::Token;

    fn checker() -> TypeChecker {
        TypeChecker::new(Box::new(CollectingSink::default()), Default::default())
    }

    fn tok() -> Token {
        Token::new("t.zen", 1, 1)
    }

    #[test]
    fn null_target_accepts_silently() {
        let mut tc = checker();
        let value = build::int_literal(tok(), "0").with_type(Type::Signed(SignedIntKind::I32));
        assert!(tc.check_type_compatibility(None, Some(&value), &tok()));
        assert_eq!(tc.error_count(), 0);
    }

    #[test]
    fn unresolved_value_type_accepts_silently() {
        let mut tc = checker();
        let value = build::int_literal(tok(), "0");
        assert!(tc.check_type_compatibility(Some(&Type::Bool), Some(&value), &tok()));
        assert_eq!(tc.error_count(), 0);
    }

    #[test]
    fn exact_match_accepts() {
        let mut tc = checker();
        let value = build::int_literal(tok(), "0").with_type(Type::Bool);
        assert!(tc.check_type_compatibility(Some(&Type::Bool), Some(&value), &tok()));
        assert_eq!(tc.error_count(), 0);
    }

    #[test]
    fn void_pointer_is_bidirectionally_compatible() {
        let mut tc = checker();
        let void_ptr = Type::pointer(Type::Void);
        let i32_ptr = Type::pointer(Type::Signed(SignedIntKind::I32));

        let value_a = build::expr_var(tok(), "p").with_type(i32_ptr.clone());
        assert!(tc.check_type_compatibility(Some(&void_ptr), Some(&value_a), &tok()));

        let value_b = build::expr_var(tok(), "q").with_type(void_ptr.clone());
        assert!(tc.check_type_compatibility(Some(&i32_ptr), Some(&value_b), &tok()));
        assert_eq!(tc.error_count(), 0);
    }

    #[test]
    fn safe_integer_literal_rescues_sign_mismatch() {
        let mut tc = checker();
        let zero = build::int_literal(tok(), "0").with_type(Type::Signed(SignedIntKind::I32));
        assert!(tc.check_type_compatibility(
            Some(&Type::Unsigned(UnsignedIntKind::Usize)),
            Some(&zero),
            &tok()
        ));
        assert_eq!(tc.error_count(), 0);
    }

    #[test]
    fn non_literal_sign_mismatch_rejected() {
        let mut tc = checker();
        let var = build::expr_var(tok(), "n").with_type(Type::Signed(SignedIntKind::I32));
        assert!(!tc.check_type_compatibility(
            Some(&Type::Unsigned(UnsignedIntKind::Usize)),
            Some(&var),
            &tok()
        ));
        assert_eq!(tc.error_count(), 1);
        assert!(tc
            .diagnostic_messages()
            .iter()
            .any(|m| m.contains("Sign mismatch")));
    }

    #[test]
    fn string_literal_does_not_rescue_sign_mismatch() {
        let mut tc = checker();
        let s = build::string_literal(tok(), "0").with_type(Type::Signed(SignedIntKind::I32));
        assert!(!tc.check_type_compatibility(
            Some(&Type::Unsigned(UnsignedIntKind::Usize)),
            Some(&s),
            &tok()
        ));
    }

    #[test]
    fn float_literal_does_not_rescue_sign_mismatch() {
        let mut tc = checker();
        let f = build::float_literal(tok()).with_type(Type::Signed(SignedIntKind::I32));
        assert!(!tc.check_type_compatibility(
            Some(&Type::Unsigned(UnsignedIntKind::Usize)),
            Some(&f),
            &tok()
        ));
    }

    #[test]
    fn matching_signedness_of_different_widths_accepts() {
        let mut tc = checker();
        let value = build::expr_var(tok(), "n").with_type(Type::Signed(SignedIntKind::I8));
        assert!(tc.check_type_compatibility(
            Some(&Type::Signed(SignedIntKind::I64)),
            Some(&value),
            &tok()
        ));
    }

    #[test]
    fn unrelated_types_reject_with_type_mismatch() {
        let mut tc = checker();
        let value = build::expr_var(tok(), "s").with_type(Type::String);
        assert!(!tc.check_type_compatibility(Some(&Type::Bool), Some(&value), &tok()));
        assert!(tc
            .diagnostic_messages()
            .iter()
            .any(|m| m.contains("Type mismatch")));
    }
}
