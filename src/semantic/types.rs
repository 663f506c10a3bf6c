//! The checker's type model.
//!
//! Unlike a full inference engine (out of scope per the Non-goals), types
//! here are plain owned trees compared structurally — there is no interning
//! registry and no type variables to unify.

use std::fmt;

/// Signed integer widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum SignedIntKind {
    I8,
    I16,
    I32,
    I64,
    I128,
    /// Platform `int` (distinct from the fixed-width kinds for diagnostics).
    Int,
    Isize,
}

impl SignedIntKind {
    fn as_str(self) -> &'static str {
        match self {
            SignedIntKind::I8 => "i8",
            SignedIntKind::I16 => "i16",
            SignedIntKind::I32 => "i32",
            SignedIntKind::I64 => "i64",
            SignedIntKind::I128 => "i128",
            SignedIntKind::Int => "int",
            SignedIntKind::Isize => "isize",
        }
    }
}

/// Unsigned integer widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum UnsignedIntKind {
    U8,
    U16,
    U32,
    U64,
    U128,
    Uint,
    Usize,
}

impl UnsignedIntKind {
    fn as_str(self) -> &'static str {
        match self {
            UnsignedIntKind::U8 => "u8",
            UnsignedIntKind::U16 => "u16",
            UnsignedIntKind::U32 => "u32",
            UnsignedIntKind::U64 => "u64",
            UnsignedIntKind::U128 => "u128",
            UnsignedIntKind::Uint => "uint",
            UnsignedIntKind::Usize => "usize",
        }
    }
}

/// A function signature, carried opaquely by the checker (no overload
/// resolution or call-site arity checking happens against it; see Non-goals).
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct FunctionSig {
    pub params: Vec<Type>,
    pub return_type: Box<Type>,
}

/// A struct type, opaque beyond its name for equality purposes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct StructSig {
    pub name: String,
}

/// The closed set of type forms the checker understands.
///
/// `Type` is a plain recursive value (no arena, no `TypeId`): `type_eq` is
/// just `PartialEq`, and `Pointer`'s `inner` is a `Box<Type>` so it is always
/// present whenever the variant is constructed — there is no null pointee.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Type {
    Signed(SignedIntKind),
    Unsigned(UnsignedIntKind),
    Float,
    Bool,
    Void,
    Char,
    String,
    Pointer { inner: Box<Type> },
    Function(FunctionSig),
    Struct(StructSig),
    /// Array of a fixed element type; length is opaque to the checker.
    Array(Box<Type>),
}

impl Type {
    pub fn pointer(inner: Type) -> Type {
        Type::Pointer {
            inner: Box::new(inner),
        }
    }

    pub fn is_void_pointer(&self) -> bool {
        matches!(self, Type::Pointer { inner } if **inner == Type::Void)
    }
}

/// Structural equality between two types.
///
/// A free function (rather than only relying on `PartialEq`) so call sites
/// read the same as the specification's `type_eq(a, b)`.
pub fn type_eq(a: &Type, b: &Type) -> bool {
    a == b
}

/// Renders a type for diagnostics. Mirrors `type_to_string` from the spec;
/// in Rust there is no caller-side free() step, `String` is owned outright.
pub fn type_to_string(t: &Type) -> String {
    match t {
        Type::Signed(k) => k.as_str().to_string(),
        Type::Unsigned(k) => k.as_str().to_string(),
        Type::Float => "float".to_string(),
        Type::Bool => "bool".to_string(),
        Type::Void => "void".to_string(),
        Type::Char => "char".to_string(),
        Type::String => "string".to_string(),
        Type::Pointer { inner } => format!("*{}", type_to_string(inner)),
        Type::Function(sig) => {
            let params = sig
                .params
                .iter()
                .map(type_to_string)
                .collect::<Vec<_>>()
                .join(", ");
            format!("({}) -> {}", params, type_to_string(&sig.return_type))
        }
        Type::Struct(sig) => sig.name.clone(),
        Type::Array(elem) => format!("[{}]", type_to_string(elem)),
    }
}

/// True iff `t` is any integer kind (signed or unsigned), per the dense
/// `I8..U128, INT, UINT, USIZE, ISIZE` set in the spec. Returns false for
/// `None` at call sites, mirroring `is_integer(NULL) == false`.
pub fn is_integer(t: &Type) -> bool {
    matches!(t, Type::Signed(_) | Type::Unsigned(_))
}

/// True iff `t` is a signed integer kind.
pub fn is_signed_integer(t: &Type) -> bool {
    matches!(t, Type::Signed(_))
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", type_to_string(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural_equality_matches_same_shape() {
        let a = Type::pointer(Type::Signed(SignedIntKind::I32));
        let b = Type::pointer(Type::Signed(SignedIntKind::I32));
        assert!(type_eq(&a, &b));
    }

    #[test]
    fn structural_equality_rejects_different_pointee() {
        let a = Type::pointer(Type::Signed(SignedIntKind::I32));
        let b = Type::pointer(Type::Unsigned(UnsignedIntKind::U32));
        assert!(!type_eq(&a, &b));
    }

    #[test]
    fn is_integer_covers_all_int_kinds() {
        assert!(is_integer(&Type::Signed(SignedIntKind::I8)));
        assert!(is_integer(&Type::Signed(SignedIntKind::Isize)));
        assert!(is_integer(&Type::Unsigned(UnsignedIntKind::Usize)));
        assert!(!is_integer(&Type::Float));
        assert!(!is_integer(&Type::Bool));
    }

    #[test]
    fn is_signed_integer_excludes_unsigned() {
        assert!(is_signed_integer(&Type::Signed(SignedIntKind::Int)));
        assert!(!is_signed_integer(&Type::Unsigned(UnsignedIntKind::Uint)));
        assert!(!is_signed_integer(&Type::Void));
    }

    #[test]
    fn void_pointer_detection() {
        let void_ptr = Type::pointer(Type::Void);
        let int_ptr = Type::pointer(Type::Signed(SignedIntKind::I32));
        assert!(void_ptr.is_void_pointer());
        assert!(!int_ptr.is_void_pointer());
    }

    #[test]
    fn type_to_string_renders_pointers_recursively() {
        let t = Type::pointer(Type::pointer(Type::Unsigned(UnsignedIntKind::U8)));
        assert_eq!(type_to_string(&t), "**u8");
    }
}
