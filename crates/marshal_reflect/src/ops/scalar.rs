use core::fmt;

use crate::info::ScalarKind;

/// A borrowed scalar, widened to its 64-bit family.
///
/// Used both to read a scalar out of a value and to build one through
/// [`ScalarInfo::from_scalar`](crate::info::ScalarInfo::from_scalar).
///
/// ```
/// use marshal_reflect::Reflect;
/// use marshal_reflect::ops::ScalarRef;
///
/// let name = String::from("ada");
/// let scalar = name.reflect_ref().as_scalar().unwrap();
/// assert_eq!(scalar, ScalarRef::Str("ada"));
/// ```
#[derive(Clone, Copy, PartialEq)]
pub enum ScalarRef<'a> {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Char(char),
    Str(&'a str),
}

impl ScalarRef<'_> {
    pub const fn kind(&self) -> ScalarKind {
        match self {
            Self::Bool(_) => ScalarKind::Bool,
            Self::Int(_) => ScalarKind::Int,
            Self::UInt(_) => ScalarKind::UInt,
            Self::Float(_) => ScalarKind::Float,
            Self::Char(_) => ScalarKind::Char,
            Self::Str(_) => ScalarKind::Text,
        }
    }
}

impl fmt::Debug for ScalarRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => fmt::Debug::fmt(v, f),
            Self::Int(v) => fmt::Debug::fmt(v, f),
            Self::UInt(v) => fmt::Debug::fmt(v, f),
            Self::Float(v) => fmt::Debug::fmt(v, f),
            Self::Char(v) => fmt::Debug::fmt(v, f),
            Self::Str(v) => fmt::Debug::fmt(v, f),
        }
    }
}
