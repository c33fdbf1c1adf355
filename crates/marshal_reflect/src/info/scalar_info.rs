use alloc::boxed::Box;
use core::fmt;

use crate::Reflect;
use crate::info::{Type, TypePath, impl_type_fn};
use crate::ops::ScalarRef;

/// The primitive family of a scalar type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Bool,
    /// Signed integers up to 64 bits.
    Int,
    /// Unsigned integers up to 64 bits.
    UInt,
    Float,
    Char,
    Text,
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.pad("bool"),
            Self::Int => f.pad("signed integer"),
            Self::UInt => f.pad("unsigned integer"),
            Self::Float => f.pad("float"),
            Self::Char => f.pad("char"),
            Self::Text => f.pad("text"),
        }
    }
}

/// Capability table of a scalar type (`bool`, integers, floats, `char`, `String`).
///
/// ```
/// use marshal_reflect::info::{ScalarKind, Typed};
/// use marshal_reflect::ops::ScalarRef;
///
/// let info = u8::type_info().as_scalar().unwrap();
/// assert_eq!(info.kind(), ScalarKind::UInt);
///
/// let v = info.from_scalar(ScalarRef::UInt(200)).unwrap();
/// assert_eq!(v.downcast_ref::<u8>(), Some(&200));
///
/// // Out of range.
/// assert!(info.from_scalar(ScalarRef::UInt(300)).is_none());
/// ```
#[derive(Clone, Debug)]
pub struct ScalarInfo {
    ty: Type,
    kind: ScalarKind,
    from_scalar: fn(ScalarRef<'_>) -> Option<Box<dyn Reflect>>,
}

impl ScalarInfo {
    impl_type_fn!(ty);

    pub const fn new<T: TypePath>(
        kind: ScalarKind,
        from_scalar: fn(ScalarRef<'_>) -> Option<Box<dyn Reflect>>,
    ) -> Self {
        Self {
            ty: Type::of::<T>(),
            kind,
            from_scalar,
        }
    }

    #[inline]
    pub const fn kind(&self) -> ScalarKind {
        self.kind
    }

    /// Builds a value of this type, `None` if `scalar` does not fit.
    #[inline]
    pub fn from_scalar(&self, scalar: ScalarRef<'_>) -> Option<Box<dyn Reflect>> {
        (self.from_scalar)(scalar)
    }
}
