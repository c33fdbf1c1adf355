use crate::Reflect;
use crate::info::{ReflectKind, ReflectKindError};
use crate::ops::{List, Map, Optional, Pointer, ScalarRef, Struct};

// -----------------------------------------------------------------------------
// ReflectRef

/// An immutable view of a reflected value, by kind.
///
/// Obtained via [`Reflect::reflect_ref`].
///
/// ```
/// use marshal_reflect::Reflect;
/// use marshal_reflect::ops::ReflectRef;
///
/// let v = vec![1_u8, 2];
/// let ReflectRef::List(list) = v.reflect_ref() else { unreachable!() };
/// assert_eq!(list.len(), 2);
/// ```
pub enum ReflectRef<'a> {
    Struct(&'a dyn Struct),
    List(&'a dyn List),
    Map(&'a dyn Map),
    Option(&'a dyn Optional),
    Pointer(&'a dyn Pointer),
    Scalar(ScalarRef<'a>),
    Opaque(&'a dyn Reflect),
}

macro_rules! impl_ref_cast {
    ($name:ident : $kind:ident => $ty:ty) => {
        #[doc = concat!("Returns the [`", stringify!($kind), "`](ReflectKind::", stringify!($kind), ") view.")]
        pub fn $name(self) -> Result<$ty, ReflectKindError> {
            match self {
                Self::$kind(data) => Ok(data),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl<'a> ReflectRef<'a> {
    impl_ref_cast!(as_struct: Struct => &'a dyn Struct);
    impl_ref_cast!(as_list: List => &'a dyn List);
    impl_ref_cast!(as_map: Map => &'a dyn Map);
    impl_ref_cast!(as_option: Option => &'a dyn Optional);
    impl_ref_cast!(as_pointer: Pointer => &'a dyn Pointer);
    impl_ref_cast!(as_scalar: Scalar => ScalarRef<'a>);

    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::List(_) => ReflectKind::List,
            Self::Map(_) => ReflectKind::Map,
            Self::Option(_) => ReflectKind::Option,
            Self::Pointer(_) => ReflectKind::Pointer,
            Self::Scalar(_) => ReflectKind::Scalar,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }
}

// -----------------------------------------------------------------------------
// ReflectMut

/// A mutable view of a reflected value, by kind.
///
/// Scalars have no dedicated mutable view, assign them with [`Reflect::set`].
pub enum ReflectMut<'a> {
    Struct(&'a mut dyn Struct),
    List(&'a mut dyn List),
    Map(&'a mut dyn Map),
    Option(&'a mut dyn Optional),
    Pointer(&'a mut dyn Pointer),
    Scalar(&'a mut dyn Reflect),
    Opaque(&'a mut dyn Reflect),
}

impl<'a> ReflectMut<'a> {
    impl_ref_cast!(as_struct: Struct => &'a mut dyn Struct);
    impl_ref_cast!(as_list: List => &'a mut dyn List);
    impl_ref_cast!(as_map: Map => &'a mut dyn Map);

    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::List(_) => ReflectKind::List,
            Self::Map(_) => ReflectKind::Map,
            Self::Option(_) => ReflectKind::Option,
            Self::Pointer(_) => ReflectKind::Pointer,
            Self::Scalar(_) => ReflectKind::Scalar,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }
}
