use core::{error, fmt};

use crate::info::{ListInfo, MapInfo, OpaqueInfo, OptionInfo};
use crate::info::{PointerInfo, ScalarInfo, StructInfo, Type};

// -----------------------------------------------------------------------------
// ReflectKind

/// The "kinds" of a reflected type.
///
/// Obtained via [`TypeInfo::kind`] or [`Reflect::reflect_kind`].
///
/// [`Reflect::reflect_kind`]: crate::Reflect::reflect_kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    Struct,
    List,
    Map,
    Option,
    Pointer,
    Scalar,
    Opaque,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Struct => f.pad("Struct"),
            Self::List => f.pad("List"),
            Self::Map => f.pad("Map"),
            Self::Option => f.pad("Option"),
            Self::Pointer => f.pad("Pointer"),
            Self::Scalar => f.pad("Scalar"),
            Self::Opaque => f.pad("Opaque"),
        }
    }
}

/// Error returned when a type or value is not the expected [`ReflectKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReflectKindError {
    pub expected: ReflectKind,
    pub received: ReflectKind,
}

impl fmt::Display for ReflectKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reflect kind mismatch: expected {}, received {}",
            self.expected, self.received
        )
    }
}

impl error::Error for ReflectKindError {}

// -----------------------------------------------------------------------------
// TypeInfo

/// The static capability table of a reflected type.
///
/// Each variant carries the operations the engine needs for that kind:
///
/// - [`StructInfo`]: ordered field descriptors and an optional zero-argument constructor.
/// - [`ListInfo`]: item type and an empty-list constructor.
/// - [`MapInfo`]: key and value types and an empty-map constructor.
/// - [`OptionInfo`]: inner type, `None` and `Some` constructors.
/// - [`PointerInfo`]: pointee type and a wrapping constructor.
/// - [`ScalarInfo`]: scalar kind and a checked constructor.
/// - [`OpaqueInfo`]: nothing, the type is handled by dedicated adapters only.
///
/// # Examples
///
/// ```
/// use marshal_reflect::info::{ReflectKind, Typed};
///
/// assert_eq!(i32::type_info().kind(), ReflectKind::Scalar);
/// assert_eq!(<Vec<i32>>::type_info().kind(), ReflectKind::List);
/// assert_eq!(<Option<String>>::type_info().type_path(), "core::option::Option<alloc::string::String>");
/// ```
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Struct(StructInfo),
    List(ListInfo),
    Map(MapInfo),
    Option(OptionInfo),
    Pointer(PointerInfo),
    Scalar(ScalarInfo),
    Opaque(OpaqueInfo),
}

// Helper macro that implements type-safe accessor methods like `as_struct`.
macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        /// Convert [`TypeInfo`] to the specific capability table.
        pub const fn $name(&self) -> Result<&$info, ReflectKindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_struct: Struct => StructInfo);
    impl_cast_method!(as_list: List => ListInfo);
    impl_cast_method!(as_map: Map => MapInfo);
    impl_cast_method!(as_option: Option => OptionInfo);
    impl_cast_method!(as_pointer: Pointer => PointerInfo);
    impl_cast_method!(as_scalar: Scalar => ScalarInfo);
    impl_cast_method!(as_opaque: Opaque => OpaqueInfo);

    /// Returns the underlying [`Type`].
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Struct(info) => info.ty(),
            Self::List(info) => info.ty(),
            Self::Map(info) => info.ty(),
            Self::Option(info) => info.ty(),
            Self::Pointer(info) => info.ty(),
            Self::Scalar(info) => info.ty(),
            Self::Opaque(info) => info.ty(),
        }
    }

    crate::info::impl_type_fn!();

    /// Returns the [`ReflectKind`] of this table.
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
