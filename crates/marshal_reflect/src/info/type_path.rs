use core::any::{Any, TypeId};
use core::fmt;
use core::hash::{Hash, Hasher};

// -----------------------------------------------------------------------------
// TypePath

/// Stable names of a type, independent of [`core::any::type_name`].
///
/// Error messages such as "circular reference while processing `app::Node`"
/// quote [`TypePath::type_path`]. No name starts with `::`.
///
/// ```
/// use marshal_reflect::info::TypePath;
///
/// assert_eq!(<Option<Vec<u8>>>::type_path(), "core::option::Option<alloc::vec::Vec<u8>>");
/// assert_eq!(<Option<Vec<u8>>>::type_name(), "Option<Vec<u8>>");
/// assert_eq!(<Option<Vec<u8>>>::type_ident(), "Option");
/// ```
///
/// `#[derive(Reflect)]` builds the names from `module_path!()`, or from
/// `#[reflect(type_path = "...")]`.
pub trait TypePath: 'static {
    /// Module path, type name and generics. Unique per type.
    fn type_path() -> &'static str;

    /// [`TypePath::type_path`] without module prefixes.
    fn type_name() -> &'static str;

    /// Bare name, no generics.
    fn type_ident() -> &'static str;

    /// `None` for primitives.
    fn module_path() -> Option<&'static str> {
        None
    }
}

/// [`TypePath::type_path`] through a value, for `dyn Reflect`.
///
/// ```
/// use marshal_reflect::Reflect;
///
/// let x: &dyn Reflect = &String::new();
/// assert_eq!(x.reflect_type_path(), "alloc::string::String");
/// ```
pub trait DynamicTypePath {
    fn reflect_type_path(&self) -> &'static str;
}

impl<T: TypePath> DynamicTypePath for T {
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        Self::type_path()
    }
}

// -----------------------------------------------------------------------------
// Type

/// A [`TypeId`] that can also name its type.
///
/// Compares and hashes by id only.
///
/// ```
/// use core::any::TypeId;
/// use marshal_reflect::info::Type;
///
/// let ty = Type::of::<String>();
/// assert!(ty.is::<String>());
/// assert_eq!(ty.id(), TypeId::of::<String>());
/// assert_eq!(ty.path(), "alloc::string::String");
/// ```
#[derive(Copy, Clone)]
pub struct Type {
    id: TypeId,
    path: fn() -> &'static str,
    name: fn() -> &'static str,
}

impl Type {
    #[inline]
    pub const fn of<T: TypePath + ?Sized>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            path: T::type_path,
            name: T::type_name,
        }
    }

    #[inline(always)]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }

    #[inline]
    pub fn path(&self) -> &'static str {
        (self.path)()
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        (self.name)()
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Type {}

impl Hash for Type {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

// -----------------------------------------------------------------------------
// impl_type_fn

/// Type accessors shared by the info tables, either reading a `Type`
/// field or building on an existing `ty()` method.
macro_rules! impl_type_fn {
    ($field:ident) => {
        #[inline(always)]
        pub const fn ty(&self) -> &$crate::info::Type {
            &self.$field
        }

        $crate::info::impl_type_fn!();
    };
    () => {
        #[inline]
        pub const fn ty_id(&self) -> ::core::any::TypeId {
            self.ty().id()
        }

        /// Returns `true` if the described type is `T`.
        #[inline]
        pub fn type_is<T: ::core::any::Any>(&self) -> bool {
            self.ty().is::<T>()
        }

        #[inline]
        pub fn type_path(&self) -> &'static str {
            self.ty().path()
        }

        #[inline]
        pub fn type_name(&self) -> &'static str {
            self.ty().name()
        }
    };
}

pub(crate) use impl_type_fn;
