//! Containers for static storage of type information.
//!
//! - [`NonGenericTypeInfoCell`]: a [`OnceLock`], for plain types.
//! - [`GenericTypeInfoCell`] and [`GenericTypePathCell`]: a [`TypeIdMap`]
//!   behind a [`RwLock`], because the `static` inside a generic function is
//!   shared by every instantiation.
//!
//! Stored values are leaked, so references to them are `'static`.

use alloc::boxed::Box;
use alloc::string::String;
use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use marshal_utils::TypeIdMap;

use crate::info::TypeInfo;

mod sealed {
    use super::TypeInfo;
    use alloc::string::String;

    pub trait TypedProperty: 'static {}

    impl TypedProperty for String {}
    impl TypedProperty for TypeInfo {}
}

use sealed::TypedProperty;

// -----------------------------------------------------------------------------
// NonGeneric

/// Static storage for one non-generic value.
pub struct NonGenericTypeCell<T: TypedProperty>(OnceLock<T>);

/// Static storage of a non-generic type's [`TypeInfo`].
///
/// See [`Typed`](crate::info::Typed) for an example.
pub type NonGenericTypeInfoCell = NonGenericTypeCell<TypeInfo>;

impl<T: TypedProperty> NonGenericTypeCell<T> {
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the stored value, building it with `f` on first access.
    #[inline]
    pub fn get_or_init(&self, f: impl FnOnce() -> T) -> &T {
        self.0.get_or_init(f)
    }
}

impl<T: TypedProperty> Default for NonGenericTypeCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

// -----------------------------------------------------------------------------
// Generic

/// Static storage for one value per instantiation of a generic type.
pub struct GenericTypeCell<T: TypedProperty>(RwLock<TypeIdMap<&'static T>>);

/// Static storage of a generic type's [`TypeInfo`].
///
/// ```
/// use marshal_reflect::impls::GenericTypeInfoCell;
/// use marshal_reflect::info::{ListInfo, TypeInfo};
///
/// static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
///
/// let a = CELL.get_or_insert::<Vec<u8>>(|| TypeInfo::List(ListInfo::new::<Vec<u8>, u8>()));
/// let b = CELL.get_or_insert::<Vec<u8>>(|| unreachable!());
/// assert!(core::ptr::eq(a, b));
/// ```
pub type GenericTypeInfoCell = GenericTypeCell<TypeInfo>;

/// Static storage of a generic type's path strings.
///
/// ```
/// use marshal_reflect::impls::{GenericTypePathCell, generic_path};
///
/// static CELL: GenericTypePathCell = GenericTypePathCell::new();
///
/// let path = CELL.get_or_insert::<Vec<u8>>(|| generic_path("demo::Wrapper", &["u8"]));
/// assert_eq!(path, "demo::Wrapper<u8>");
/// ```
pub type GenericTypePathCell = GenericTypeCell<String>;

impl<T: TypedProperty> GenericTypeCell<T> {
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(TypeIdMap::new()))
    }

    /// Returns the value stored for `G`, building it with `f` on first access.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> T) -> &T {
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    #[inline(never)]
    fn get_or_insert_by_type_id(&self, type_id: TypeId, f: impl FnOnce() -> T) -> &T {
        match self.get_by_type_id(type_id) {
            Some(value) => value,
            None => self.insert_by_type_id(type_id, f()),
        }
    }

    #[inline(never)]
    fn get_by_type_id(&self, type_id: TypeId) -> Option<&T> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied()
    }

    // Another thread may have won the race, its value is kept.
    #[inline(never)]
    fn insert_by_type_id(&self, type_id: TypeId, value: T) -> &T {
        let mut map = self.0.write().unwrap_or_else(PoisonError::into_inner);
        *map.get_or_insert(type_id, || Box::leak(Box::new(value)))
    }
}

impl<T: TypedProperty> Default for GenericTypeCell<T> {
    fn default() -> Self {
        Self::new()
    }
}
