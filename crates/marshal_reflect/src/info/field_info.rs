use core::any::{Any, TypeId};

use crate::info::{TypeInfo, Typed};

/// Descriptor of a named struct field: name, declared type and its table.
///
/// # Examples
///
/// ```
/// use marshal_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct Foo {
///     field_a: f32,
/// }
///
/// let info = Foo::type_info().as_struct().unwrap();
/// let field = info.field_at(0).unwrap();
///
/// assert!(field.type_is::<f32>());
/// assert_eq!(field.name(), "field_a");
/// ```
#[derive(Clone, Debug)]
pub struct NamedField {
    ty_id: TypeId,
    name: &'static str,
    // Resolved on first access, so recursive types do not recurse here.
    type_info: fn() -> &'static TypeInfo,
}

impl NamedField {
    /// Creates a descriptor for field `name` of declared type `T`.
    #[inline]
    pub const fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            name,
            type_info: T::type_info,
            ty_id: TypeId::of::<T>(),
        }
    }

    /// Returns the `TypeId` of the declared type.
    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    /// Check if the declared type is `T`.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }

    /// Returns the field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the declared type's [`TypeInfo`].
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }
}
