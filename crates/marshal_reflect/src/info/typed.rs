use crate::info::{TypeInfo, TypePath};

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to a type's capability table.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect) and by the
/// built-in implementations in [`impls`](crate::impls).
///
/// # Manually Impl
///
/// Use [`NonGenericTypeInfoCell`] for plain types and [`GenericTypeInfoCell`]
/// for generic ones, so the table is built once.
///
/// ```
/// use marshal_reflect::info::{NamedField, StructInfo, TypeInfo, Typed};
/// use marshal_reflect::impls::NonGenericTypeInfoCell;
/// # use marshal_reflect::derive::Reflect;
/// # #[derive(Reflect)]
/// # #[reflect(Typed = false)]
/// # struct Celsius { degrees: f64 }
///
/// impl Typed for Celsius {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| {
///             TypeInfo::Struct(StructInfo::new::<Self>(&[NamedField::new::<f64>("degrees")]))
///         })
///     }
/// }
///
/// assert_eq!(Celsius::type_info().as_struct().unwrap().field_len(), 1);
/// ```
///
/// [`NonGenericTypeInfoCell`]: crate::impls::NonGenericTypeInfoCell
/// [`GenericTypeInfoCell`]: crate::impls::GenericTypeInfoCell
pub trait Typed: TypePath {
    /// Returns the static capability table of this type.
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Dynamic dispatch for [`Typed`], implemented for every `Typed` type.
pub trait DynamicTyped {
    /// Returns the capability table of the underlying type.
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        Self::type_info()
    }
}
