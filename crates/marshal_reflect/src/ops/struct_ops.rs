use alloc::boxed::Box;

use crate::Reflect;

// -----------------------------------------------------------------------------
// Struct

/// Field access of a struct with named fields.
///
/// Implemented by `#[derive(Reflect)]`. Fields are exposed in declaration
/// order, fields marked `#[reflect(skip)]` are not exposed at all.
///
/// # Examples
///
/// ```
/// use marshal_reflect::{Reflect, derive::Reflect, ops::Struct};
///
/// #[derive(Reflect)]
/// struct Foo {
///     a: u32,
///     b: String,
/// }
///
/// let mut foo = Foo { a: 1, b: "x".into() };
///
/// assert_eq!(foo.field_len(), 2);
/// assert_eq!(foo.name_at(1), Some("b"));
/// assert_eq!(foo.field("a").and_then(|v| v.downcast_ref::<u32>()), Some(&1));
///
/// foo.set_field("a", 7_u32.into_boxed_reflect()).unwrap();
/// assert_eq!(foo.a, 7);
/// ```
pub trait Struct: Reflect {
    /// Returns the field named `name`.
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    /// Returns the field named `name` mutably.
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect>;

    /// Returns the field at `index`.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the field at `index` mutably.
    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns the name of the field at `index`.
    fn name_at(&self, index: usize) -> Option<&str>;

    /// Returns the number of exposed fields.
    fn field_len(&self) -> usize;

    /// Iterates the field values in declaration order.
    fn iter_fields(&self) -> StructFieldIter<'_>;

    /// Assigns field `name`, handing `value` back if there is no such
    /// field or the value has the wrong type.
    fn set_field(&mut self, name: &str, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        match self.field_mut(name) {
            Some(field) => field.set(value),
            None => Err(value),
        }
    }
}

// -----------------------------------------------------------------------------
// StructFieldIter

/// An iterator over the field values of a [`Struct`].
pub struct StructFieldIter<'a> {
    struct_val: &'a dyn Struct,
    index: usize,
}

impl<'a> StructFieldIter<'a> {
    #[inline(always)]
    pub const fn new(value: &'a dyn Struct) -> Self {
        StructFieldIter {
            struct_val: value,
            index: 0,
        }
    }
}

impl<'a> Iterator for StructFieldIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.struct_val.field_at(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.struct_val.field_len() - self.index;
        (size, Some(size))
    }
}

impl ExactSizeIterator for StructFieldIter<'_> {}
