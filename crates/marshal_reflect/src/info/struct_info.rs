use alloc::boxed::Box;

use marshal_utils::hash::HashMap;

use crate::Reflect;
use crate::info::{NamedField, Type, TypePath, impl_type_fn};

/// Capability table of a struct with named fields.
///
/// Fields keep declaration order. The zero-argument constructor is present
/// when the type opted in, e.g. through `#[reflect(default)]`.
///
/// # Examples
///
/// ```rust
/// use marshal_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect, Default)]
/// #[reflect(default)]
/// struct A {
///     val: f32,
/// }
///
/// let info = <A as Typed>::type_info().as_struct().unwrap();
///
/// assert_eq!(info.field_len(), 1);
/// assert_eq!(info.index_of("val"), Some(0));
///
/// let fresh = (info.constructor().unwrap())();
/// assert!(fresh.is::<A>());
/// ```
#[derive(Clone, Debug)]
pub struct StructInfo {
    ty: Type,
    fields: Box<[NamedField]>,
    indices: HashMap<&'static str, usize>,
    constructor: Option<fn() -> Box<dyn Reflect>>,
}

impl StructInfo {
    impl_type_fn!(ty);

    /// Creates a table with the given fields and no constructor.
    pub fn new<T: TypePath>(fields: &[NamedField]) -> Self {
        let indices = fields
            .iter()
            .enumerate()
            .map(|(index, field)| (field.name(), index))
            .collect();

        Self {
            ty: Type::of::<T>(),
            fields: fields.into(),
            indices,
            constructor: None,
        }
    }

    /// Records `T::default` as the zero-argument constructor.
    pub fn with_default<T: Reflect + Default>(self) -> Self {
        self.with_constructor(|| -> Box<dyn Reflect> { Box::new(T::default()) })
    }

    /// Records a zero-argument constructor.
    ///
    /// The returned value must be of this table's type.
    pub fn with_constructor(mut self, constructor: fn() -> Box<dyn Reflect>) -> Self {
        self.constructor = Some(constructor);
        self
    }

    /// Returns the zero-argument constructor, if any.
    #[inline]
    pub fn constructor(&self) -> Option<fn() -> Box<dyn Reflect>> {
        self.constructor
    }

    /// Returns the field named `name`.
    pub fn field(&self, name: &str) -> Option<&NamedField> {
        self.fields.get(*self.indices.get(name)?)
    }

    /// Returns the field at `index`.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&NamedField> {
        self.fields.get(index)
    }

    /// Returns the position of field `name`.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.indices.get(name).copied()
    }

    /// Iterates the fields in declaration order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &NamedField> {
        self.fields.iter()
    }

    /// Iterates the field names in declaration order.
    #[inline]
    pub fn field_names(&self) -> impl ExactSizeIterator<Item = &'static str> + '_ {
        self.fields.iter().map(NamedField::name)
    }

    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }
}
