use alloc::boxed::Box;

use crate::Reflect;
use crate::info::{Type, TypeInfo, TypePath, Typed, impl_type_fn};
use crate::ops::List;

/// Capability table of a list-like type (e.g. `Vec<T>`).
///
/// ```
/// use marshal_reflect::info::Typed;
///
/// let info = <Vec<u8>>::type_info().as_list().unwrap();
/// assert!(info.item_info().type_is::<u8>());
/// assert!(info.new_empty().is::<Vec<u8>>());
/// ```
#[derive(Clone, Debug)]
pub struct ListInfo {
    ty: Type,
    item_info: fn() -> &'static TypeInfo,
    new_empty: fn() -> Box<dyn Reflect>,
}

impl ListInfo {
    impl_type_fn!(ty);

    /// Creates the table of list `L` holding `T`.
    pub fn new<L: List + TypePath + Default, T: Typed>() -> Self {
        Self {
            ty: Type::of::<L>(),
            item_info: T::type_info,
            new_empty: || -> Box<dyn Reflect> { Box::new(L::default()) },
        }
    }

    /// Returns the item type's [`TypeInfo`].
    #[inline]
    pub fn item_info(&self) -> &'static TypeInfo {
        (self.item_info)()
    }

    /// Creates an empty list.
    #[inline]
    pub fn new_empty(&self) -> Box<dyn Reflect> {
        (self.new_empty)()
    }
}
