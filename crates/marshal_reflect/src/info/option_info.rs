use alloc::boxed::Box;

use crate::Reflect;
use crate::info::{Type, TypeInfo, Typed, impl_type_fn};

/// Capability table of `Option<T>`.
///
/// ```
/// use marshal_reflect::{Reflect, info::Typed};
///
/// let info = <Option<i32>>::type_info().as_option().unwrap();
///
/// let some = info.some(5_i32.into_boxed_reflect()).unwrap();
/// assert_eq!(some.downcast_ref::<Option<i32>>(), Some(&Some(5)));
///
/// // The inner value must be a `T`.
/// assert!(info.some("5".to_string().into_boxed_reflect()).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct OptionInfo {
    ty: Type,
    some_info: fn() -> &'static TypeInfo,
    none: fn() -> Box<dyn Reflect>,
    some: fn(Box<dyn Reflect>) -> Result<Box<dyn Reflect>, Box<dyn Reflect>>,
}

fn wrap_some<T: Reflect + Typed>(value: Box<dyn Reflect>) -> Result<Box<dyn Reflect>, Box<dyn Reflect>> {
    Ok(Box::new(Some(value.take::<T>()?)))
}

impl OptionInfo {
    impl_type_fn!(ty);

    pub fn new<T: Reflect + Typed>() -> Self
    where
        Option<T>: Reflect + Typed,
    {
        Self {
            ty: Type::of::<Option<T>>(),
            some_info: T::type_info,
            none: || -> Box<dyn Reflect> { Box::new(None::<T>) },
            some: wrap_some::<T>,
        }
    }

    /// Returns the inner type's [`TypeInfo`].
    #[inline]
    pub fn some_info(&self) -> &'static TypeInfo {
        (self.some_info)()
    }

    /// Creates `None`.
    #[inline]
    pub fn none(&self) -> Box<dyn Reflect> {
        (self.none)()
    }

    /// Wraps `value` in `Some`, handing it back if it is not the inner type.
    #[inline]
    pub fn some(&self, value: Box<dyn Reflect>) -> Result<Box<dyn Reflect>, Box<dyn Reflect>> {
        (self.some)(value)
    }
}
