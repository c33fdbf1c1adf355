use alloc::boxed::Box;

use crate::Reflect;
use crate::info::{Type, TypeInfo, TypePath, Typed, impl_type_fn};

/// Capability table of a single-pointee wrapper: `Box`, `Rc`, `Arc`, `RefCell`.
#[derive(Clone, Debug)]
pub struct PointerInfo {
    ty: Type,
    pointee_info: fn() -> &'static TypeInfo,
    wrap: fn(Box<dyn Reflect>) -> Result<Box<dyn Reflect>, Box<dyn Reflect>>,
}

impl PointerInfo {
    impl_type_fn!(ty);

    /// Creates the table of pointer `P` to `T`.
    ///
    /// `wrap` receives a boxed `T` and returns a boxed `P`,
    /// or hands the input back if it is not a `T`.
    pub fn new<P: TypePath, T: Typed>(
        wrap: fn(Box<dyn Reflect>) -> Result<Box<dyn Reflect>, Box<dyn Reflect>>,
    ) -> Self {
        Self {
            ty: Type::of::<P>(),
            pointee_info: T::type_info,
            wrap,
        }
    }

    #[inline]
    pub fn pointee_info(&self) -> &'static TypeInfo {
        (self.pointee_info)()
    }

    /// Wraps a pointee into the pointer type.
    #[inline]
    pub fn wrap(&self, pointee: Box<dyn Reflect>) -> Result<Box<dyn Reflect>, Box<dyn Reflect>> {
        (self.wrap)(pointee)
    }
}
