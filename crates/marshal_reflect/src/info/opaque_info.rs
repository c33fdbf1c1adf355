use crate::info::{Type, TypePath, impl_type_fn};

/// Capability table of a type without introspectable structure.
///
/// Opaque types (timestamps, `TypeId`, handles, ...) are only handled by
/// dedicated adapters and never by structural fallback.
#[derive(Clone, Debug)]
pub struct OpaqueInfo {
    ty: Type,
}

impl OpaqueInfo {
    impl_type_fn!(ty);

    #[inline]
    pub const fn new<T: TypePath + ?Sized>() -> Self {
        Self { ty: Type::of::<T>() }
    }
}
