use alloc::boxed::Box;

use crate::Reflect;
use crate::info::{Type, TypeInfo, TypePath, Typed, impl_type_fn};
use crate::ops::Map;

/// Capability table of a map-like type (e.g. `HashMap<K, V>`).
#[derive(Clone, Debug)]
pub struct MapInfo {
    ty: Type,
    key_info: fn() -> &'static TypeInfo,
    value_info: fn() -> &'static TypeInfo,
    new_empty: fn() -> Box<dyn Reflect>,
}

impl MapInfo {
    impl_type_fn!(ty);

    /// Creates the table of map `M` from `K` to `V`.
    pub fn new<M: Map + TypePath + Default, K: Typed, V: Typed>() -> Self {
        Self {
            ty: Type::of::<M>(),
            key_info: K::type_info,
            value_info: V::type_info,
            new_empty: || -> Box<dyn Reflect> { Box::new(M::default()) },
        }
    }

    #[inline]
    pub fn key_info(&self) -> &'static TypeInfo {
        (self.key_info)()
    }

    #[inline]
    pub fn value_info(&self) -> &'static TypeInfo {
        (self.value_info)()
    }

    /// Creates an empty map.
    #[inline]
    pub fn new_empty(&self) -> Box<dyn Reflect> {
        (self.new_empty)()
    }
}
