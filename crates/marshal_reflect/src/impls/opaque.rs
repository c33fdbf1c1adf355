use core::any::TypeId;
use core::fmt;

use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
use crate::ops::{ReflectMut, ReflectRef};

/// Implements the reflection traits of an opaque type.
///
/// Such a type is only handled by dedicated adapters. Its `Debug` impl
/// is reused for `reflect_debug`.
macro_rules! impl_opaque {
    ($ty:ty, $path:literal, $name:literal, $module:literal) => {
        impl TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                $path
            }

            #[inline]
            fn type_name() -> &'static str {
                $name
            }

            #[inline]
            fn type_ident() -> &'static str {
                $name
            }

            #[inline]
            fn module_path() -> Option<&'static str> {
                Some($module)
            }
        }

        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
            }
        }

        impl Reflect for $ty {
            fn set(
                &mut self,
                value: ::alloc::boxed::Box<dyn Reflect>,
            ) -> Result<(), ::alloc::boxed::Box<dyn Reflect>> {
                *self = value.take::<Self>()?;
                Ok(())
            }

            #[inline]
            fn reflect_kind(&self) -> crate::info::ReflectKind {
                crate::info::ReflectKind::Opaque
            }

            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::Opaque(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> ReflectMut<'_> {
                ReflectMut::Opaque(self)
            }

            fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Debug::fmt(self, f)
            }
        }
    };
}

pub(crate) use impl_opaque;

impl_opaque!(TypeId, "core::any::TypeId", "TypeId", "core::any");

#[cfg(test)]
mod tests {
    use core::any::TypeId;

    use crate::Reflect;
    use crate::info::{ReflectKind, Typed};

    #[test]
    fn type_id_is_opaque() {
        let id = TypeId::of::<u8>();
        assert_eq!(id.reflect_kind(), ReflectKind::Opaque);
        assert!(TypeId::type_info().as_opaque().is_ok());
        assert!(TypeId::type_info().as_struct().is_err());
    }
}
