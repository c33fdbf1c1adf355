use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::sync::Arc;
use core::cell::{Ref, RefCell};

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat};
use crate::info::{PointerInfo, TypeInfo, TypePath, Typed};
use crate::ops::{BorrowError, PointeeRef, Pointer};
use crate::reflection::impl_reflect_cast_fn;

// -----------------------------------------------------------------------------
// Macro

macro_rules! impl_pointer {
    ($ptr:ident, $module:literal, $new:path) => {
        impl<T: TypePath> TypePath for $ptr<T> {
            fn type_path() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    concat(&[$module, "::", stringify!($ptr), "<", T::type_path(), ">"])
                })
            }

            fn type_name() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| concat(&[stringify!($ptr), "<", T::type_name(), ">"]))
            }

            #[inline]
            fn type_ident() -> &'static str {
                stringify!($ptr)
            }

            #[inline]
            fn module_path() -> Option<&'static str> {
                Some($module)
            }
        }

        impl<T: Reflect + Typed> Typed for $ptr<T> {
            fn type_info() -> &'static TypeInfo {
                fn wrap<T: Reflect + Typed>(
                    pointee: Box<dyn Reflect>,
                ) -> Result<Box<dyn Reflect>, Box<dyn Reflect>> {
                    let pointee: T = pointee.take::<T>()?;
                    Ok(Box::new($new(pointee)))
                }

                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| {
                    TypeInfo::Pointer(PointerInfo::new::<Self, T>(wrap::<T>))
                })
            }
        }

        impl<T: Reflect + Typed> Reflect for $ptr<T> {
            impl_reflect_cast_fn!(Pointer);
        }
    };
}

// -----------------------------------------------------------------------------
// Implementation

impl_pointer!(Box, "alloc::boxed", Box::new);
impl_pointer!(Rc, "alloc::rc", Rc::new);
impl_pointer!(Arc, "alloc::sync", Arc::new);
impl_pointer!(RefCell, "core::cell", RefCell::new);

impl<T: Reflect + Typed> Pointer for Box<T> {
    #[inline]
    fn pointee(&self) -> Result<PointeeRef<'_>, BorrowError> {
        let pointee: &T = self;
        Ok(PointeeRef::Plain(pointee))
    }
}

impl<T: Reflect + Typed> Pointer for Rc<T> {
    #[inline]
    fn pointee(&self) -> Result<PointeeRef<'_>, BorrowError> {
        let pointee: &T = self;
        Ok(PointeeRef::Plain(pointee))
    }
}

impl<T: Reflect + Typed> Pointer for Arc<T> {
    #[inline]
    fn pointee(&self) -> Result<PointeeRef<'_>, BorrowError> {
        let pointee: &T = self;
        Ok(PointeeRef::Plain(pointee))
    }
}

impl<T: Reflect + Typed> Pointer for RefCell<T> {
    fn pointee(&self) -> Result<PointeeRef<'_>, BorrowError> {
        match self.try_borrow() {
            Ok(guard) => Ok(PointeeRef::Cell(Ref::map(guard, |v| v as &dyn Reflect))),
            Err(_) => Err(BorrowError {
                type_path: Self::type_path(),
            }),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use core::cell::RefCell;

    use crate::Reflect;
    use crate::info::{TypePath, Typed};

    #[test]
    fn pointer_paths() {
        assert_eq!(<Rc<RefCell<u8>>>::type_path(), "alloc::rc::Rc<core::cell::RefCell<u8>>");
        assert_eq!(<Rc<RefCell<u8>>>::type_name(), "Rc<RefCell<u8>>");
    }

    #[test]
    fn wrap_pointee() {
        let info = <Rc<u32>>::type_info().as_pointer().unwrap();
        assert!(info.pointee_info().type_is::<u32>());

        let wrapped = info.wrap(9_u32.into_boxed_reflect()).unwrap();
        assert_eq!(wrapped.downcast_ref::<Rc<u32>>().map(|rc| **rc), Some(9));
        assert!(info.wrap(9_u8.into_boxed_reflect()).is_err());
    }

    #[test]
    fn busy_cell_reports_borrow_error() {
        let cell = RefCell::new(1_i32);
        let guard = cell.borrow_mut();
        let ptr = cell.reflect_ref().as_pointer().unwrap();
        let err = ptr.pointee().err().unwrap();
        assert_eq!(err.type_path, "core::cell::RefCell<i32>");
        drop(guard);
        assert!(ptr.pointee().is_ok());
    }
}
