use core::cell::Ref;
use core::ops::Deref;
use core::{error, fmt};

use crate::Reflect;

// -----------------------------------------------------------------------------
// Pointer

/// Access to the single pointee of a wrapper type.
///
/// Implemented for `Box`, `Rc`, `Arc` and `RefCell`. The address of a
/// pointee is stable for as long as the pointer is borrowed, so shared
/// graphs keep one identity per shared node.
///
/// ```
/// use std::rc::Rc;
/// use marshal_reflect::Reflect;
///
/// let shared = Rc::new(5_u32);
/// let ptr = shared.reflect_ref().as_pointer().unwrap();
/// let pointee = ptr.pointee().unwrap();
///
/// assert_eq!(pointee.downcast_ref::<u32>(), Some(&5));
/// assert!(core::ptr::eq(&*pointee as *const dyn Reflect as *const u32, &*shared));
/// ```
pub trait Pointer: Reflect {
    /// Borrows the pointee.
    ///
    /// Fails only for `RefCell` values that are currently mutably borrowed.
    fn pointee(&self) -> Result<PointeeRef<'_>, BorrowError>;
}

// -----------------------------------------------------------------------------
// PointeeRef

/// A borrowed pointee, possibly holding a `RefCell` guard.
pub enum PointeeRef<'a> {
    Plain(&'a dyn Reflect),
    Cell(Ref<'a, dyn Reflect>),
}

impl Deref for PointeeRef<'_> {
    type Target = dyn Reflect;

    #[inline]
    fn deref(&self) -> &Self::Target {
        match self {
            Self::Plain(value) => *value,
            Self::Cell(guard) => &**guard,
        }
    }
}

// -----------------------------------------------------------------------------
// BorrowError

/// A `RefCell` pointee was already mutably borrowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorrowError {
    pub type_path: &'static str,
}

impl fmt::Display for BorrowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` is already mutably borrowed", self.type_path)
    }
}

impl error::Error for BorrowError {}
