//! Data access interfaces, one per reflected kind.
//!
//! The following are subtraits of [`Reflect`]:
//!
//! - [`Struct`]: named fields in declaration order (e.g. `A { .. }`).
//! - [`List`]: ordered items (e.g. `Vec<i32>`).
//! - [`Map`]: key/value entries (e.g. `HashMap<String, f32>`).
//! - [`Optional`]: `Option<T>`.
//! - [`Pointer`]: a wrapper around exactly one pointee (e.g. `Rc<RefCell<T>>`).
//!
//! Scalars are viewed by value through [`ScalarRef`], opaque values are
//! only visible as `&dyn Reflect`.
//!
//! [`ReflectRef`] and [`ReflectMut`] dispatch a value to the matching view.
//!
//! [`Reflect`]: crate::Reflect

// -----------------------------------------------------------------------------
// Modules

mod kind;
mod list_ops;
mod map_ops;
mod option_ops;
mod pointer_ops;
mod scalar;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use kind::{ReflectMut, ReflectRef};

pub use list_ops::{List, ListItemIter};
pub use map_ops::{Map, MapIter};
pub use option_ops::Optional;
pub use pointer_ops::{BorrowError, PointeeRef, Pointer};
pub use scalar::ScalarRef;
pub use struct_ops::{Struct, StructFieldIter};
