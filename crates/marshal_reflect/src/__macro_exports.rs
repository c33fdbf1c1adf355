//! Paths used by the code `#[derive(Reflect)]` generates.

pub use alloc::boxed::Box;
pub use core::option::Option;
pub use core::result::Result;

pub use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, NonGenericTypeInfoCell};
pub use crate::impls::{generic_path, struct_debug};
