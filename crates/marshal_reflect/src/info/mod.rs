//! Static capability tables.
//!
//! - [`TypePath`] / [`DynamicTypePath`]: stable type names.
//! - [`Type`]: a `TypeId` that can name its type.
//! - [`Typed`] / [`DynamicTyped`]: access to a type's [`TypeInfo`].
//! - [`TypeInfo`]: one of the per-kind tables:
//!     - [`StructInfo`] with its [`NamedField`]s,
//!     - [`ListInfo`], [`MapInfo`], [`OptionInfo`], [`PointerInfo`],
//!     - [`ScalarInfo`] with its [`ScalarKind`],
//!     - [`OpaqueInfo`].
//! - [`ReflectKind`]: the kind discriminant.

// -----------------------------------------------------------------------------
// Modules

mod field_info;
mod list_info;
mod map_info;
mod opaque_info;
mod option_info;
mod pointer_info;
mod scalar_info;
mod struct_info;
mod type_info;
mod type_path;
mod typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use type_path::impl_type_fn;

// -----------------------------------------------------------------------------
// Exports

pub use field_info::NamedField;
pub use list_info::ListInfo;
pub use map_info::MapInfo;
pub use opaque_info::OpaqueInfo;
pub use option_info::OptionInfo;
pub use pointer_info::PointerInfo;
pub use scalar_info::{ScalarInfo, ScalarKind};
pub use struct_info::StructInfo;
pub use type_info::{ReflectKind, ReflectKindError, TypeInfo};
pub use type_path::{DynamicTypePath, Type, TypePath};
pub use typed::{DynamicTyped, Typed};
