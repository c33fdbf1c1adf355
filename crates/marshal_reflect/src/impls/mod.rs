//! Reflection implementations for foreign types, plus helpers for writing new ones.
//!
//! - [`concat`] and [`generic_path`]: building `TypePath` strings.
//! - [`NonGenericTypeInfoCell`], [`GenericTypeInfoCell`], [`GenericTypePathCell`]:
//!   static storage for `Typed` and `TypePath` implementations.
//! - `xxx_debug`: used to implement [`Reflect::reflect_debug`] (e.g. [`struct_debug`]).
//!
//! ## Implemented Menu
//!
//! - scalar: `bool`, `char`, `i8`-`i64`, `isize`, `u8`-`u64`, `usize`, `f32`, `f64`, `String`
//! - option: `Option<T>`
//! - pointer: `Box<T>`, `Rc<T>`, `Arc<T>`, `RefCell<T>`
//! - list: `Vec<T>`, `VecDeque<T>`
//! - map: `std::collections::HashMap<K, V>`, `BTreeMap<K, V>`
//! - opaque: `core::any::TypeId`
//! - chrono (`chrono` feature): `DateTime<Utc>`, `DateTime<FixedOffset>`, `NaiveDate`
//!
//! [`Reflect::reflect_debug`]: crate::Reflect::reflect_debug

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod debug;

mod list;
mod map;
mod opaque;
mod option;
mod pointer;
mod scalar;

#[cfg(feature = "chrono")]
mod chrono;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeCell, NonGenericTypeCell};
pub use cell::{GenericTypeInfoCell, GenericTypePathCell, NonGenericTypeInfoCell};

pub use debug::{list_debug, map_debug, option_debug, pointer_debug, struct_debug};

/// Concatenates string slices with a single allocation.
///
/// ```
/// use marshal_reflect::impls;
///
/// let s = impls::concat(&["module", "::", "name"]);
/// assert_eq!(s, "module::name");
/// assert_eq!(s.capacity(), 12);
/// ```
#[inline(never)]
pub fn concat(arr: &[&str]) -> ::alloc::string::String {
    let len = arr.iter().map(|item| item.len()).sum();
    let mut res = ::alloc::string::String::with_capacity(len);
    for &item in arr {
        res.push_str(item);
    }
    res
}

/// Builds `prefix<a, b, ...>` from a base path and generic arguments.
///
/// ```
/// use marshal_reflect::impls::generic_path;
///
/// assert_eq!(generic_path("std::collections::HashMap", &["u8", "bool"]), "std::collections::HashMap<u8, bool>");
/// assert_eq!(generic_path("app::Unit", &[]), "app::Unit");
/// ```
#[inline(never)]
pub fn generic_path(prefix: &str, params: &[&str]) -> ::alloc::string::String {
    if params.is_empty() {
        return ::alloc::string::String::from(prefix);
    }
    let mut res = ::alloc::string::String::with_capacity(prefix.len() + 2 + params.len() * 8);
    res.push_str(prefix);
    res.push('<');
    for (index, param) in params.iter().enumerate() {
        if index > 0 {
            res.push_str(", ");
        }
        res.push_str(param);
    }
    res.push('>');
    res
}
