use core::fmt;

use crate::ops::{List, Map, Optional, Pointer, Struct};

/// Formats a [`Struct`] with its type path and exposed fields.
///
/// ```
/// use marshal_reflect::{Reflect, derive::Reflect};
///
/// #[derive(Reflect)]
/// #[reflect(type_path = "demo::Pair")]
/// struct Pair {
///     a: u8,
///     b: Option<bool>,
/// }
///
/// let pair: &dyn Reflect = &Pair { a: 1, b: None };
/// assert_eq!(format!("{pair:?}"), "demo::Pair { a: 1, b: None }");
/// ```
pub fn struct_debug(dyn_struct: &dyn Struct, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_struct(dyn_struct.reflect_type_path());
    for (index, field) in dyn_struct.iter_fields().enumerate() {
        let name = dyn_struct.name_at(index).unwrap_or("?");
        debug.field(name, &field as &dyn fmt::Debug);
    }
    debug.finish()
}

pub fn list_debug(dyn_list: &dyn List, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_list();
    for item in dyn_list.iter() {
        debug.entry(&item as &dyn fmt::Debug);
    }
    debug.finish()
}

pub fn map_debug(dyn_map: &dyn Map, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_map();
    for (key, value) in dyn_map.entries() {
        debug.entry(&key as &dyn fmt::Debug, &value as &dyn fmt::Debug);
    }
    debug.finish()
}

pub fn option_debug(dyn_option: &dyn Optional, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match dyn_option.value() {
        Some(value) => f.debug_tuple("Some").field(&value as &dyn fmt::Debug).finish(),
        None => f.write_str("None"),
    }
}

/// Formats the pointee transparently, or `<borrowed>` for a busy `RefCell`.
pub fn pointer_debug(dyn_pointer: &dyn Pointer, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match dyn_pointer.pointee() {
        Ok(pointee) => fmt::Debug::fmt(&*pointee, f),
        Err(_) => f.write_str("<borrowed>"),
    }
}
