use alloc::boxed::Box;

use crate::Reflect;

/// An iterator over the entries of a [`Map`].
pub type MapIter<'a> = Box<dyn Iterator<Item = (&'a dyn Reflect, &'a dyn Reflect)> + 'a>;

// -----------------------------------------------------------------------------
// Map

/// Access to a key/value collection.
///
/// Entry order is the collection's own iteration order: sorted for
/// `BTreeMap`, unspecified for `HashMap`.
///
/// ```
/// use std::collections::BTreeMap;
/// use marshal_reflect::{Reflect, ops::Map};
///
/// let mut tree = BTreeMap::<String, u8>::new();
/// let map: &mut dyn Map = &mut tree;
///
/// map.insert_boxed("b".to_string().into_boxed_reflect(), 2_u8.into_boxed_reflect()).unwrap();
/// map.insert_boxed("a".to_string().into_boxed_reflect(), 1_u8.into_boxed_reflect()).unwrap();
///
/// let keys: Vec<_> = map
///     .entries()
///     .map(|(k, _)| k.downcast_ref::<String>().unwrap().as_str())
///     .collect();
/// assert_eq!(keys, ["a", "b"]);
/// ```
pub trait Map: Reflect {
    /// Returns the number of entries.
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates the entries.
    fn entries(&self) -> MapIter<'_>;

    /// Inserts an entry, replacing any previous value for the key.
    ///
    /// If the key or the value has the wrong type, both are handed back
    /// as a `(key, value)` pair.
    fn insert_boxed(
        &mut self,
        key: Box<dyn Reflect>,
        value: Box<dyn Reflect>,
    ) -> Result<(), (Box<dyn Reflect>, Box<dyn Reflect>)>;
}
