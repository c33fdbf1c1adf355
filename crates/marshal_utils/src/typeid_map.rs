use core::any::TypeId;

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;

use crate::hash::NoOpHashState;

// -----------------------------------------------------------------------------
// TypeIdMap

/// A map with [`TypeId`] as the fixed key type.
///
/// Backs the per-type tables: instance providers, adapter directives and
/// lazily built type infos. Entries are added or replaced, never removed.
///
/// # Examples
///
/// ```
/// use core::any::TypeId;
/// use marshal_utils::TypeIdMap;
///
/// let mut map = TypeIdMap::<&str>::new();
/// map.insert(TypeId::of::<i32>(), "int");
///
/// assert_eq!(map.get(&TypeId::of::<i32>()), Some(&"int"));
/// assert!(!map.contains(&TypeId::of::<u8>()));
/// ```
pub struct TypeIdMap<V>(HashMap<TypeId, V, NoOpHashState>);

impl<V> TypeIdMap<V> {
    #[inline]
    pub const fn new() -> Self {
        Self(HashMap::with_hasher(NoOpHashState))
    }

    /// Gets a mutable reference to the value of `type_id`,
    /// inserting the result of `f` if the key is not present.
    #[inline]
    pub fn get_or_insert(&mut self, type_id: TypeId, f: impl FnOnce() -> V) -> &mut V {
        match self.0.entry(type_id) {
            Entry::Vacant(entry) => entry.insert(f()),
            Entry::Occupied(entry) => entry.into_mut(),
        }
    }

    pub fn get(&self, type_id: &TypeId) -> Option<&V> {
        self.0.get(type_id)
    }

    /// Inserts a value, returning the one it replaces.
    pub fn insert(&mut self, type_id: TypeId, v: V) -> Option<V> {
        self.0.insert(type_id, v)
    }

    pub fn contains(&self, type_id: &TypeId) -> bool {
        self.0.contains_key(type_id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<V> Default for TypeIdMap<V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use core::any::TypeId;

    use super::TypeIdMap;

    #[test]
    fn last_insert_wins() {
        let mut map = TypeIdMap::new();
        assert_eq!(map.insert(TypeId::of::<u8>(), 1), None);
        assert_eq!(map.insert(TypeId::of::<u8>(), 2), Some(1));
        assert_eq!(map.get(&TypeId::of::<u8>()), Some(&2));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn get_or_insert_once() {
        let mut map = TypeIdMap::new();
        *map.get_or_insert(TypeId::of::<i32>(), || 10) += 1;
        *map.get_or_insert(TypeId::of::<i32>(), || 0) += 1;
        assert_eq!(map.get(&TypeId::of::<i32>()), Some(&12));
        assert!(map.contains(&TypeId::of::<i32>()));
    }
}
