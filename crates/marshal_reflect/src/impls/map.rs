use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use core::hash::Hash;
use std::collections::HashMap;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat, generic_path};
use crate::info::{MapInfo, TypeInfo, TypePath, Typed};
use crate::ops::{Map, MapIter};
use crate::reflection::impl_reflect_cast_fn;

macro_rules! impl_map {
    ($map:ident, $module:literal, [$($key_bound:tt)*]) => {
        impl<K: TypePath, V: TypePath> TypePath for $map<K, V> {
            fn type_path() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    let prefix = concat(&[$module, "::", stringify!($map)]);
                    generic_path(&prefix, &[K::type_path(), V::type_path()])
                })
            }

            fn type_name() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    generic_path(stringify!($map), &[K::type_name(), V::type_name()])
                })
            }

            #[inline]
            fn type_ident() -> &'static str {
                stringify!($map)
            }

            #[inline]
            fn module_path() -> Option<&'static str> {
                Some($module)
            }
        }

        impl<K, V> Typed for $map<K, V>
        where
            K: Reflect + Typed + $($key_bound)*,
            V: Reflect + Typed,
        {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| TypeInfo::Map(MapInfo::new::<Self, K, V>()))
            }
        }

        impl<K, V> Map for $map<K, V>
        where
            K: Reflect + Typed + $($key_bound)*,
            V: Reflect + Typed,
        {
            #[inline]
            fn len(&self) -> usize {
                $map::len(self)
            }

            fn entries(&self) -> MapIter<'_> {
                Box::new(
                    $map::iter(self).map(|(key, value)| (key as &dyn Reflect, value as &dyn Reflect)),
                )
            }

            fn insert_boxed(
                &mut self,
                key: Box<dyn Reflect>,
                value: Box<dyn Reflect>,
            ) -> Result<(), (Box<dyn Reflect>, Box<dyn Reflect>)> {
                let key = match key.take::<K>() {
                    Ok(key) => key,
                    Err(key) => return Err((key, value)),
                };
                let value = match value.take::<V>() {
                    Ok(value) => value,
                    Err(value) => return Err((Box::new(key), value)),
                };
                $map::insert(self, key, value);
                Ok(())
            }
        }

        impl<K, V> Reflect for $map<K, V>
        where
            K: Reflect + Typed + $($key_bound)*,
            V: Reflect + Typed,
        {
            impl_reflect_cast_fn!(Map);
        }
    };
}

impl_map!(HashMap, "std::collections", [Eq + Hash]);
impl_map!(BTreeMap, "alloc::collections::btree_map", [Ord]);

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use std::collections::HashMap;

    use crate::Reflect;
    use crate::info::{TypePath, Typed};
    use crate::ops::Map;

    #[test]
    fn map_paths() {
        assert_eq!(<HashMap<String, u8>>::type_path(), "std::collections::HashMap<alloc::string::String, u8>");
        assert_eq!(<BTreeMap<u8, bool>>::type_name(), "BTreeMap<u8, bool>");
    }

    #[test]
    fn insert_rejects_wrong_types() {
        let mut map: HashMap<String, u8> = HashMap::new();
        let (key, value) = map
            .insert_boxed(1_u8.into_boxed_reflect(), 1_u8.into_boxed_reflect())
            .unwrap_err();
        assert!(key.is::<u8>() && value.is::<u8>());

        let (key, _) = map
            .insert_boxed(String::from("k").into_boxed_reflect(), true.into_boxed_reflect())
            .unwrap_err();
        assert_eq!(key.downcast_ref::<String>().map(String::as_str), Some("k"));
        assert!(map.is_empty());
    }

    #[test]
    fn map_info() {
        let info = <BTreeMap<String, i32>>::type_info().as_map().unwrap();
        assert!(info.key_info().type_is::<String>());
        assert!(info.value_info().type_is::<i32>());
        assert!(info.new_empty().is::<BTreeMap<String, i32>>());
    }
}
