use alloc::borrow::ToOwned;
use alloc::boxed::Box;
use alloc::string::{String, ToString};

use marshal_reflect::Reflect;
use marshal_reflect::info::{ReflectKind, ScalarInfo, ScalarKind, TypeInfo};
use marshal_utils::hash::FixedHashState;
use marshal_value::{Map, Value, ValueKind};

use crate::{Context, DeserializeAdapter, MarshalError, Result, SerializeAdapter};

/// `HashMap<K, V>` and `BTreeMap<K, V>` as text-keyed maps.
///
/// A serialized key is used as is when it is text and through its
/// `Display` form otherwise, so `7_u32` becomes `"7"` and `None` becomes
/// `"null"`. On the way back a key is parsed according to the [`ScalarKind`]
/// found under any `Option` and pointer layers of the key type.
///
/// Keys that would collide as text, including `Some("null")` next to the
/// `None` of an optional key, fail with [`MarshalError::DuplicateMapKey`].
#[derive(Debug, Default, Clone, Copy)]
pub struct MapAdapter;

crate::impl_adapter!(MapAdapter: serialize, deserialize);

impl SerializeAdapter for MapAdapter {
    fn can_serialize(&self, value: &dyn Reflect) -> bool {
        value.reflect_kind() == ReflectKind::Map
    }

    fn serialize(&self, value: &dyn Reflect, ctx: &mut Context) -> Result<Value> {
        let map = value.reflect_ref().as_map()?;
        let key_info = value.reflect_type_info().as_map()?.key_info();
        let (_, nullable) = key_layers(key_info);

        let mut output = Map::with_capacity_and_hasher(map.len(), FixedHashState);
        for (key, item) in map.entries() {
            let key = ctx.serialize(key)?;
            let ambiguous = nullable && key.as_str() == Some(NULL_KEY);
            let key = key_to_text(key);
            if ambiguous || output.contains_key(&key) {
                return Err(MarshalError::DuplicateMapKey {
                    type_path: key_info.type_path(),
                    key,
                });
            }
            output.insert(key, ctx.serialize(item)?);
        }

        Ok(Value::Map(output))
    }
}

impl DeserializeAdapter for MapAdapter {
    fn can_deserialize(&self, _: &Value, target: &'static TypeInfo) -> bool {
        target.kind() == ReflectKind::Map
    }

    fn deserialize(
        &self,
        value: &Value,
        target: &'static TypeInfo,
        ctx: &mut Context,
    ) -> Result<Box<dyn Reflect>> {
        let info = target.as_map()?;
        let Value::Map(entries) = value else {
            return Err(MarshalError::mismatch(target.type_path(), ValueKind::Map, value));
        };

        let mut output = info.new_empty();
        let map = output.reflect_mut().as_map()?;
        for (key, item) in entries {
            let key = text_to_key(key, info.key_info())?;
            let key = ctx.deserialize(&key, info.key_info())?;
            let item = ctx.deserialize(item, info.value_info())?;
            map.insert_boxed(key, item)
                .map_err(|(key, _)| MarshalError::AdapterMismatch {
                    expected: info.key_info().type_path(),
                    found: key.reflect_type_path(),
                })?;
        }

        Ok(output)
    }
}

// -----------------------------------------------------------------------------
// Key coercion

const NULL_KEY: &str = "null";

fn key_to_text(key: Value) -> String {
    match key {
        Value::Text(text) => text,
        other => other.to_string(),
    }
}

/// Strips `Option` and pointer layers off a key type.
///
/// Returns the innermost type and whether `None` can occur as a key.
fn key_layers(mut info: &'static TypeInfo) -> (&'static TypeInfo, bool) {
    let mut nullable = false;
    loop {
        info = match info {
            TypeInfo::Option(option) => {
                nullable = true;
                option.some_info()
            }
            TypeInfo::Pointer(pointer) => pointer.pointee_info(),
            _ => return (info, nullable),
        };
    }
}

fn text_to_key(key: &str, target: &'static TypeInfo) -> Result<Value> {
    let (inner, nullable) = key_layers(target);
    if nullable && key == NULL_KEY {
        return Ok(Value::Null);
    }

    let parsed = match inner.as_scalar().map(ScalarInfo::kind) {
        Ok(ScalarKind::Bool) => key.parse::<bool>().ok().map(Value::Bool),
        Ok(ScalarKind::Int) => key.parse::<i64>().ok().map(Value::from),
        Ok(ScalarKind::UInt) => key.parse::<u64>().ok().map(Value::from),
        Ok(ScalarKind::Float) => key.parse::<f64>().ok().map(Value::from),
        _ => Some(Value::from(key)),
    };

    parsed.ok_or_else(|| MarshalError::InvalidMapKey {
        type_path: target.type_path(),
        key: key.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::rc::Rc;
    use alloc::string::{String, ToString};
    use std::collections::HashMap;

    use marshal_value::{Map, Value};

    use crate::{Engine, MarshalError};

    #[test]
    fn keys_become_text() {
        let engine = Engine::new();

        let scores = BTreeMap::from([(7_u32, true), (30_u32, false)]);
        let value = engine.serialize(&scores).unwrap();
        assert_eq!(value.to_string(), r#"{"7":true,"30":false}"#);

        let back: BTreeMap<u32, bool> = engine.deserialize(&value).unwrap();
        assert_eq!(back, scores);

        let names = HashMap::from([(String::from("k"), -1_i8)]);
        let value = engine.serialize(&names).unwrap();
        assert_eq!(value.to_string(), r#"{"k":-1}"#);
        assert_eq!(engine.deserialize::<HashMap<String, i8>>(&value).unwrap(), names);
    }

    #[test]
    fn bad_keys() {
        let engine = Engine::new();

        let mut map = Map::default();
        map.insert("seven".into(), Value::from(1));
        let err = engine
            .deserialize::<BTreeMap<u32, u8>>(&Value::Map(map))
            .unwrap_err();
        assert!(matches!(err, MarshalError::InvalidMapKey { type_path: "u32", .. }));

        let err = engine
            .deserialize::<BTreeMap<String, u8>>(&Value::from(1))
            .unwrap_err();
        assert!(matches!(err, MarshalError::TypeMismatch { .. }));
    }

    #[test]
    fn wrapped_keys() {
        let engine = Engine::new();

        let boxed = BTreeMap::from([(Box::new(7_u32), 1_u8)]);
        let value = engine.serialize(&boxed).unwrap();
        assert_eq!(value.to_string(), r#"{"7":1}"#);
        assert_eq!(engine.deserialize::<BTreeMap<Box<u32>, u8>>(&value).unwrap(), boxed);

        let optional = BTreeMap::from([(None, 0_u8), (Some(7_u32), 1_u8)]);
        let value = engine.serialize(&optional).unwrap();
        assert_eq!(value.to_string(), r#"{"null":0,"7":1}"#);
        assert_eq!(engine.deserialize::<BTreeMap<Option<u32>, u8>>(&value).unwrap(), optional);

        let shared = BTreeMap::from([(Some(Rc::new(-2_i16)), true)]);
        let value = engine.serialize(&shared).unwrap();
        assert_eq!(value.to_string(), r#"{"-2":true}"#);
        let back: BTreeMap<Option<Rc<i16>>, bool> = engine.deserialize(&value).unwrap();
        assert_eq!(back, shared);
    }

    #[test]
    fn colliding_keys() {
        let engine = Engine::new();

        let optional = BTreeMap::from([(None, 0_u8), (Some(String::from("null")), 1_u8)]);
        let err = engine.serialize(&optional).unwrap_err();
        assert!(matches!(
            err,
            MarshalError::DuplicateMapKey { ref key, .. } if key == "null"
        ));

        let lonely = BTreeMap::from([(Some(String::from("null")), 1_u8)]);
        assert!(engine.serialize(&lonely).is_err());

        let texts = BTreeMap::from([(Some(String::from("a")), 1_u8)]);
        let value = engine.serialize(&texts).unwrap();
        assert_eq!(engine.deserialize::<BTreeMap<Option<String>, u8>>(&value).unwrap(), texts);
    }
}
