use alloc::boxed::Box;
use alloc::vec::Vec;

use marshal_reflect::Reflect;
use marshal_reflect::info::{ReflectKind, TypeInfo};
use marshal_value::{Value, ValueKind};

use crate::{Context, DeserializeAdapter, MarshalError, Result, SerializeAdapter};

/// `Vec<T>` and `VecDeque<T>` as ordered lists.
#[derive(Debug, Default, Clone, Copy)]
pub struct SequenceAdapter;

crate::impl_adapter!(SequenceAdapter: serialize, deserialize);

impl SerializeAdapter for SequenceAdapter {
    fn can_serialize(&self, value: &dyn Reflect) -> bool {
        value.reflect_kind() == ReflectKind::List
    }

    fn serialize(&self, value: &dyn Reflect, ctx: &mut Context) -> Result<Value> {
        let list = value.reflect_ref().as_list()?;
        let items = list
            .iter()
            .map(|item| ctx.serialize(item))
            .collect::<Result<Vec<_>>>()?;
        Ok(Value::List(items))
    }
}

impl DeserializeAdapter for SequenceAdapter {
    fn can_deserialize(&self, _: &Value, target: &'static TypeInfo) -> bool {
        target.kind() == ReflectKind::List
    }

    fn deserialize(
        &self,
        value: &Value,
        target: &'static TypeInfo,
        ctx: &mut Context,
    ) -> Result<Box<dyn Reflect>> {
        let info = target.as_list()?;
        let Value::List(items) = value else {
            return Err(MarshalError::mismatch(target.type_path(), ValueKind::List, value));
        };

        let mut output = info.new_empty();
        let list = output.reflect_mut().as_list()?;
        for item in items {
            let item = ctx.deserialize(item, info.item_info())?;
            list.push(item).map_err(|other| MarshalError::AdapterMismatch {
                expected: info.item_info().type_path(),
                found: other.reflect_type_path(),
            })?;
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::VecDeque;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use marshal_value::Value;

    use crate::{Engine, MarshalError};

    #[test]
    fn lists() {
        let engine = Engine::new();

        let words = VecDeque::from([String::from("a"), String::from("b")]);
        let value = engine.serialize(&words).unwrap();
        assert_eq!(value, Value::from(vec!["a", "b"]));

        let back: VecDeque<String> = engine.deserialize(&value).unwrap();
        assert_eq!(back, words);

        let nested: Vec<Vec<u8>> = engine
            .deserialize(&Value::from(vec![vec![1], vec![], vec![2, 3]]))
            .unwrap();
        assert_eq!(nested, vec![vec![1_u8], vec![], vec![2, 3]]);
    }

    #[test]
    fn item_errors() {
        let engine = Engine::new();

        let err = engine
            .deserialize::<Vec<u8>>(&Value::from(vec![Value::from(1), Value::Null]))
            .unwrap_err();
        assert!(matches!(err, MarshalError::UnexpectedNull { type_path: "u8" }));

        let err = engine.deserialize::<Vec<u8>>(&Value::from("1,2")).unwrap_err();
        assert!(matches!(err, MarshalError::TypeMismatch { .. }));
    }
}
