use alloc::boxed::Box;

use marshal_reflect::Reflect;
use marshal_reflect::info::{ReflectKind, TypeInfo};
use marshal_value::Value;

use crate::{Context, DeserializeAdapter, MarshalError, Result, SerializeAdapter};

/// `Option<T>`: `Some(x)` travels as `x`, `None` as null.
///
/// The context resolves null on both sides before any adapter runs, so
/// this adapter only sees `Some` values and non-null input.
#[derive(Debug, Default, Clone, Copy)]
pub struct OptionAdapter;

crate::impl_adapter!(OptionAdapter: serialize, deserialize);

impl SerializeAdapter for OptionAdapter {
    fn can_serialize(&self, value: &dyn Reflect) -> bool {
        value.reflect_kind() == ReflectKind::Option
    }

    fn serialize(&self, value: &dyn Reflect, ctx: &mut Context) -> Result<Value> {
        match value.reflect_ref().as_option()?.value() {
            Some(inner) => ctx.serialize(inner),
            None => Ok(Value::Null),
        }
    }
}

impl DeserializeAdapter for OptionAdapter {
    fn can_deserialize(&self, _: &Value, target: &'static TypeInfo) -> bool {
        target.kind() == ReflectKind::Option
    }

    fn deserialize(
        &self,
        value: &Value,
        target: &'static TypeInfo,
        ctx: &mut Context,
    ) -> Result<Box<dyn Reflect>> {
        let info = target.as_option()?;
        let inner = ctx.deserialize(value, info.some_info())?;
        info.some(inner).map_err(|other| MarshalError::AdapterMismatch {
            expected: info.some_info().type_path(),
            found: other.reflect_type_path(),
        })
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use marshal_value::Value;

    use crate::{Engine, MarshalError};

    #[test]
    fn nested_options() {
        let engine = Engine::new();

        assert_eq!(engine.serialize(&Some(4_u8)).unwrap(), Value::from(4));
        assert_eq!(engine.serialize(&None::<u8>).unwrap(), Value::Null);

        let some: Option<String> = engine.deserialize(&Value::from("a")).unwrap();
        assert_eq!(some.as_deref(), Some("a"));

        let none: Option<String> = engine.deserialize(&Value::Null).unwrap();
        assert_eq!(none, None);

        let err = engine.deserialize::<String>(&Value::Null).unwrap_err();
        assert!(matches!(err, MarshalError::UnexpectedNull { .. }));
    }
}
