use alloc::boxed::Box;
use alloc::string::ToString;

use marshal_reflect::Reflect;
use marshal_reflect::info::{ReflectKind, ScalarKind, TypeInfo};
use marshal_reflect::ops::ScalarRef;
use marshal_value::{Number, Value, ValueKind};

use crate::{Context, DeserializeAdapter, MarshalError, Result, SerializeAdapter};

/// Numbers, booleans, characters and strings.
///
/// Integers must fit the target width, floats accept any number and a
/// `char` is one-character text.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScalarAdapter;

crate::impl_adapter!(ScalarAdapter: serialize, deserialize);

impl SerializeAdapter for ScalarAdapter {
    fn can_serialize(&self, value: &dyn Reflect) -> bool {
        value.reflect_kind() == ReflectKind::Scalar
    }

    fn serialize(&self, value: &dyn Reflect, _: &mut Context) -> Result<Value> {
        let scalar = value.reflect_ref().as_scalar()?;
        Ok(scalar_to_value(scalar))
    }
}

impl DeserializeAdapter for ScalarAdapter {
    fn can_deserialize(&self, _: &Value, target: &'static TypeInfo) -> bool {
        target.kind() == ReflectKind::Scalar
    }

    fn deserialize(
        &self,
        value: &Value,
        target: &'static TypeInfo,
        _: &mut Context,
    ) -> Result<Box<dyn Reflect>> {
        let info = target.as_scalar()?;

        let expected = expected_kind(info.kind());
        let scalar = match value_to_scalar(value) {
            Some(scalar) if value.kind() == expected => scalar,
            _ => return Err(MarshalError::mismatch(target.type_path(), expected, value)),
        };

        info.from_scalar(scalar)
            .ok_or_else(|| MarshalError::InvalidScalar {
                type_path: target.type_path(),
                value: value.clone(),
            })
    }
}

// -----------------------------------------------------------------------------
// Conversions

/// The [`Value`] kind a scalar of `kind` travels as.
pub(crate) const fn expected_kind(kind: ScalarKind) -> ValueKind {
    match kind {
        ScalarKind::Bool => ValueKind::Bool,
        ScalarKind::Int | ScalarKind::UInt | ScalarKind::Float => ValueKind::Number,
        ScalarKind::Char | ScalarKind::Text => ValueKind::Text,
    }
}

pub(crate) fn scalar_to_value(scalar: ScalarRef<'_>) -> Value {
    match scalar {
        ScalarRef::Bool(v) => Value::Bool(v),
        ScalarRef::Int(v) => Value::Number(Number::from(v)),
        ScalarRef::UInt(v) => Value::Number(Number::from(v)),
        ScalarRef::Float(v) => Value::Number(Number::from_f64(v)),
        ScalarRef::Char(v) => Value::Text(v.to_string()),
        ScalarRef::Str(v) => Value::Text(v.to_string()),
    }
}

fn value_to_scalar(value: &Value) -> Option<ScalarRef<'_>> {
    match value {
        Value::Bool(v) => Some(ScalarRef::Bool(*v)),
        Value::Number(n) => Some(match (n.as_u64(), n.as_i64()) {
            (Some(v), _) => ScalarRef::UInt(v),
            (None, Some(v)) => ScalarRef::Int(v),
            (None, None) => ScalarRef::Float(n.as_f64()),
        }),
        Value::Text(v) => Some(ScalarRef::Str(v)),
        Value::Null | Value::List(_) | Value::Map(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;

    use marshal_value::Value;

    use crate::{Engine, MarshalError};

    #[test]
    fn round_trip_kinds() {
        let engine = Engine::new();

        assert_eq!(engine.serialize(&-3_i16).unwrap(), Value::from(-3));
        assert_eq!(engine.serialize(&'x').unwrap(), Value::from("x"));
        assert_eq!(engine.serialize(&true).unwrap(), Value::Bool(true));
        assert_eq!(engine.serialize(&0.5_f32).unwrap(), Value::from(0.5));

        assert_eq!(engine.deserialize::<u8>(&Value::from(255)).unwrap(), 255);
        assert_eq!(engine.deserialize::<i64>(&Value::from(-1)).unwrap(), -1);
        assert_eq!(engine.deserialize::<f64>(&Value::from(2)).unwrap(), 2.0);
        assert_eq!(engine.deserialize::<char>(&Value::from("é")).unwrap(), 'é');
        assert_eq!(
            engine.deserialize::<String>(&Value::from("text")).unwrap(),
            "text"
        );
    }

    #[test]
    fn rejections() {
        let engine = Engine::new();

        let err = engine.deserialize::<u8>(&Value::from(256)).unwrap_err();
        assert!(matches!(err, MarshalError::InvalidScalar { type_path: "u8", .. }));

        let err = engine.deserialize::<u32>(&Value::from(-1)).unwrap_err();
        assert!(matches!(err, MarshalError::InvalidScalar { .. }));

        let err = engine.deserialize::<i32>(&Value::from(1.5)).unwrap_err();
        assert!(matches!(err, MarshalError::InvalidScalar { .. }));

        let err = engine.deserialize::<char>(&Value::from("ab")).unwrap_err();
        assert!(matches!(err, MarshalError::InvalidScalar { .. }));

        let err = engine.deserialize::<bool>(&Value::from(1)).unwrap_err();
        assert!(matches!(err, MarshalError::TypeMismatch { type_path: "bool", .. }));

        let err = engine.deserialize::<String>(&Value::from(vec![1])).unwrap_err();
        assert!(matches!(err, MarshalError::TypeMismatch { .. }));
    }
}
