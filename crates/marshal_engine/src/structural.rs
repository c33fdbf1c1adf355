use alloc::borrow::ToOwned;
use alloc::boxed::Box;

use marshal_reflect::Reflect;
use marshal_reflect::info::{ReflectKind, TypeInfo};
use marshal_utils::hash::FixedHashState;
use marshal_value::{Map, Value, ValueKind};

use crate::{Context, DeserializeAdapter, MarshalError, Result, SerializeAdapter};

/// Field-by-field conversion of structs.
///
/// A struct becomes a map from field name to the serialized field value,
/// in declaration order. Deserialization creates a blank instance through
/// [`Engine::construct`], then sets each field named by the input map:
/// unknown keys are ignored and missing keys keep the constructed value.
///
/// The engine uses this adapter as the last resort for struct types, it is
/// not on any chain. Registering it gives it a place in the chain order.
///
/// [`Engine::construct`]: crate::Engine::construct
#[derive(Debug, Default, Clone, Copy)]
pub struct StructuralAdapter;

crate::impl_adapter!(StructuralAdapter: serialize, deserialize);

impl SerializeAdapter for StructuralAdapter {
    fn can_serialize(&self, value: &dyn Reflect) -> bool {
        value.reflect_kind() == ReflectKind::Struct
    }

    fn serialize(&self, value: &dyn Reflect, ctx: &mut Context) -> Result<Value> {
        let data = value.reflect_ref().as_struct()?;

        let mut map = Map::with_capacity_and_hasher(data.field_len(), FixedHashState);
        for (index, field) in data.iter_fields().enumerate() {
            let Some(name) = data.name_at(index) else {
                continue;
            };
            map.insert(name.to_owned(), ctx.serialize(field)?);
        }

        Ok(Value::Map(map))
    }
}

impl DeserializeAdapter for StructuralAdapter {
    fn can_deserialize(&self, _: &Value, target: &'static TypeInfo) -> bool {
        target.kind() == ReflectKind::Struct
    }

    fn deserialize(
        &self,
        value: &Value,
        target: &'static TypeInfo,
        ctx: &mut Context,
    ) -> Result<Box<dyn Reflect>> {
        let info = target.as_struct()?;
        let Value::Map(entries) = value else {
            return Err(MarshalError::mismatch(target.type_path(), ValueKind::Map, value));
        };

        let mut instance = ctx.engine().construct(target)?;
        let fields = instance.reflect_mut().as_struct()?;

        for (key, raw) in entries {
            let Some(field) = info.field(key) else {
                log::trace!("ignoring unknown key `{key}` of `{}`", target.type_path());
                continue;
            };

            let field_value = ctx.deserialize(raw, field.type_info())?;
            fields
                .set_field(key, field_value)
                .map_err(|rejected| MarshalError::FieldAssignment {
                    type_path: target.type_path(),
                    field: key.clone(),
                    found: rejected.reflect_type_path(),
                })?;
        }

        Ok(instance)
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::{String, ToString};

    use marshal_reflect::Reflect;
    use marshal_reflect::derive::Reflect;
    use marshal_reflect::info::TypeInfo;
    use marshal_value::{Map, Value};

    use crate::{Engine, MarshalError, Result};

    #[derive(Reflect, Default, Debug, PartialEq)]
    #[reflect(default)]
    struct Account {
        owner: String,
        balance: i64,
        #[reflect(skip)]
        session: u32,
    }

    #[derive(Reflect, Debug, PartialEq)]
    struct NoCtor {
        id: u32,
    }

    #[test]
    fn field_order_and_skip() {
        let engine = Engine::new();
        let account = Account {
            owner: "ann".into(),
            balance: -4,
            session: 9,
        };
        let value = engine.serialize(&account).unwrap();
        assert_eq!(value.to_string(), r#"{"owner":"ann","balance":-4}"#);
    }

    #[test]
    fn unknown_and_missing_keys() {
        let engine = Engine::new();
        let mut map = Map::default();
        map.insert("balance".into(), Value::from(10));
        map.insert("color".into(), Value::from("red"));

        let account: Account = engine.deserialize(&Value::Map(map)).unwrap();
        assert_eq!(account, Account { balance: 10, ..Default::default() });
    }

    #[test]
    fn failures() {
        let engine = Engine::new();

        let err = engine.deserialize::<Account>(&Value::from(1)).unwrap_err();
        assert!(matches!(err, MarshalError::TypeMismatch { .. }));

        let err = engine.deserialize::<NoCtor>(&Value::Map(Map::default())).unwrap_err();
        assert!(matches!(err, MarshalError::Construction { .. }));

        let mut map = Map::default();
        map.insert("balance".into(), Value::from("lots"));
        let err = engine.deserialize::<Account>(&Value::Map(map)).unwrap_err();
        assert!(matches!(err, MarshalError::TypeMismatch { type_path: "i64", .. }));
    }

    #[test]
    fn provider_first() {
        let engine = Engine::new();
        engine.register_instance_provider::<NoCtor>(
            |_: &'static TypeInfo| -> Result<Box<dyn Reflect>> { Ok(Box::new(NoCtor { id: 1 })) },
        );

        let built: NoCtor = engine.deserialize(&Value::Map(Map::default())).unwrap();
        assert_eq!(built, NoCtor { id: 1 });
    }
}
