use alloc::boxed::Box;

use marshal_reflect::Reflect;
use marshal_reflect::info::{ReflectKind, TypeInfo};
use marshal_value::Value;

use crate::{Context, DeserializeAdapter, MarshalError, Result, SerializeAdapter};

/// `Box`, `Rc`, `Arc` and `RefCell`: transparent around the pointee.
///
/// Shared pointers are followed, not deduplicated: two `Rc`s to one value
/// serialize it twice, and a pointer back to a value still in flight is a
/// circular reference. A `RefCell` that is mutably borrowed fails with
/// [`MarshalError::Borrow`].
#[derive(Debug, Default, Clone, Copy)]
pub struct PointerAdapter;

crate::impl_adapter!(PointerAdapter: serialize, deserialize);

impl SerializeAdapter for PointerAdapter {
    fn can_serialize(&self, value: &dyn Reflect) -> bool {
        value.reflect_kind() == ReflectKind::Pointer
    }

    fn serialize(&self, value: &dyn Reflect, ctx: &mut Context) -> Result<Value> {
        let pointee = value.reflect_ref().as_pointer()?.pointee()?;
        ctx.serialize(&*pointee)
    }
}

impl DeserializeAdapter for PointerAdapter {
    fn can_deserialize(&self, _: &Value, target: &'static TypeInfo) -> bool {
        target.kind() == ReflectKind::Pointer
    }

    fn deserialize(
        &self,
        value: &Value,
        target: &'static TypeInfo,
        ctx: &mut Context,
    ) -> Result<Box<dyn Reflect>> {
        let info = target.as_pointer()?;
        let pointee = ctx.deserialize(value, info.pointee_info())?;
        info.wrap(pointee).map_err(|other| MarshalError::AdapterMismatch {
            expected: info.pointee_info().type_path(),
            found: other.reflect_type_path(),
        })
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::rc::Rc;
    use alloc::sync::Arc;
    use core::cell::RefCell;

    use marshal_value::Value;

    use crate::{Engine, MarshalError};

    #[test]
    fn transparent() {
        let engine = Engine::new();

        let shared = Rc::new(RefCell::new(3_u16));
        assert_eq!(engine.serialize(&shared).unwrap(), Value::from(3));

        let boxed: Box<Option<u8>> = engine.deserialize(&Value::from(5)).unwrap();
        assert_eq!(*boxed, Some(5));

        let arc: Arc<RefCell<u16>> = engine.deserialize(&Value::from(9)).unwrap();
        assert_eq!(*arc.borrow(), 9);
    }

    #[test]
    fn busy_cell() {
        let engine = Engine::new();
        let cell = RefCell::new(1_u8);
        let _writer = cell.borrow_mut();

        let err = engine.serialize(&cell).unwrap_err();
        assert!(matches!(err, MarshalError::Borrow(_)));
    }
}
