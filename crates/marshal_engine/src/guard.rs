use core::any::TypeId;
use core::fmt;

use marshal_reflect::Reflect;
use marshal_reflect::info::TypeInfo;
use marshal_value::Value;

// -----------------------------------------------------------------------------
// GuardKey

/// Identity of one in-flight conversion.
///
/// Two keys are equal when both the type and the address match. Values
/// are compared by identity only, so equal primitives at different
/// places never collide, while a struct and its first field (same
/// address) stay apart through their types.
#[derive(Clone, Copy)]
pub struct GuardKey {
    type_id: TypeId,
    addr: usize,
    type_path: &'static str,
}

impl GuardKey {
    /// Key of a value being serialized: its runtime type and address.
    pub fn of_value(value: &dyn Reflect) -> Self {
        Self {
            type_id: value.ty_id(),
            addr: core::ptr::from_ref(value).cast::<()>().addr(),
            type_path: value.reflect_type_path(),
        }
    }

    /// Key of an input being deserialized: the target type and the input's address.
    pub fn of_input(value: &Value, target: &'static TypeInfo) -> Self {
        Self {
            type_id: target.ty_id(),
            addr: core::ptr::from_ref(value).addr(),
            type_path: target.type_path(),
        }
    }

    /// Type path of the guarded value, for diagnostics.
    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.type_path
    }
}

impl PartialEq for GuardKey {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id && self.addr == other.addr
    }
}

impl Eq for GuardKey {}

impl fmt::Debug for GuardKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{:#x}", self.type_path, self.addr)
    }
}

#[cfg(test)]
mod tests {
    use marshal_reflect::Reflect;
    use marshal_reflect::info::Typed;
    use marshal_value::Value;

    use super::GuardKey;

    #[test]
    fn identity() {
        let a = 7_u32;
        let b = 7_u32;
        assert_eq!(GuardKey::of_value(&a), GuardKey::of_value(&a));
        assert_ne!(GuardKey::of_value(&a), GuardKey::of_value(&b));

        let first: &dyn Reflect = &a;
        assert_eq!(GuardKey::of_value(first).type_path(), "u32");

        // Same input, different target.
        let input = Value::from(1);
        assert_ne!(
            GuardKey::of_input(&input, u8::type_info()),
            GuardKey::of_input(&input, <Option<u8>>::type_info()),
        );
    }
}
