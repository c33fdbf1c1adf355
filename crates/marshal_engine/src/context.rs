use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::ops::{Deref, DerefMut};

use marshal_reflect::Reflect;
use marshal_reflect::info::TypeInfo;
use marshal_reflect::ops::ReflectRef;
use marshal_value::Value;

use crate::{Decoder, Engine, GuardKey, MarshalError, Result};

// -----------------------------------------------------------------------------
// Context

/// State of one conversion call tree.
///
/// A context owns the cycle guard: the stack of values currently being
/// converted. Every nested conversion an adapter starts goes through
/// [`Context::serialize`] or [`Context::deserialize`], which push the value
/// before dispatching and pop it afterwards, on success and on error alike.
///
/// The engine's top-level methods create a fresh context per call.
/// [`Engine::context`] hands one out to run several calls against one guard.
pub struct Context<'e> {
    engine: &'e Engine,
    stack: Vec<GuardKey>,
}

impl<'e> Context<'e> {
    pub(crate) const fn new(engine: &'e Engine) -> Self {
        Self {
            engine,
            stack: Vec::new(),
        }
    }

    /// The engine this context dispatches through.
    #[inline]
    pub fn engine(&self) -> &'e Engine {
        self.engine
    }

    /// Number of values currently in flight.
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Returns `true` if `key` is currently in flight.
    pub fn contains(&self, key: &GuardKey) -> bool {
        self.stack.contains(key)
    }

    /// Marks `key` as in flight until the returned scope is dropped.
    ///
    /// Fails with [`MarshalError::CircularReference`] if it already is.
    pub fn enter(&mut self, key: GuardKey) -> Result<InFlight<'_, 'e>> {
        if self.contains(&key) {
            log::trace!("cycle at {key:?}, depth {}", self.depth());
            return Err(MarshalError::CircularReference {
                type_path: key.type_path(),
                depth: self.depth(),
            });
        }
        self.stack.push(key);
        Ok(InFlight { ctx: self })
    }

    /// Serializes a nested value.
    ///
    /// `None` becomes `Value::Null` without touching the guard.
    pub fn serialize(&mut self, value: &dyn Reflect) -> Result<Value> {
        if let ReflectRef::Option(option) = value.reflect_ref()
            && option.value().is_none()
        {
            return Ok(Value::Null);
        }

        let engine = self.engine;
        let mut scope = self.enter(GuardKey::of_value(value))?;
        engine.dispatch_serialize(value, &mut scope)
    }

    /// Deserializes a nested value into `target`.
    ///
    /// `Value::Null` becomes the `None` of an `Option` target without
    /// touching the guard, any other target fails with
    /// [`MarshalError::UnexpectedNull`].
    pub fn deserialize(
        &mut self,
        value: &Value,
        target: &'static TypeInfo,
    ) -> Result<Box<dyn Reflect>> {
        if value.is_null() {
            return match target {
                TypeInfo::Option(info) => Ok(info.none()),
                _ => Err(MarshalError::UnexpectedNull {
                    type_path: target.type_path(),
                }),
            };
        }

        let engine = self.engine;
        let mut scope = self.enter(GuardKey::of_input(value, target))?;
        engine.dispatch_deserialize(value, target, &mut scope)
    }

    /// Decodes `input` with `decoder`, then deserializes the tree into `target`.
    ///
    /// The decoder runs before anything is pushed, so a decode failure
    /// leaves the guard as it was.
    pub fn deserialize_with<I, D: Decoder<I>>(
        &mut self,
        input: I,
        decoder: &D,
        target: &'static TypeInfo,
    ) -> Result<Box<dyn Reflect>> {
        let tree = decoder
            .decode(input)
            .map_err(|err| MarshalError::Decode(err.into()))?;
        self.deserialize(&tree, target)
    }

    /// Like [`Context::deserialize`], but returns `None` for `Value::Null`
    /// whatever the target is.
    pub fn deserialize_nullable(
        &mut self,
        value: &Value,
        target: &'static TypeInfo,
    ) -> Result<Option<Box<dyn Reflect>>> {
        match value {
            Value::Null => Ok(None),
            _ => self.deserialize(value, target).map(Some),
        }
    }
}

impl fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("in_flight", &self.stack)
            .finish_non_exhaustive()
    }
}

// -----------------------------------------------------------------------------
// InFlight

/// Scope returned by [`Context::enter`].
///
/// Dereferences to the context and pops its key when dropped.
pub struct InFlight<'c, 'e> {
    ctx: &'c mut Context<'e>,
}

impl<'e> Deref for InFlight<'_, 'e> {
    type Target = Context<'e>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.ctx
    }
}

impl DerefMut for InFlight<'_, '_> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.ctx
    }
}

impl fmt::Debug for InFlight<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("InFlight").field(&self.ctx.stack.last()).finish()
    }
}

impl Drop for InFlight<'_, '_> {
    fn drop(&mut self) {
        self.ctx.stack.pop();
    }
}

#[cfg(test)]
mod tests {
    use marshal_reflect::info::Typed;
    use marshal_value::Value;

    use crate::{Engine, GuardKey, MarshalError};

    #[test]
    fn enter_and_leave() {
        let engine = Engine::new();
        let mut ctx = engine.context();
        let (a, b) = (1_i32, 1_i32);

        {
            let mut outer = ctx.enter(GuardKey::of_value(&a)).unwrap();
            assert_eq!(outer.depth(), 1);

            let inner = outer.enter(GuardKey::of_value(&b)).unwrap();
            assert_eq!(inner.depth(), 2);
            drop(inner);

            let err = outer.enter(GuardKey::of_value(&a)).unwrap_err();
            assert!(matches!(
                err,
                MarshalError::CircularReference { type_path: "i32", depth: 1 }
            ));
            assert_eq!(outer.depth(), 1);
        }

        assert_eq!(ctx.depth(), 0);
    }

    #[test]
    fn null_handling() {
        let engine = Engine::new();
        let mut ctx = engine.context();

        let none = ctx.deserialize(&Value::Null, <Option<u8>>::type_info()).unwrap();
        assert_eq!(none.take::<Option<u8>>().unwrap(), None);

        let err = ctx.deserialize(&Value::Null, u8::type_info()).unwrap_err();
        assert!(matches!(err, MarshalError::UnexpectedNull { type_path: "u8" }));

        let nothing = ctx.deserialize_nullable(&Value::Null, u8::type_info()).unwrap();
        assert!(nothing.is_none());

        assert_eq!(ctx.serialize(&None::<u8>).unwrap(), Value::Null);
        assert_eq!(ctx.depth(), 0);
    }

    #[test]
    fn decode_before_push() {
        let engine = Engine::new();
        let mut ctx = engine.context();
        let decoder = |text: &str| text.parse::<u8>().map(Value::from);

        let err = ctx.deserialize_with("x", &decoder, u8::type_info()).unwrap_err();
        assert!(matches!(err, MarshalError::Decode(_)));
        assert_eq!(ctx.depth(), 0);

        let ok = ctx.deserialize_with("3", &decoder, u8::type_info()).unwrap();
        assert_eq!(ok.take::<u8>().unwrap(), 3);
    }
}
