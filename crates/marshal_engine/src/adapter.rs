use alloc::boxed::Box;

use marshal_reflect::Reflect;
use marshal_reflect::info::TypeInfo;
use marshal_value::Value;

use crate::{Context, Engine, Result};

// -----------------------------------------------------------------------------
// Capabilities

/// Converts reflected values into [`Value`]s.
pub trait SerializeAdapter: Send + Sync {
    /// Returns `true` if this adapter handles `value`.
    ///
    /// Must be cheap and side-effect free, it runs for every value
    /// the adapter is offered.
    fn can_serialize(&self, value: &dyn Reflect) -> bool;

    /// Converts `value`.
    ///
    /// Nested values go through [`Context::serialize`], so they are
    /// dispatched and guarded like the top-level one.
    fn serialize(&self, value: &dyn Reflect, ctx: &mut Context) -> Result<Value>;
}

/// Builds reflected values from [`Value`]s.
pub trait DeserializeAdapter: Send + Sync {
    /// Returns `true` if this adapter builds `target` from `value`.
    fn can_deserialize(&self, value: &Value, target: &'static TypeInfo) -> bool;

    /// Builds a `target` from `value`.
    ///
    /// The returned box must hold exactly `target`'s type. `value` is never
    /// `Value::Null`, the context resolves null before dispatching.
    fn deserialize(
        &self,
        value: &Value,
        target: &'static TypeInfo,
        ctx: &mut Context,
    ) -> Result<Box<dyn Reflect>>;
}

// -----------------------------------------------------------------------------
// Adapter

/// A unit registered with an [`Engine`].
///
/// An adapter exposes one or both capabilities. One exposing both is
/// placed on both chains and is usually called a type adapter.
/// [`impl_adapter!`] writes the exposure methods.
///
/// # Examples
///
/// ```
/// use marshal_engine::{Context, Engine, Result, SerializeAdapter, impl_adapter};
/// use marshal_reflect::Reflect;
/// use marshal_value::Value;
///
/// struct Redacted;
///
/// impl SerializeAdapter for Redacted {
///     fn can_serialize(&self, value: &dyn Reflect) -> bool {
///         value.is::<String>()
///     }
///
///     fn serialize(&self, _: &dyn Reflect, _: &mut Context) -> Result<Value> {
///         Ok(Value::from("***"))
///     }
/// }
///
/// impl_adapter!(Redacted: serialize);
///
/// let engine = Engine::new();
/// engine.register_adapter(Redacted);
///
/// // Built-in scalar adapter comes first.
/// assert_eq!(engine.serialize(&String::from("pw")).unwrap(), Value::from("pw"));
/// ```
pub trait Adapter: Send + Sync + 'static {
    /// Called once by [`Engine::register_adapter`] before the adapter is
    /// placed on the chains.
    fn install(&mut self, engine: &Engine) {
        let _ = engine;
    }

    /// The serialize capability, if any.
    fn as_serializer(&self) -> Option<&dyn SerializeAdapter> {
        None
    }

    /// The deserialize capability, if any.
    fn as_deserializer(&self) -> Option<&dyn DeserializeAdapter> {
        None
    }

    /// Name used in log records.
    fn name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Implements [`Adapter`] by exposing the listed capabilities.
///
/// ```ignore
/// impl_adapter!(MoneyAdapter: serialize, deserialize);
/// impl_adapter!(AuditLog: serialize);
/// ```
///
/// Adapters that need [`Adapter::install`] implement the trait by hand.
#[macro_export]
macro_rules! impl_adapter {
    (@expose serialize) => {
        #[inline]
        fn as_serializer(&self) -> ::core::option::Option<&dyn $crate::SerializeAdapter> {
            ::core::option::Option::Some(self)
        }
    };
    (@expose deserialize) => {
        #[inline]
        fn as_deserializer(&self) -> ::core::option::Option<&dyn $crate::DeserializeAdapter> {
            ::core::option::Option::Some(self)
        }
    };
    ($ty:ty : $($capability:ident),+ $(,)?) => {
        impl $crate::Adapter for $ty {
            $($crate::impl_adapter!(@expose $capability);)+
        }
    };
}
