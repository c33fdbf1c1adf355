use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::any::TypeId;
use core::fmt;
use std::sync::{Mutex, PoisonError, RwLock};

use marshal_reflect::Reflect;
use marshal_reflect::info::{ReflectKind, TypeInfo, Typed};
use marshal_utils::TypeIdMap;
use marshal_value::Value;

use crate::builtin::{MapAdapter, OptionAdapter, PointerAdapter};
use crate::builtin::{ScalarAdapter, SequenceAdapter, TimestampAdapter};
use crate::directive::{DirectiveTable, Installation};
use crate::{Adapter, AdapterDirective, Context, Decoder, DeserializeAdapter, Encoder};
use crate::{InstanceProvider, MarshalError, Result, SerializeAdapter, StructuralAdapter};

type Chain = Arc<Vec<Arc<dyn Adapter>>>;

// -----------------------------------------------------------------------------
// Engine

/// Converts reflected values to [`Value`] trees and back.
///
/// The engine keeps two ordered adapter chains. A value is offered to the
/// serializer chain front to back and the first adapter accepting it wins;
/// deserialization works the same way against the target type. When no
/// adapter accepts, the engine installs a pending [`AdapterDirective`] for
/// the type (once) and retries, then falls back to the [`StructuralAdapter`]
/// for struct types.
///
/// [`Engine::new`] registers the built-in adapters in this order:
/// [`ScalarAdapter`], [`TimestampAdapter`], [`OptionAdapter`],
/// [`PointerAdapter`], [`SequenceAdapter`], [`MapAdapter`]. Adapters
/// registered later come after them.
///
/// An engine is `Send + Sync`. Each top-level call runs with its own
/// [`Context`], so one engine can serve concurrent call trees.
///
/// # Examples
///
/// ```
/// use marshal_engine::Engine;
/// use marshal_value::Value;
///
/// let engine = Engine::new();
///
/// let value = engine.serialize(&vec![Some(1_u8), None]).unwrap();
/// assert_eq!(value.to_string(), "[1,null]");
///
/// let back: Vec<Option<u8>> = engine.deserialize(&value).unwrap();
/// assert_eq!(back, [Some(1), None]);
/// ```
pub struct Engine {
    serializers: RwLock<Chain>,
    deserializers: RwLock<Chain>,
    providers: RwLock<TypeIdMap<Arc<dyn InstanceProvider>>>,
    directives: Mutex<DirectiveTable>,
}

impl Engine {
    /// Creates an engine with the built-in adapters and the collected
    /// directives.
    pub fn new() -> Self {
        let engine = Self::empty();
        engine.register_adapter(ScalarAdapter);
        engine.register_adapter(TimestampAdapter);
        engine.register_adapter(OptionAdapter);
        engine.register_adapter(PointerAdapter);
        engine.register_adapter(SequenceAdapter);
        engine.register_adapter(MapAdapter);
        engine
    }

    /// Creates an engine without built-in adapters.
    ///
    /// Only the structural fallback and the collected directives are
    /// available until adapters are registered.
    pub fn empty() -> Self {
        Self {
            serializers: RwLock::default(),
            deserializers: RwLock::default(),
            providers: RwLock::default(),
            directives: Mutex::new(DirectiveTable::collected()),
        }
    }

    /// A fresh call context with an empty guard.
    #[inline]
    pub fn context(&self) -> Context<'_> {
        Context::new(self)
    }

    // -------------------------------------------------------------------------
    // Registration

    /// Installs `adapter` and appends it to the chains matching its
    /// capabilities.
    ///
    /// There is no deduplication: registering an adapter twice places it
    /// twice.
    pub fn register_adapter(&self, adapter: impl Adapter) {
        self.register_boxed_adapter(Box::new(adapter));
    }

    /// Same as [`Engine::register_adapter`] for an already boxed adapter.
    pub fn register_boxed_adapter(&self, mut adapter: Box<dyn Adapter>) {
        adapter.install(self);

        let adapter: Arc<dyn Adapter> = Arc::from(adapter);
        let serialize = adapter.as_serializer().is_some();
        let deserialize = adapter.as_deserializer().is_some();

        log::debug!(
            "registered adapter {} (serialize: {serialize}, deserialize: {deserialize})",
            adapter.name(),
        );

        if serialize {
            append(&self.serializers, adapter.clone());
        }
        if deserialize {
            append(&self.deserializers, adapter);
        }
    }

    /// Registers `provider` as the instance factory of `T`, replacing any
    /// earlier one.
    pub fn register_instance_provider<T: Reflect>(&self, provider: impl InstanceProvider) {
        let mut providers = self.providers.write().unwrap_or_else(PoisonError::into_inner);
        if providers.insert(TypeId::of::<T>(), Arc::new(provider)).is_some() {
            log::debug!("replaced instance provider of `{}`", core::any::type_name::<T>());
        }
    }

    /// Declares that `T` is handled by `A`, installed lazily on first miss.
    ///
    /// Replaces a directive collected for the same type.
    pub fn register_directive<T: 'static, A: Adapter + Default>(&self) {
        self.add_directive(AdapterDirective::new::<T, A>());
    }

    /// Adds a prebuilt directive, see [`Engine::register_directive`].
    pub fn add_directive(&self, directive: AdapterDirective) {
        log::debug!("registered {directive:?}");
        self.directives
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(directive);
    }

    // -------------------------------------------------------------------------
    // Conversion

    /// Converts `value` into a [`Value`] tree.
    pub fn serialize(&self, value: &dyn Reflect) -> Result<Value> {
        self.context().serialize(value)
    }

    /// Converts `value` and hands the tree to `encoder`.
    pub fn serialize_with<E: Encoder>(&self, value: &dyn Reflect, encoder: &E) -> Result<E::Output> {
        let tree = self.serialize(value)?;
        encoder
            .encode(tree)
            .map_err(|err| MarshalError::Encode(err.into()))
    }

    /// Builds a `T` from `value`.
    ///
    /// `Value::Null` yields `None` for an `Option` target and fails with
    /// [`MarshalError::UnexpectedNull`] otherwise.
    pub fn deserialize<T: Reflect + Typed>(&self, value: &Value) -> Result<T> {
        take_typed(self.context().deserialize(value, T::type_info())?)
    }

    /// Decodes `input` with `decoder`, then builds a `T` from the tree.
    ///
    /// A decode failure happens before any conversion starts.
    pub fn deserialize_with<T, I, D>(&self, input: I, decoder: &D) -> Result<T>
    where
        T: Reflect + Typed,
        D: Decoder<I>,
    {
        take_typed(self.context().deserialize_with(input, decoder, T::type_info())?)
    }

    /// Builds a value of the runtime-chosen `target` type.
    ///
    /// Returns `None` for `Value::Null`, whatever the target.
    pub fn deserialize_dynamic(
        &self,
        target: &'static TypeInfo,
        value: &Value,
    ) -> Result<Option<Box<dyn Reflect>>> {
        self.context().deserialize_nullable(value, target)
    }

    /// Creates a blank `target` for field-by-field population.
    ///
    /// Uses the registered instance provider if any, else the type's
    /// zero-argument constructor.
    pub fn construct(&self, target: &'static TypeInfo) -> Result<Box<dyn Reflect>> {
        let provider = self
            .providers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&target.ty_id())
            .cloned();

        if let Some(provider) = provider {
            let instance = provider.create_instance(target)?;
            if instance.ty_id() != target.ty_id() {
                return Err(MarshalError::ProviderMismatch {
                    expected: target.type_path(),
                    found: instance.reflect_type_path(),
                });
            }
            return Ok(instance);
        }

        match target.as_struct().ok().and_then(|info| info.constructor()) {
            Some(constructor) => Ok(constructor()),
            None => Err(MarshalError::Construction {
                type_path: target.type_path(),
            }),
        }
    }

    // -------------------------------------------------------------------------
    // Dispatch

    /// Runs the serializer chain, the directive and the fallback for a value
    /// already pushed on the guard.
    pub(crate) fn dispatch_serialize(&self, value: &dyn Reflect, ctx: &mut Context) -> Result<Value> {
        if let Some(result) = self.try_serializers(value, ctx) {
            return result;
        }

        let installation = self.install_directive(value.ty_id());
        if installation != Installation::Absent
            && let Some(result) = self.try_serializers(value, ctx)
        {
            return result;
        }
        if installation == Installation::Fresh {
            log::warn!(
                "adapter installed for `{}` does not serialize it",
                value.reflect_type_path(),
            );
        }

        if value.reflect_kind() == ReflectKind::Struct {
            log::trace!("serializing `{}` structurally", value.reflect_type_path());
            return StructuralAdapter.serialize(value, ctx);
        }

        Err(MarshalError::UnsupportedType {
            type_path: value.reflect_type_path(),
        })
    }

    /// Deserialize counterpart of [`Engine::dispatch_serialize`].
    pub(crate) fn dispatch_deserialize(
        &self,
        value: &Value,
        target: &'static TypeInfo,
        ctx: &mut Context,
    ) -> Result<Box<dyn Reflect>> {
        if let Some(result) = self.try_deserializers(value, target, ctx) {
            return result;
        }

        let installation = self.install_directive(target.ty_id());
        if installation != Installation::Absent
            && let Some(result) = self.try_deserializers(value, target, ctx)
        {
            return result;
        }
        if installation == Installation::Fresh {
            log::warn!(
                "adapter installed for `{}` does not deserialize it",
                target.type_path(),
            );
        }

        if target.kind() == ReflectKind::Struct {
            log::trace!("deserializing `{}` structurally", target.type_path());
            return StructuralAdapter.deserialize(value, target, ctx);
        }

        Err(MarshalError::UnsupportedType {
            type_path: target.type_path(),
        })
    }

    fn try_serializers(&self, value: &dyn Reflect, ctx: &mut Context) -> Option<Result<Value>> {
        let chain = snapshot(&self.serializers);
        for adapter in chain.iter() {
            if let Some(serializer) = adapter.as_serializer()
                && serializer.can_serialize(value)
            {
                log::trace!("serializing `{}` with {}", value.reflect_type_path(), adapter.name());
                return Some(serializer.serialize(value, ctx));
            }
        }
        None
    }

    fn try_deserializers(
        &self,
        value: &Value,
        target: &'static TypeInfo,
        ctx: &mut Context,
    ) -> Option<Result<Box<dyn Reflect>>> {
        let chain = snapshot(&self.deserializers);
        for adapter in chain.iter() {
            if let Some(deserializer) = adapter.as_deserializer()
                && deserializer.can_deserialize(value, target)
            {
                log::trace!("deserializing `{}` with {}", target.type_path(), adapter.name());
                return Some(deserializer.deserialize(value, target, ctx));
            }
        }
        None
    }

    /// Makes sure the directive of `type_id`, if any, has its adapter on
    /// the chains, waiting for a concurrent install to finish.
    fn install_directive(&self, type_id: TypeId) -> Installation {
        let entry = self
            .directives
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(type_id);

        match entry {
            Some(entry) => entry.install(|directive| {
                log::debug!("installing {directive:?}");
                self.register_boxed_adapter(directive.build());
            }),
            None => Installation::Absent,
        }
    }
}

impl Default for Engine {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = |chain: &RwLock<Chain>| -> Vec<&'static str> {
            snapshot(chain).iter().map(|adapter| adapter.name()).collect()
        };
        f.debug_struct("Engine")
            .field("serializers", &names(&self.serializers))
            .field("deserializers", &names(&self.deserializers))
            .field(
                "providers",
                &self.providers.read().unwrap_or_else(PoisonError::into_inner).len(),
            )
            .field(
                "directives",
                &self.directives.lock().unwrap_or_else(PoisonError::into_inner).len(),
            )
            .finish()
    }
}

fn take_typed<T: Reflect + Typed>(boxed: Box<dyn Reflect>) -> Result<T> {
    boxed.take::<T>().map_err(|other| MarshalError::AdapterMismatch {
        expected: T::type_path(),
        found: other.reflect_type_path(),
    })
}

// -----------------------------------------------------------------------------
// Chain helpers

/// Clones the current chain, the lock is released before any adapter runs.
#[inline]
fn snapshot(chain: &RwLock<Chain>) -> Chain {
    chain.read().unwrap_or_else(PoisonError::into_inner).clone()
}

fn append(chain: &RwLock<Chain>, adapter: Arc<dyn Adapter>) {
    let mut chain = chain.write().unwrap_or_else(PoisonError::into_inner);
    Arc::make_mut(&mut chain).push(adapter);
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::{String, ToString};
    use alloc::sync::Arc;
    use alloc::{format, vec};
    use core::sync::atomic::{AtomicUsize, Ordering};

    use marshal_reflect::Reflect;
    use marshal_reflect::info::{TypeInfo, Typed};
    use marshal_value::Value;

    use super::Engine;
    use crate::{Adapter, Context, DeserializeAdapter, MarshalError, Result, SerializeAdapter};

    struct Fixed(&'static str);

    impl SerializeAdapter for Fixed {
        fn can_serialize(&self, value: &dyn Reflect) -> bool {
            value.is::<u8>()
        }

        fn serialize(&self, _: &dyn Reflect, _: &mut Context) -> Result<Value> {
            Ok(Value::from(self.0))
        }
    }

    crate::impl_adapter!(Fixed: serialize);

    #[test]
    fn first_match_wins() {
        let engine = Engine::empty();
        engine.register_adapter(Fixed("first"));
        engine.register_adapter(Fixed("second"));

        assert_eq!(engine.serialize(&1_u8).unwrap(), Value::from("first"));

        let err = engine.serialize(&1_u16).unwrap_err();
        assert!(matches!(err, MarshalError::UnsupportedType { type_path: "u16" }));
    }

    #[test]
    fn builtin_order() {
        let engine = Engine::new();
        // Built-in scalar adapter precedes user adapters.
        engine.register_adapter(Fixed("never"));
        assert_eq!(engine.serialize(&1_u8).unwrap(), Value::from(1));
    }

    struct Counting {
        installs: Arc<AtomicUsize>,
    }

    impl Adapter for Counting {
        fn install(&mut self, _: &Engine) {
            self.installs.fetch_add(1, Ordering::Relaxed);
        }

        fn as_deserializer(&self) -> Option<&dyn DeserializeAdapter> {
            Some(self)
        }
    }

    impl DeserializeAdapter for Counting {
        fn can_deserialize(&self, _: &Value, target: &'static TypeInfo) -> bool {
            target.type_is::<String>()
        }

        fn deserialize(
            &self,
            value: &Value,
            _: &'static TypeInfo,
            _: &mut Context,
        ) -> Result<Box<dyn Reflect>> {
            Ok(Box::new(value.to_string()))
        }
    }

    #[test]
    fn install_and_capabilities() {
        let engine = Engine::empty();
        let installs = Arc::new(AtomicUsize::new(0));
        engine.register_adapter(Counting {
            installs: installs.clone(),
        });
        assert_eq!(installs.load(Ordering::Relaxed), 1);

        // Deserialize only.
        let text: String = engine.deserialize(&Value::from(vec![1, 2])).unwrap();
        assert_eq!(text, "[1,2]");
        assert!(engine.serialize(&String::new()).is_err());
    }

    #[test]
    fn dynamic_entry() {
        let engine = Engine::new();

        let none = engine.deserialize_dynamic(u32::type_info(), &Value::Null).unwrap();
        assert!(none.is_none());

        let some = engine
            .deserialize_dynamic(u32::type_info(), &Value::from(7))
            .unwrap()
            .unwrap();
        assert_eq!(some.downcast_ref::<u32>(), Some(&7));
    }

    #[test]
    fn engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Engine>();

        let debug = format!("{:?}", Engine::new());
        // Listed once in each chain.
        assert_eq!(debug.matches("ScalarAdapter").count(), 2);
        assert_eq!(debug.matches("TimestampAdapter").count(), 2);
    }
}
