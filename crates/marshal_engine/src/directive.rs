use alloc::boxed::Box;
use alloc::sync::Arc;
use core::any::TypeId;
use core::fmt;
use std::sync::OnceLock;

use marshal_utils::TypeIdMap;

use crate::Adapter;

// -----------------------------------------------------------------------------
// AdapterDirective

/// "Values of type `T` are handled by adapter `A`."
///
/// Directives are installed lazily: the first time a `T` is seen that no
/// registered adapter accepts, the engine builds an `A` and registers it.
///
/// `#[derive(Reflect)]` with `#[reflect(adapter = A)]` submits one through
/// `inventory` (feature `auto_register`); [`Engine::register_directive`]
/// adds one explicitly.
///
/// [`Engine::register_directive`]: crate::Engine::register_directive
#[derive(Clone, Copy)]
pub struct AdapterDirective {
    target: fn() -> TypeId,
    target_name: fn() -> &'static str,
    factory: fn() -> Box<dyn Adapter>,
}

impl AdapterDirective {
    /// Creates a directive installing `A::default()` for `T`.
    pub const fn new<T: 'static, A: Adapter + Default>() -> Self {
        Self {
            target: TypeId::of::<T>,
            target_name: core::any::type_name::<T>,
            factory: build_adapter::<A>,
        }
    }

    /// The `TypeId` of the handled type.
    #[inline]
    pub fn target(&self) -> TypeId {
        (self.target)()
    }

    /// Builds a fresh adapter.
    #[inline]
    pub fn build(&self) -> Box<dyn Adapter> {
        (self.factory)()
    }
}

fn build_adapter<A: Adapter + Default>() -> Box<dyn Adapter> {
    Box::new(A::default())
}

impl fmt::Debug for AdapterDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdapterDirective")
            .field("target", &(self.target_name)())
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "auto_register")]
inventory::collect!(AdapterDirective);

// -----------------------------------------------------------------------------
// DirectiveTable

/// Outcome of [`Entry::install`] for one caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Installation {
    /// No directive targets the type.
    Absent,
    /// This call built and registered the adapter.
    Fresh,
    /// The adapter was registered by another call, which this one may have
    /// waited for.
    Present,
}

/// A directive and its install state, shared by every clone.
#[derive(Clone)]
pub(crate) struct Entry {
    directive: AdapterDirective,
    installed: Arc<OnceLock<()>>,
}

impl Entry {
    /// Runs `register` with the directive unless an earlier call did.
    ///
    /// Concurrent callers block until the first one returns, so nobody
    /// observes the directive as installed before its adapter is on the
    /// chains. `register` must not convert the directive's own target.
    pub fn install(&self, register: impl FnOnce(AdapterDirective)) -> Installation {
        let mut fresh = false;
        self.installed.get_or_init(|| {
            register(self.directive);
            fresh = true;
        });

        if fresh {
            Installation::Fresh
        } else {
            Installation::Present
        }
    }
}

/// Directives known to one engine, keyed by target type.
#[derive(Default)]
pub(crate) struct DirectiveTable {
    entries: TypeIdMap<Entry>,
}

impl DirectiveTable {
    /// A table seeded with every directive submitted through `inventory`.
    pub fn collected() -> Self {
        #[cfg_attr(not(feature = "auto_register"), expect(unused_mut))]
        let mut table = Self::default();

        #[cfg(feature = "auto_register")]
        for directive in inventory::iter::<AdapterDirective> {
            if table.entries.contains(&directive.target()) {
                let target = (directive.target_name)();
                log::warn!("duplicate adapter directive for `{target}`, keeping the first");
                continue;
            }
            table.insert(*directive);
        }

        table
    }

    /// Adds or replaces the directive of its target.
    ///
    /// A replacement starts uninstalled.
    pub fn insert(&mut self, directive: AdapterDirective) {
        let entry = Entry {
            directive,
            installed: Arc::new(OnceLock::new()),
        };
        self.entries.insert(directive.target(), entry);
    }

    /// The entry of `type_id`, detached from the table lock.
    pub fn get(&self, type_id: TypeId) -> Option<Entry> {
        self.entries.get(&type_id).cloned()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use core::any::TypeId;

    use super::{AdapterDirective, DirectiveTable, Installation};
    use crate::Adapter;

    #[derive(Default)]
    struct Noop;

    impl Adapter for Noop {}

    #[test]
    fn install_once() {
        let mut table = DirectiveTable::default();
        table.insert(AdapterDirective::new::<u8, Noop>());
        assert_eq!(table.len(), 1);
        assert!(table.get(TypeId::of::<u16>()).is_none());

        let entry = table.get(TypeId::of::<u8>()).unwrap();
        let mut calls = 0;
        let first = entry.install(|directive| {
            assert_eq!(directive.target(), TypeId::of::<u8>());
            assert!(directive.build().as_serializer().is_none());
            calls += 1;
        });
        assert_eq!(first, Installation::Fresh);

        // Clones share the install state.
        let again = table.get(TypeId::of::<u8>()).unwrap();
        assert_eq!(again.install(|_| calls += 1), Installation::Present);
        assert_eq!(calls, 1);

        table.insert(AdapterDirective::new::<u8, Noop>());
        let replaced = table.get(TypeId::of::<u8>()).unwrap();
        assert_eq!(replaced.install(|_| {}), Installation::Fresh);
    }
}
