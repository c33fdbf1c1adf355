use alloc::boxed::Box;

use marshal_reflect::Reflect;
use marshal_reflect::info::TypeInfo;

use crate::Result;

/// Creates blank instances for the structural adapter.
///
/// A provider is registered for one exact type with
/// [`Engine::register_instance_provider`] and takes precedence over the
/// type's zero-argument constructor. It must return a value of exactly
/// that type.
///
/// Closures taking the requested [`TypeInfo`] implement this trait.
///
/// [`Engine::register_instance_provider`]: crate::Engine::register_instance_provider
pub trait InstanceProvider: Send + Sync + 'static {
    fn create_instance(&self, target: &'static TypeInfo) -> Result<Box<dyn Reflect>>;
}

impl<F> InstanceProvider for F
where
    F: Fn(&'static TypeInfo) -> Result<Box<dyn Reflect>> + Send + Sync + 'static,
{
    #[inline]
    fn create_instance(&self, target: &'static TypeInfo) -> Result<Box<dyn Reflect>> {
        self(target)
    }
}
