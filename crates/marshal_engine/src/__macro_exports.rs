//! Paths used by the code `#[derive(Reflect)]` generates.

#[cfg(feature = "auto_register")]
pub use inventory;

pub use crate::directive::AdapterDirective;
