#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Extern Self

// `#[reflect(adapter = ...)]` expands to `::marshal_engine::...`,
// which must also resolve inside this crate's own tests.
extern crate self as marshal_engine;

// -----------------------------------------------------------------------------
// no_std support

extern crate alloc;
extern crate std;

// -----------------------------------------------------------------------------
// Modules

mod adapter;
mod codec;
mod context;
mod directive;
mod engine;
mod error;
mod guard;
mod provider;
mod structural;

pub mod builtin;

// -----------------------------------------------------------------------------
// Exports

#[doc(hidden)]
pub mod __macro_exports;

pub use adapter::{Adapter, DeserializeAdapter, SerializeAdapter};
pub use codec::{Decoder, Encoder};
pub use context::{Context, InFlight};
pub use directive::AdapterDirective;
pub use engine::Engine;
pub use error::{BoxError, MarshalError, Result};
pub use guard::GuardKey;
pub use provider::InstanceProvider;
pub use structural::StructuralAdapter;
