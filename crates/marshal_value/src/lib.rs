#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// No STD Support

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod display;
mod from;
mod kind;
mod number;
mod serde;
mod value;

// -----------------------------------------------------------------------------
// Exports

pub use kind::ValueKind;
pub use number::Number;
pub use value::{Map, Value};
