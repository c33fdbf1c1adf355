#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use marshal_engine as engine;
pub use marshal_reflect as reflect;
pub use marshal_utils as utils;
pub use marshal_value as value;
