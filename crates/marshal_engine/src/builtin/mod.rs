//! Adapters registered by [`Engine::new`], in chain order.
//!
//! | Adapter | Handles |
//! |---|---|
//! | [`ScalarAdapter`] | integers, floats, `bool`, `char`, `String` |
//! | [`TimestampAdapter`] | `DateTime<Utc>`, `DateTime<FixedOffset>`, `NaiveDate` |
//! | [`OptionAdapter`] | `Option<T>` |
//! | [`PointerAdapter`] | `Box<T>`, `Rc<T>`, `Arc<T>`, `RefCell<T>` |
//! | [`SequenceAdapter`] | `Vec<T>`, `VecDeque<T>` |
//! | [`MapAdapter`] | `HashMap<K, V>`, `BTreeMap<K, V>` |
//!
//! [`Engine::new`]: crate::Engine::new

// -----------------------------------------------------------------------------
// Modules

mod map;
mod option;
mod pointer;
mod scalar;
mod sequence;
mod timestamp;

// -----------------------------------------------------------------------------
// Exports

pub use map::MapAdapter;
pub use option::OptionAdapter;
pub use pointer::PointerAdapter;
pub use scalar::ScalarAdapter;
pub use sequence::SequenceAdapter;
pub use timestamp::TimestampAdapter;
