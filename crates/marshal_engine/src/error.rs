use alloc::boxed::Box;
use alloc::string::String;
use core::error::Error;
use core::fmt::Display;

use marshal_reflect::info::ReflectKindError;
use marshal_reflect::ops::BorrowError;
use marshal_value::{Value, ValueKind};
use thiserror::Error;

/// Boxed source of encoder and decoder failures.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// `Result` with [`MarshalError`] as the error type.
pub type Result<T, E = MarshalError> = core::result::Result<T, E>;

// -----------------------------------------------------------------------------
// MarshalError

/// Every failure the engine and its adapters report.
///
/// Adapter errors propagate unchanged through the whole call tree,
/// the engine never wraps them.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MarshalError {
    /// The same value (or input, when deserializing) was reached again
    /// while it was still being processed.
    #[error("circular reference detected at `{type_path}` (depth {depth})")]
    CircularReference { type_path: &'static str, depth: usize },

    /// No adapter accepted the value and the structural fallback
    /// does not support its type.
    #[error("no adapter supports `{type_path}`")]
    UnsupportedType { type_path: &'static str },

    /// A structural deserialization target has neither an instance provider
    /// nor a zero-argument constructor.
    #[error("cannot construct `{type_path}`: no instance provider and no zero-argument constructor")]
    Construction { type_path: &'static str },

    /// An instance provider returned a value of another type.
    #[error("instance provider for `{expected}` returned `{found}`")]
    ProviderMismatch { expected: &'static str, found: &'static str },

    /// The input value has the wrong shape for the target type.
    #[error("cannot deserialize `{type_path}` from {found}, expected {expected}")]
    TypeMismatch {
        type_path: &'static str,
        expected: ValueKind,
        found: ValueKind,
    },

    /// The input has the right shape but is not a valid value of the target scalar.
    #[error("`{value}` is not a valid `{type_path}`")]
    InvalidScalar { type_path: &'static str, value: Value },

    /// A map key could not be parsed as the key type.
    #[error("map key `{key}` is not a valid `{type_path}`")]
    InvalidMapKey { type_path: &'static str, key: String },

    /// Two keys of a map serialized to the same text.
    #[error("several `{type_path}` keys serialize to `{key}`")]
    DuplicateMapKey { type_path: &'static str, key: String },

    /// `null` was given for a target that is not an `Option`.
    #[error("unexpected null for `{type_path}`")]
    UnexpectedNull { type_path: &'static str },

    /// A field refused the deserialized value.
    #[error("field `{field}` of `{type_path}` rejected a value of type `{found}`")]
    FieldAssignment {
        type_path: &'static str,
        field: String,
        found: &'static str,
    },

    /// An adapter produced a value of another type than requested.
    #[error("expected a value of type `{expected}`, found `{found}`")]
    AdapterMismatch { expected: &'static str, found: &'static str },

    /// Timestamp text is not RFC 3339 (or `YYYY-MM-DD` for dates).
    #[error("invalid timestamp `{text}`")]
    InvalidTimestamp {
        text: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error(transparent)]
    Borrow(#[from] BorrowError),

    #[error(transparent)]
    Kind(#[from] ReflectKindError),

    /// The encoder given to [`Engine::serialize_with`] failed.
    ///
    /// [`Engine::serialize_with`]: crate::Engine::serialize_with
    #[error("encoder failed")]
    Encode(#[source] BoxError),

    /// The decoder given to [`Engine::deserialize_with`] failed.
    ///
    /// [`Engine::deserialize_with`]: crate::Engine::deserialize_with
    #[error("decoder failed")]
    Decode(#[source] BoxError),

    /// Free-form failure of a user adapter.
    #[error("{0}")]
    Custom(String),
}

impl MarshalError {
    /// Creates a [`MarshalError::Custom`] from any displayable message.
    pub fn custom(msg: impl Display) -> Self {
        use alloc::string::ToString;
        Self::Custom(msg.to_string())
    }

    /// Shortcut for [`MarshalError::TypeMismatch`] against the input's kind.
    pub fn mismatch(type_path: &'static str, expected: ValueKind, found: &Value) -> Self {
        Self::TypeMismatch {
            type_path,
            expected,
            found: found.kind(),
        }
    }

    /// Returns `true` for [`MarshalError::CircularReference`].
    pub fn is_circular(&self) -> bool {
        matches!(self, Self::CircularReference { .. })
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use marshal_value::{Value, ValueKind};

    use super::MarshalError;

    #[test]
    fn display() {
        let err = MarshalError::CircularReference {
            type_path: "demo::Node",
            depth: 3,
        };
        assert!(err.is_circular());
        assert_eq!(
            err.to_string(),
            "circular reference detected at `demo::Node` (depth 3)"
        );

        let err = MarshalError::mismatch("demo::Point", ValueKind::Map, &Value::from(1));
        assert_eq!(
            err.to_string(),
            "cannot deserialize `demo::Point` from number, expected map"
        );

        let err = MarshalError::InvalidScalar {
            type_path: "u8",
            value: Value::from(300),
        };
        assert_eq!(err.to_string(), "`300` is not a valid `u8`");

        assert_eq!(MarshalError::custom("boom").to_string(), "boom");
    }
}
