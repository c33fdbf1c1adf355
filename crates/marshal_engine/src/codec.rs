use marshal_value::Value;

use crate::BoxError;

/// Turns a [`Value`] tree into an external representation.
///
/// Closures `Fn(Value) -> Result<O, E>` implement this trait, so
/// `|v| serde_json::to_string(&v)` is an encoder.
pub trait Encoder {
    type Output;
    type Error: Into<BoxError>;

    fn encode(&self, value: Value) -> Result<Self::Output, Self::Error>;
}

impl<F, O, E> Encoder for F
where
    F: Fn(Value) -> Result<O, E>,
    E: Into<BoxError>,
{
    type Output = O;
    type Error = E;

    #[inline]
    fn encode(&self, value: Value) -> Result<O, E> {
        self(value)
    }
}

/// Parses an external representation `I` into a [`Value`] tree.
///
/// Closures `Fn(I) -> Result<Value, E>` implement this trait, so
/// `|s: &str| serde_json::from_str::<Value>(s)` is a decoder.
pub trait Decoder<I> {
    type Error: Into<BoxError>;

    fn decode(&self, input: I) -> Result<Value, Self::Error>;
}

impl<F, I, E> Decoder<I> for F
where
    F: Fn(I) -> Result<Value, E>,
    E: Into<BoxError>,
{
    type Error = E;

    #[inline]
    fn decode(&self, input: I) -> Result<Value, E> {
        self(input)
    }
}
