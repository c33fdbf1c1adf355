use core::fmt;

// -----------------------------------------------------------------------------
// Number

/// A canonical number: an exact integer or a float.
///
/// Non-negative integers are stored as `u64`, negative ones as `i64`,
/// so any integer in `i64::MIN..=u64::MAX` round-trips exactly.
///
/// # Examples
///
/// ```
/// use marshal_value::Number;
///
/// let n = Number::from(-3_i32);
/// assert_eq!(n.as_i64(), Some(-3));
/// assert_eq!(n.as_u64(), None);
///
/// let f = Number::from(1.5_f64);
/// assert!(f.is_f64());
/// assert_eq!(f.as_i64(), None);
/// ```
#[derive(Clone, Copy)]
pub struct Number(N);

#[derive(Clone, Copy)]
enum N {
    PosInt(u64),
    NegInt(i64),
    Float(f64),
}

impl Number {
    /// Creates a float number.
    #[inline]
    pub const fn from_f64(f: f64) -> Self {
        Self(N::Float(f))
    }

    #[inline]
    pub const fn is_i64(&self) -> bool {
        match self.0 {
            N::PosInt(v) => v <= i64::MAX as u64,
            N::NegInt(_) => true,
            N::Float(_) => false,
        }
    }

    #[inline]
    pub const fn is_u64(&self) -> bool {
        matches!(self.0, N::PosInt(_))
    }

    #[inline]
    pub const fn is_f64(&self) -> bool {
        matches!(self.0, N::Float(_))
    }

    pub const fn as_i64(&self) -> Option<i64> {
        match self.0 {
            N::PosInt(v) if v <= i64::MAX as u64 => Some(v as i64),
            N::NegInt(v) => Some(v),
            _ => None,
        }
    }

    pub const fn as_u64(&self) -> Option<u64> {
        match self.0 {
            N::PosInt(v) => Some(v),
            _ => None,
        }
    }

    /// Integers are converted, which may lose precision above 2^53.
    pub const fn as_f64(&self) -> f64 {
        match self.0 {
            N::PosInt(v) => v as f64,
            N::NegInt(v) => v as f64,
            N::Float(v) => v,
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self.0, other.0) {
            (N::PosInt(a), N::PosInt(b)) => a == b,
            (N::NegInt(a), N::NegInt(b)) => a == b,
            (N::Float(a), N::Float(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            N::PosInt(v) => write!(f, "Number({v})"),
            N::NegInt(v) => write!(f, "Number({v})"),
            N::Float(v) => write!(f, "Number({v:?})"),
        }
    }
}

/// Integers print as is, integral floats keep a `.0` suffix and
/// non-finite floats print as `null`.
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            N::PosInt(v) => fmt::Display::fmt(&v, f),
            N::NegInt(v) => fmt::Display::fmt(&v, f),
            N::Float(v) if !v.is_finite() => f.write_str("null"),
            N::Float(v) => fmt::Debug::fmt(&v, f),
        }
    }
}

// -----------------------------------------------------------------------------
// Conversions

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {$(
        impl From<$ty> for Number {
            #[inline]
            fn from(v: $ty) -> Self {
                Self(N::PosInt(v as u64))
            }
        }
    )*};
}

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {$(
        impl From<$ty> for Number {
            #[inline]
            fn from(v: $ty) -> Self {
                if v < 0 {
                    Self(N::NegInt(v as i64))
                } else {
                    Self(N::PosInt(v as u64))
                }
            }
        }
    )*};
}

impl_from_unsigned!(u8, u16, u32, u64, usize);
impl_from_signed!(i8, i16, i32, i64, isize);

impl From<f32> for Number {
    #[inline]
    fn from(v: f32) -> Self {
        Self(N::Float(v as f64))
    }
}

impl From<f64> for Number {
    #[inline]
    fn from(v: f64) -> Self {
        Self(N::Float(v))
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::Number;
    use alloc::string::ToString;

    #[test]
    fn integer_ranges() {
        assert_eq!(Number::from(u64::MAX).as_u64(), Some(u64::MAX));
        assert_eq!(Number::from(u64::MAX).as_i64(), None);
        assert_eq!(Number::from(i64::MIN).as_i64(), Some(i64::MIN));
        assert_eq!(Number::from(7_u8), Number::from(7_i64));
    }

    #[test]
    fn float_display() {
        assert_eq!(Number::from(2.0_f64).to_string(), "2.0");
        assert_eq!(Number::from(0.25_f64).to_string(), "0.25");
        assert_eq!(Number::from(f64::NAN).to_string(), "null");
    }

    #[test]
    fn float_is_not_integer() {
        assert_ne!(Number::from(1.0_f64), Number::from(1_i32));
    }
}
