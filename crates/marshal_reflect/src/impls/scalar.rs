use alloc::boxed::Box;
use alloc::string::{String, ToString};

use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{ReflectKind, ScalarInfo, ScalarKind, TypeInfo, TypePath, Typed};
use crate::ops::{ReflectMut, ReflectRef, ScalarRef};

// -----------------------------------------------------------------------------
// Macro

macro_rules! impl_scalar {
    ([$ty:ty, $path:expr, $name:expr, $module:expr,], $kind:ident, |$this:ident| $read:expr, |$input:ident| $build:expr) => {
        impl TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                $path
            }

            #[inline]
            fn type_name() -> &'static str {
                $name
            }

            #[inline]
            fn type_ident() -> &'static str {
                $name
            }

            #[inline]
            fn module_path() -> Option<&'static str> {
                $module
            }
        }

        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                fn from_scalar($input: ScalarRef<'_>) -> Option<Box<dyn Reflect>> {
                    let value: $ty = $build?;
                    Some(Box::new(value))
                }

                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| {
                    TypeInfo::Scalar(ScalarInfo::new::<$ty>(ScalarKind::$kind, from_scalar))
                })
            }
        }

        impl Reflect for $ty {
            fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
                *self = value.take::<Self>()?;
                Ok(())
            }

            #[inline]
            fn reflect_kind(&self) -> ReflectKind {
                ReflectKind::Scalar
            }

            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                let $this = self;
                ReflectRef::Scalar($read)
            }

            #[inline]
            fn reflect_mut(&mut self) -> ReflectMut<'_> {
                ReflectMut::Scalar(self)
            }
        }
    };
    ($ty:ty, $name:expr, $kind:ident, |$this:ident| $read:expr, |$input:ident| $build:expr) => {
        impl_scalar!([$ty, $name, $name, None,], $kind, |$this| $read, |$input| $build);
    };
}

macro_rules! impl_signed {
    ($($ty:ident),*) => {$(
        impl_scalar!(
            $ty, stringify!($ty), Int,
            |this| ScalarRef::Int(*this as i64),
            |input| match input {
                ScalarRef::Int(v) => $ty::try_from(v).ok(),
                ScalarRef::UInt(v) => $ty::try_from(v).ok(),
                _ => None,
            }
        );
    )*};
}

macro_rules! impl_unsigned {
    ($($ty:ident),*) => {$(
        impl_scalar!(
            $ty, stringify!($ty), UInt,
            |this| ScalarRef::UInt(*this as u64),
            |input| match input {
                ScalarRef::Int(v) => $ty::try_from(v).ok(),
                ScalarRef::UInt(v) => $ty::try_from(v).ok(),
                _ => None,
            }
        );
    )*};
}

// -----------------------------------------------------------------------------
// Implementation

impl_signed!(i8, i16, i32, i64, isize);
impl_unsigned!(u8, u16, u32, u64, usize);

impl_scalar!(
    f64, "f64", Float,
    |this| ScalarRef::Float(*this),
    |input| match input {
        ScalarRef::Float(v) => Some(v),
        ScalarRef::Int(v) => Some(v as f64),
        ScalarRef::UInt(v) => Some(v as f64),
        _ => None,
    }
);

impl_scalar!(
    f32, "f32", Float,
    |this| ScalarRef::Float(*this as f64),
    |input| match input {
        ScalarRef::Float(v) => Some(v as f32),
        ScalarRef::Int(v) => Some(v as f32),
        ScalarRef::UInt(v) => Some(v as f32),
        _ => None,
    }
);

impl_scalar!(
    bool, "bool", Bool,
    |this| ScalarRef::Bool(*this),
    |input| match input {
        ScalarRef::Bool(v) => Some(v),
        _ => None,
    }
);

// A `char` travels as one-character text.
impl_scalar!(
    char, "char", Char,
    |this| ScalarRef::Char(*this),
    |input| match input {
        ScalarRef::Char(v) => Some(v),
        ScalarRef::Str(s) => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(c),
                _ => None,
            }
        }
        _ => None,
    }
);

impl_scalar!(
    [String, "alloc::string::String", "String", Some("alloc::string"),], Text,
    |this| ScalarRef::Str(this.as_str()),
    |input| match input {
        ScalarRef::Str(s) => Some(String::from(s)),
        ScalarRef::Char(c) => Some(c.to_string()),
        _ => None,
    }
);

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::Reflect;
    use crate::info::{ScalarKind, TypePath, Typed};
    use crate::ops::ScalarRef;

    #[test]
    fn scalar_paths() {
        assert_eq!(u32::type_path(), "u32");
        assert_eq!(u32::module_path(), None);
        assert_eq!(String::type_path(), "alloc::string::String");
        assert_eq!(String::type_name(), "String");
    }

    #[test]
    fn integers_widen_and_narrow() {
        let x: &dyn Reflect = &-5_i8;
        assert_eq!(x.reflect_ref().as_scalar().unwrap(), ScalarRef::Int(-5));

        let info = i16::type_info().as_scalar().unwrap();
        assert_eq!(info.kind(), ScalarKind::Int);
        assert!(info.from_scalar(ScalarRef::UInt(40_000)).is_none());
        assert!(info.from_scalar(ScalarRef::Float(1.0)).is_none());

        let v = info.from_scalar(ScalarRef::Int(-300)).unwrap();
        assert_eq!(v.downcast_ref::<i16>(), Some(&-300));
    }

    #[test]
    fn char_from_text() {
        let info = char::type_info().as_scalar().unwrap();
        let v = info.from_scalar(ScalarRef::Str("z")).unwrap();
        assert_eq!(v.downcast_ref::<char>(), Some(&'z'));
        assert!(info.from_scalar(ScalarRef::Str("zz")).is_none());
    }

    #[test]
    fn set_checks_type() {
        let mut s = String::from("a");
        assert!(s.set(String::from("b").into_boxed_reflect()).is_ok());
        assert_eq!(s, "b");
        assert!(s.set(1_u8.into_boxed_reflect()).is_err());
    }
}
