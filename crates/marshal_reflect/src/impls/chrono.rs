use core::fmt;

use ::chrono::{DateTime, FixedOffset, NaiveDate, Utc};

use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::impls::opaque::impl_opaque;
use crate::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
use crate::ops::{ReflectMut, ReflectRef};

impl_opaque!(DateTime<Utc>, "chrono::DateTime<chrono::Utc>", "DateTime<Utc>", "chrono");
impl_opaque!(
    DateTime<FixedOffset>,
    "chrono::DateTime<chrono::FixedOffset>",
    "DateTime<FixedOffset>",
    "chrono"
);
impl_opaque!(NaiveDate, "chrono::NaiveDate", "NaiveDate", "chrono");

#[cfg(test)]
mod tests {
    use ::chrono::{DateTime, NaiveDate, Utc};
    use alloc::format;

    use crate::Reflect;
    use crate::info::{ReflectKind, TypePath};

    #[test]
    fn chrono_types_are_opaque() {
        assert_eq!(<DateTime<Utc>>::type_path(), "chrono::DateTime<chrono::Utc>");

        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(date.reflect_kind(), ReflectKind::Opaque);

        let value: &dyn Reflect = &date;
        assert_eq!(format!("{value:?}"), "2024-02-29");
    }
}
