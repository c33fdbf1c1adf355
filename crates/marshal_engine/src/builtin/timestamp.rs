use alloc::boxed::Box;
use alloc::string::ToString;

use chrono::{DateTime, FixedOffset, NaiveDate, SecondsFormat, Utc};
use marshal_reflect::Reflect;
use marshal_reflect::info::TypeInfo;
use marshal_value::{Value, ValueKind};

use crate::{Context, DeserializeAdapter, MarshalError, Result, SerializeAdapter};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// chrono timestamps as text.
///
/// `DateTime<Utc>` and `DateTime<FixedOffset>` use RFC 3339 (UTC with a
/// `Z` suffix), `NaiveDate` uses `YYYY-MM-DD`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimestampAdapter;

crate::impl_adapter!(TimestampAdapter: serialize, deserialize);

impl SerializeAdapter for TimestampAdapter {
    fn can_serialize(&self, value: &dyn Reflect) -> bool {
        value.is::<DateTime<Utc>>() || value.is::<DateTime<FixedOffset>>() || value.is::<NaiveDate>()
    }

    fn serialize(&self, value: &dyn Reflect, _: &mut Context) -> Result<Value> {
        let text = if let Some(time) = value.downcast_ref::<DateTime<Utc>>() {
            time.to_rfc3339_opts(SecondsFormat::AutoSi, true)
        } else if let Some(time) = value.downcast_ref::<DateTime<FixedOffset>>() {
            time.to_rfc3339_opts(SecondsFormat::AutoSi, true)
        } else if let Some(date) = value.downcast_ref::<NaiveDate>() {
            date.format(DATE_FORMAT).to_string()
        } else {
            return Err(MarshalError::UnsupportedType {
                type_path: value.reflect_type_path(),
            });
        };
        Ok(Value::Text(text))
    }
}

impl DeserializeAdapter for TimestampAdapter {
    fn can_deserialize(&self, _: &Value, target: &'static TypeInfo) -> bool {
        target.type_is::<DateTime<Utc>>()
            || target.type_is::<DateTime<FixedOffset>>()
            || target.type_is::<NaiveDate>()
    }

    fn deserialize(
        &self,
        value: &Value,
        target: &'static TypeInfo,
        _: &mut Context,
    ) -> Result<Box<dyn Reflect>> {
        let Value::Text(text) = value else {
            return Err(MarshalError::mismatch(target.type_path(), ValueKind::Text, value));
        };
        let invalid = |source| MarshalError::InvalidTimestamp {
            text: text.clone(),
            source,
        };

        if target.type_is::<DateTime<Utc>>() {
            let time = DateTime::parse_from_rfc3339(text).map_err(invalid)?;
            Ok(Box::new(time.with_timezone(&Utc)))
        } else if target.type_is::<DateTime<FixedOffset>>() {
            let time = DateTime::parse_from_rfc3339(text).map_err(invalid)?;
            Ok(Box::new(time))
        } else if target.type_is::<NaiveDate>() {
            let date = NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(invalid)?;
            Ok(Box::new(date))
        } else {
            Err(MarshalError::UnsupportedType {
                type_path: target.type_path(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};
    use marshal_value::Value;

    use crate::{Engine, MarshalError};

    #[test]
    fn utc_and_offset() {
        let engine = Engine::new();

        let time = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        let value = engine.serialize(&time).unwrap();
        assert_eq!(value, Value::from("2024-05-01T12:30:00Z"));
        assert_eq!(engine.deserialize::<DateTime<Utc>>(&value).unwrap(), time);

        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let local = offset.with_ymd_and_hms(2024, 5, 1, 14, 30, 0).unwrap();
        let value = engine.serialize(&local).unwrap();
        assert_eq!(value, Value::from("2024-05-01T14:30:00+02:00"));

        // Same instant, read back as UTC.
        assert_eq!(engine.deserialize::<DateTime<Utc>>(&value).unwrap(), time);
    }

    #[test]
    fn dates() {
        let engine = Engine::new();
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();

        let value = engine.serialize(&date).unwrap();
        assert_eq!(value, Value::from("2024-02-29"));
        assert_eq!(engine.deserialize::<NaiveDate>(&value).unwrap(), date);

        let err = engine
            .deserialize::<NaiveDate>(&Value::from("2023-02-29"))
            .unwrap_err();
        assert!(matches!(err, MarshalError::InvalidTimestamp { .. }));

        let err = engine.deserialize::<NaiveDate>(&Value::from(20240229)).unwrap_err();
        assert!(matches!(err, MarshalError::TypeMismatch { .. }));
    }
}
