//! Directives submitted by `#[reflect(adapter = ...)]`.
#![cfg(feature = "auto_register")]

use std::sync::atomic::{AtomicUsize, Ordering};

use marshal_engine::{
    Adapter, Context, DeserializeAdapter, Engine, MarshalError, Result, SerializeAdapter,
};
use marshal_reflect::Reflect;
use marshal_reflect::derive::Reflect;
use marshal_reflect::info::TypeInfo;
use marshal_value::Value;

static INSTALLS: AtomicUsize = AtomicUsize::new(0);

/// An amount of cents, written as `"12.34"`.
#[derive(Reflect, Default, Debug, PartialEq)]
#[reflect(default, adapter = MoneyAdapter)]
struct Money {
    cents: i64,
}

#[derive(Default)]
struct MoneyAdapter;

impl Adapter for MoneyAdapter {
    fn install(&mut self, _: &Engine) {
        INSTALLS.fetch_add(1, Ordering::SeqCst);
    }

    fn as_serializer(&self) -> Option<&dyn SerializeAdapter> {
        Some(self)
    }

    fn as_deserializer(&self) -> Option<&dyn DeserializeAdapter> {
        Some(self)
    }
}

impl SerializeAdapter for MoneyAdapter {
    fn can_serialize(&self, value: &dyn Reflect) -> bool {
        value.is::<Money>()
    }

    fn serialize(&self, value: &dyn Reflect, _: &mut Context) -> Result<Value> {
        let money = value
            .downcast_ref::<Money>()
            .ok_or_else(|| MarshalError::custom("not money"))?;
        let sign = if money.cents < 0 { "-" } else { "" };
        let cents = money.cents.unsigned_abs();
        Ok(Value::from(format!("{sign}{}.{:02}", cents / 100, cents % 100)))
    }
}

impl DeserializeAdapter for MoneyAdapter {
    fn can_deserialize(&self, value: &Value, target: &'static TypeInfo) -> bool {
        target.type_is::<Money>() && value.as_str().is_some()
    }

    fn deserialize(
        &self,
        value: &Value,
        _: &'static TypeInfo,
        _: &mut Context,
    ) -> Result<Box<dyn Reflect>> {
        let text = value.as_str().unwrap_or_default();
        let invalid = || MarshalError::custom(format!("invalid amount `{text}`"));

        let (units, fraction) = text.split_once('.').ok_or_else(invalid)?;
        let units: i64 = units.parse().map_err(|_| invalid())?;
        let fraction: i64 = fraction.parse().map_err(|_| invalid())?;
        let cents = units.abs() * 100 + fraction;

        Ok(Box::new(Money {
            cents: if text.starts_with('-') { -cents } else { cents },
        }))
    }
}

#[test]
fn collected_directive_installs_once() {
    let engine = Engine::new();
    let before = INSTALLS.load(Ordering::SeqCst);

    let prices = vec![Money { cents: 1234 }, Money { cents: -5 }];
    let value = engine.serialize(&prices).unwrap();
    assert_eq!(value, Value::from(vec!["12.34", "-0.05"]));
    assert_eq!(INSTALLS.load(Ordering::SeqCst), before + 1);

    let back: Vec<Money> = engine.deserialize(&value).unwrap();
    assert_eq!(back, prices);
    assert_eq!(INSTALLS.load(Ordering::SeqCst), before + 1);

    // The installed adapter declines maps, the structural fallback takes them.
    let mut map = marshal_value::Map::default();
    map.insert("cents".into(), Value::from(7));
    let money: Money = engine.deserialize(&Value::Map(map)).unwrap();
    assert_eq!(money, Money { cents: 7 });
    assert_eq!(INSTALLS.load(Ordering::SeqCst), before + 1);
}
