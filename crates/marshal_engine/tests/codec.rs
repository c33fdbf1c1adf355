//! Encoder and decoder hooks, with `serde_json` as the format.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use marshal_engine::{Engine, MarshalError};
use marshal_reflect::derive::Reflect;
use marshal_value::Value;

#[derive(Reflect, Default, Debug, PartialEq)]
#[reflect(default)]
struct Event {
    title: String,
    at: Option<DateTime<Utc>>,
    day: Option<NaiveDate>,
    attendees: Vec<String>,
    seats: HashMap<String, u32>,
}

fn to_json(value: Value) -> serde_json::Result<String> {
    serde_json::to_string(&value)
}

fn from_json(text: &str) -> serde_json::Result<Value> {
    serde_json::from_str(text)
}

#[test]
fn json_round_trip() {
    let engine = Engine::new();
    let event = Event {
        title: "launch".into(),
        at: Some(Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap()),
        day: NaiveDate::from_ymd_opt(2025, 1, 2),
        attendees: vec!["ann".into(), "bo".into()],
        seats: HashMap::from([("ann".into(), 1)]),
    };

    let json = engine.serialize_with(&event, &to_json).unwrap();
    assert_eq!(
        json,
        concat!(
            r#"{"title":"launch","at":"2025-01-02T03:04:05Z","day":"2025-01-02","#,
            r#""attendees":["ann","bo"],"seats":{"ann":1}}"#,
        )
    );

    let back: Event = engine.deserialize_with(json.as_str(), &from_json).unwrap();
    assert_eq!(back, event);
}

#[test]
fn partial_input() {
    let engine = Engine::new();
    let event: Event = engine
        .deserialize_with(r#"{"title":"draft","at":null,"extra":[1,2]}"#, &from_json)
        .unwrap();
    assert_eq!(
        event,
        Event {
            title: "draft".into(),
            ..Default::default()
        }
    );
}

#[test]
fn hook_failures() {
    let engine = Engine::new();

    let err = engine
        .deserialize_with::<Event, _, _>("{", &from_json)
        .unwrap_err();
    assert!(matches!(err, MarshalError::Decode(_)));

    let err = engine
        .deserialize_with::<Event, _, _>(r#"{"at":"yesterday"}"#, &from_json)
        .unwrap_err();
    assert!(matches!(err, MarshalError::InvalidTimestamp { .. }));

    let refuse = |_: Value| Err::<String, _>(std::io::Error::other("disk full"));
    let err = engine.serialize_with(&Event::default(), &refuse).unwrap_err();
    match err {
        MarshalError::Encode(source) => assert_eq!(source.to_string(), "disk full"),
        other => panic!("expected an encode error, got {other:?}"),
    }
}
