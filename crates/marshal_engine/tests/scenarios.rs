//! End-to-end conversions of derived types.

use std::collections::BTreeMap;

use marshal_engine::{Engine, MarshalError};
use marshal_reflect::derive::Reflect;
use marshal_value::{Map, Value};

#[derive(Reflect, Default, Debug, PartialEq)]
#[reflect(default)]
struct Point {
    x: i32,
    y: i32,
}

#[derive(Reflect, Default, Debug, PartialEq)]
#[reflect(default)]
struct Shape {
    name: String,
    points: Vec<Point>,
    origin: Option<Box<Point>>,
    labels: BTreeMap<u16, String>,
}

#[derive(Reflect, Debug)]
struct Handle {
    fd: u32,
}

#[test]
fn primitives() {
    let engine = Engine::new();

    assert_eq!(engine.serialize(&5_i32).unwrap(), Value::from(5));
    assert_eq!(engine.deserialize::<i32>(&Value::from(5)).unwrap(), 5);

    assert_eq!(engine.serialize(&String::from("abc")).unwrap(), Value::from("abc"));
}

#[test]
fn lists() {
    let engine = Engine::new();

    let value = engine.serialize(&vec![1_i32, 2, 3]).unwrap();
    assert_eq!(value, Value::from(vec![1, 2, 3]));
    assert_eq!(engine.deserialize::<Vec<i32>>(&value).unwrap(), [1, 2, 3]);
}

#[test]
fn plain_struct() {
    let engine = Engine::new();

    let value = engine.serialize(&Point { x: 1, y: 2 }).unwrap();
    assert_eq!(value.to_string(), r#"{"x":1,"y":2}"#);
    assert_eq!(engine.deserialize::<Point>(&value).unwrap(), Point { x: 1, y: 2 });
}

#[test]
fn nested_struct_round_trip() {
    let engine = Engine::new();
    let shape = Shape {
        name: "tri".into(),
        points: vec![Point { x: 0, y: 0 }, Point { x: 3, y: 0 }, Point { x: 0, y: 4 }],
        origin: Some(Box::new(Point { x: -1, y: -1 })),
        labels: BTreeMap::from([(1, "a".into()), (2, "b".into())]),
    };

    let value = engine.serialize(&shape).unwrap();
    assert_eq!(
        value.to_string(),
        concat!(
            r#"{"name":"tri","#,
            r#""points":[{"x":0,"y":0},{"x":3,"y":0},{"x":0,"y":4}],"#,
            r#""origin":{"x":-1,"y":-1},"#,
            r#""labels":{"1":"a","2":"b"}}"#,
        )
    );

    let back: Shape = engine.deserialize(&value).unwrap();
    assert_eq!(back, shape);
}

#[test]
fn null_fields() {
    let engine = Engine::new();

    let mut map = Map::default();
    map.insert("name".into(), Value::from("empty"));
    map.insert("origin".into(), Value::Null);
    let shape: Shape = engine.deserialize(&Value::Map(map)).unwrap();
    assert_eq!(shape.origin, None);

    let mut map = Map::default();
    map.insert("name".into(), Value::Null);
    let err = engine.deserialize::<Shape>(&Value::Map(map)).unwrap_err();
    assert!(matches!(
        err,
        MarshalError::UnexpectedNull { type_path: "alloc::string::String" }
    ));
}

#[test]
fn missing_constructor() {
    let engine = Engine::new();

    let mut map = Map::default();
    map.insert("fd".into(), Value::from(3));
    let err = engine.deserialize::<Handle>(&Value::Map(map)).unwrap_err();
    assert!(matches!(err, MarshalError::Construction { .. }));

    // Serializing needs no constructor.
    let value = engine.serialize(&Handle { fd: 3 }).unwrap();
    assert_eq!(value.to_string(), r#"{"fd":3}"#);
}

#[test]
fn unsupported_types() {
    let engine = Engine::new();

    let err = engine.serialize(&std::any::TypeId::of::<u8>()).unwrap_err();
    assert!(matches!(
        err,
        MarshalError::UnsupportedType { type_path: "core::any::TypeId" }
    ));

    let err = engine
        .deserialize::<std::any::TypeId>(&Value::from("u8"))
        .unwrap_err();
    assert!(matches!(err, MarshalError::UnsupportedType { .. }));
}

#[test]
fn shared_between_threads() {
    let engine = Engine::new();

    std::thread::scope(|scope| {
        for offset in 0..4 {
            let engine = &engine;
            scope.spawn(move || {
                let point = Point { x: offset, y: -offset };
                let value = engine.serialize(&point).unwrap();
                assert_eq!(engine.deserialize::<Point>(&value).unwrap(), point);
            });
        }
    });
}
