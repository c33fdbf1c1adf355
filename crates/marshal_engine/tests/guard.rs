//! Cycle detection and guard balance.

use std::cell::RefCell;
use std::rc::Rc;

use marshal_engine::{Engine, MarshalError};
use marshal_reflect::derive::Reflect;
use marshal_value::{Map, Value};

#[derive(Reflect, Default)]
#[reflect(default)]
struct Node {
    name: String,
    next: Option<Rc<RefCell<Node>>>,
}

#[derive(Reflect)]
struct Pair {
    left: Rc<u64>,
    right: Rc<u64>,
}

#[test]
fn self_reference_fails() {
    let engine = Engine::new();
    let node = Rc::new(RefCell::new(Node {
        name: "loop".into(),
        next: None,
    }));
    node.borrow_mut().next = Some(node.clone());

    let mut ctx = engine.context();
    let err = ctx.serialize(&node).unwrap_err();
    assert!(err.is_circular());
    assert!(matches!(
        err,
        MarshalError::CircularReference { depth: 5, .. }
    ));
    assert_eq!(ctx.depth(), 0);

    // Break the cycle so the nodes are freed.
    node.borrow_mut().next = None;
    let value = ctx.serialize(&node).unwrap();
    assert_eq!(value.to_string(), r#"{"name":"loop","next":null}"#);
}

#[test]
fn longer_cycle_fails() {
    let engine = Engine::new();
    let a = Rc::new(RefCell::new(Node::default()));
    let b = Rc::new(RefCell::new(Node {
        name: "b".into(),
        next: Some(a.clone()),
    }));
    a.borrow_mut().next = Some(b.clone());

    assert!(engine.serialize(&a).unwrap_err().is_circular());

    a.borrow_mut().next = None;
    let value = engine.serialize(&b).unwrap();
    assert_eq!(
        value.to_string(),
        r#"{"name":"b","next":{"name":"","next":null}}"#
    );
}

#[test]
fn shared_siblings_are_not_cycles() {
    let engine = Engine::new();
    let shared = Rc::new(7_u64);
    let pair = Pair {
        left: shared.clone(),
        right: shared,
    };

    let value = engine.serialize(&pair).unwrap();
    assert_eq!(value.to_string(), r#"{"left":7,"right":7}"#);
}

#[test]
fn equal_primitives_are_distinct() {
    let engine = Engine::new();
    let nested = vec![vec![5_u8, 5], vec![5]];
    let value = engine.serialize(&nested).unwrap();
    assert_eq!(value.to_string(), "[[5,5],[5]]");
}

#[test]
fn balanced_after_failures() {
    let engine = Engine::new();
    let mut ctx = engine.context();

    // Fails deep inside a list of structs.
    let mut bad = Map::default();
    bad.insert("name".into(), Value::from(1));
    let input = Value::from(vec![Value::Map(Map::default()), Value::Map(bad)]);
    let target = <Vec<Node> as marshal_reflect::info::Typed>::type_info();

    let err = ctx.deserialize(&input, target).unwrap_err();
    assert!(matches!(err, MarshalError::TypeMismatch { .. }));
    assert_eq!(ctx.depth(), 0);

    // The same context keeps working.
    let ok = ctx.deserialize(&Value::from(vec![Value::Map(Map::default())]), target);
    assert!(ok.is_ok());
    assert_eq!(ctx.depth(), 0);
}

#[test]
fn decode_failure_leaves_no_trace() {
    let engine = Engine::new();
    let decoder = |s: &str| serde_json::from_str::<Value>(s);
    let target = <Vec<u8> as marshal_reflect::info::Typed>::type_info();

    let mut ctx = engine.context();
    let err = ctx.deserialize_with("[1, 2", &decoder, target).unwrap_err();
    assert!(matches!(err, MarshalError::Decode(_)));
    assert_eq!(ctx.depth(), 0);

    // The same context keeps working for the same target.
    let ok = ctx.deserialize_with("[1, 2]", &decoder, target).unwrap();
    assert_eq!(ok.take::<Vec<u8>>().unwrap(), [1, 2]);
    assert_eq!(ctx.depth(), 0);

    let ok: Vec<u8> = engine.deserialize_with("[3]", &decoder).unwrap();
    assert_eq!(ok, [3]);
}
