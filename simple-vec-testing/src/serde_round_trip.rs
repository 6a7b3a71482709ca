use serde::{Deserialize, Serialize};
use simple_vec::{SimpleVec, simple_vec};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct Point {
    x: i32,
    y: i32,
}

#[test]
pub fn json_round_trip() {
    let v = simple_vec![(1u8, String::from("one")), (2, String::from("two"))];
    let json = serde_json::to_string(&v).unwrap();
    assert_eq!(json, r#"[[1,"one"],[2,"two"]]"#);
    let back: SimpleVec<(u8, String)> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, v);
}

#[test]
pub fn empty_round_trip() {
    let v = SimpleVec::<u32>::new();
    let json = serde_json::to_string(&v).unwrap();
    assert_eq!(json, "[]");
    let back: SimpleVec<u32> = serde_json::from_str(&json).unwrap();
    assert!(back.is_empty());
}

#[test]
pub fn nested() {
    let v = simple_vec![simple_vec![1, 2], SimpleVec::new(), simple_vec![3]];
    let json = serde_json::to_value(&v).unwrap();
    assert_eq!(json, serde_json::json!([[1, 2], [], [3]]));
    let back: SimpleVec<SimpleVec<i64>> = serde_json::from_value(json).unwrap();
    assert_eq!(back, v);
}

#[test]
pub fn rejects_non_sequence() {
    let result = serde_json::from_str::<SimpleVec<u32>>(r#"{"a": 1}"#);
    assert!(result.is_err());
}

#[test]
pub fn derived_elements() {
    let v = simple_vec![Point { x: 1, y: 2 }, Point { x: -3, y: 4 }];
    let json = serde_json::to_string(&v).unwrap();
    assert_eq!(json, r#"[{"x":1,"y":2},{"x":-3,"y":4}]"#);
    let back: SimpleVec<Point> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, v);
}
