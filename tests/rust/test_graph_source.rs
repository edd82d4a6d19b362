use super::*;
use serde_json::json;

#[test]
fn test_attributed_for_attributes_borrows() {
    let mut attrs = Attributes::new();
    attrs.insert("color".into(), json!("red"));
    let view = attrs.attributes();
    assert!(matches!(view, Cow::Borrowed(_)));
    assert_eq!(view.get("color"), Some(&json!("red")));
}

#[test]
fn test_attributed_for_unit_is_empty() {
    assert!(().attributes().is_empty());
}

#[test]
fn test_attributed_for_value() {
    let obj = json!({"a": 1, "b": 2});
    let keys: Vec<String> = obj.attributes().keys().cloned().collect();
    assert_eq!(keys, vec!["a", "b"]);
    assert!(json!(42).attributes().is_empty());
    assert!(json!(null).attributes().is_empty());
}

#[test]
fn test_attributes_preserve_insertion_order() {
    let mut attrs = Attributes::new();
    attrs.insert("zeta".into(), json!(1));
    attrs.insert("alpha".into(), json!(2));
    attrs.insert("mid".into(), json!(3));
    let keys: Vec<&str> = attrs.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
}
