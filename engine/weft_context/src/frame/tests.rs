use super::*;
use pretty_assertions::assert_eq;
use weft_value::Value;

#[test]
fn test_define_get_remove() {
    let mut frame = Frame::new();
    frame.define("x", Value::int(42));
    assert!(frame.contains("x"));
    assert!(matches!(frame.get("x"), Some(Binding::Value(v)) if *v == Value::int(42)));

    assert!(frame.remove("x").is_some());
    assert!(!frame.contains("x"));
    assert!(frame.remove("x").is_none());
}

#[test]
fn test_from_entries() {
    let frame = Frame::from_entries([("a", Value::int(1)), ("b", Value::string("two"))]);
    assert_eq!(frame.len(), 2);
    assert!(frame.contains("a"));
    assert!(frame.contains("b"));
    assert!(!frame.is_empty());
}

#[test]
fn test_deferred_binding_is_pending_until_resolved() {
    let mut frame = Frame::new();
    frame.define_deferred("lazy", Deferred::new(|_, _| Ok(Value::int(1))));
    assert!(frame.get("lazy").is_some_and(Binding::is_deferred));

    // Defining over it replaces the marker with a concrete value.
    frame.define("lazy", Value::int(1));
    assert!(!frame.get("lazy").is_some_and(Binding::is_deferred));
}

#[test]
fn test_shared_frame_handles_alias_one_frame() {
    let a = SharedFrame::default();
    let b = a.clone();
    assert!(SharedFrame::ptr_eq(&a, &b));

    a.define("seen", Value::Bool(true));
    assert!(b.borrow().contains("seen"));
}

#[test]
fn test_distinct_frames_are_not_ptr_eq() {
    let a = SharedFrame::default();
    let b = SharedFrame::default();
    assert!(!SharedFrame::ptr_eq(&a, &b));
}

#[test]
fn test_iter_visits_all_bindings() {
    let frame = Frame::from_entries([("a", Value::int(1)), ("b", Value::int(2))]);
    let mut names: Vec<&str> = frame.iter().map(|(name, _)| name).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["a", "b"]);
}
