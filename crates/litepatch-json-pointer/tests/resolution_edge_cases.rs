use litepatch_json_pointer::{format_json_pointer, get, get_mut, parse_json_pointer};
use serde_json::{json, Value};

#[test]
fn resolve_empty_key_component() {
    let doc = json!({"": "value", "foo": {"": 1}});

    assert_eq!(get(&doc, &parse_json_pointer("/")), Some(&json!("value")));
    assert_eq!(get(&doc, &parse_json_pointer("/foo/")), Some(&json!(1)));
}

#[test]
fn resolve_escaped_components() {
    let doc = json!({"a/b": {"m~n": "x"}, "~1": "literal tilde-one"});

    assert_eq!(get(&doc, &parse_json_pointer("/a~1b/m~0n")), Some(&json!("x")));
    // "~01" decodes to the literal key "~1", not to "/"
    assert_eq!(
        get(&doc, &parse_json_pointer("/~01")),
        Some(&json!("literal tilde-one"))
    );
}

#[test]
fn resolve_numeric_object_keys() {
    // Digit strings are ordinary keys when the container is an object
    let doc = json!({"0": "zero", "10": {"2": "deep"}});

    assert_eq!(get(&doc, &parse_json_pointer("/0")), Some(&json!("zero")));
    assert_eq!(get(&doc, &parse_json_pointer("/10/2")), Some(&json!("deep")));
}

#[test]
fn resolve_mixed_array_object_path() {
    let doc = json!({"items": [{"name": "a"}, {"name": "b"}]});

    assert_eq!(
        get(&doc, &parse_json_pointer("/items/1/name")),
        Some(&json!("b"))
    );
    assert_eq!(get(&doc, &parse_json_pointer("/items/2/name")), None);
}

#[test]
fn resolve_rejects_bad_array_segments() {
    let doc = json!([10, 20, 30]);

    assert_eq!(get(&doc, &parse_json_pointer("/-")), None);
    assert_eq!(get(&doc, &parse_json_pointer("/x")), None);
    assert_eq!(get(&doc, &parse_json_pointer("/-1")), None);
    assert_eq!(get(&doc, &parse_json_pointer("/3")), None);
}

#[test]
fn resolve_stops_at_scalars() {
    let doc = json!({"a": "scalar", "b": null});

    assert_eq!(get(&doc, &parse_json_pointer("/a/0")), None);
    assert_eq!(get(&doc, &parse_json_pointer("/b/anything")), None);
}

#[test]
fn mutate_through_pointer() {
    let mut doc = json!({"a": {"b": [1, 2, 3]}});

    *get_mut(&mut doc, &parse_json_pointer("/a/b/1")).expect("slot exists") = json!(20);
    assert_eq!(doc, json!({"a": {"b": [1, 20, 3]}}));

    assert!(get_mut(&mut doc, &parse_json_pointer("/a/missing")).is_none());
}

#[test]
fn format_escapes_raw_components() {
    let raw = vec!["a/b".to_string(), "m~n".to_string(), "".to_string()];
    let pointer = format_json_pointer(&raw);
    assert_eq!(pointer, "/a~1b/m~0n/");

    // Parsing the formatted pointer recovers the raw components
    assert_eq!(parse_json_pointer(&pointer), raw);
}

#[test]
fn root_pointer_resolves_any_value() {
    for doc in [json!(null), json!(0), json!("s"), json!([1]), json!({"k": 1})] {
        assert_eq!(get(&doc, &[]), Some(&doc));
    }

    let mut doc = json!({"k": 1});
    let root = get_mut(&mut doc, &[]).expect("root always resolves");
    *root = Value::Bool(true);
    assert_eq!(doc, json!(true));
}
