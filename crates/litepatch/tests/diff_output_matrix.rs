use litepatch::{diff, patch, to_json_patch};
use serde_json::json;

#[test]
fn diff_emission_matrix() {
    // (origin, destination, expected batch in wire form)
    let cases = [
        (
            json!(0),
            json!(1),
            json!([{"op": "replace", "path": "", "value": 1}]),
        ),
        (
            json!(null),
            json!("undefined"),
            json!([{"op": "replace", "path": "", "value": "undefined"}]),
        ),
        (
            json!(["a"]),
            json!(["a", "b"]),
            json!([{"op": "add", "path": "/1", "value": "b"}]),
        ),
        (
            json!(["a", "b"]),
            json!(["a"]),
            json!([{"op": "remove", "path": "/1"}]),
        ),
        (
            json!(["a", "c"]),
            json!(["b", "c", "a", 5]),
            json!([
                {"op": "add", "path": "/3", "value": 5},
                {"op": "add", "path": "/2", "value": "a"},
                {"op": "replace", "path": "/0", "value": "b"},
            ]),
        ),
        (
            json!([1, 2, 3]),
            json!([]),
            json!([
                {"op": "remove", "path": "/2"},
                {"op": "remove", "path": "/1"},
                {"op": "remove", "path": "/0"},
            ]),
        ),
        (
            json!([]),
            json!([true]),
            json!([{"op": "add", "path": "/0", "value": true}]),
        ),
        // Growth of three or more leads with the top index, then ascends
        (
            json!([]),
            json!([1, 2, 3]),
            json!([
                {"op": "add", "path": "/2", "value": 3},
                {"op": "add", "path": "/0", "value": 1},
                {"op": "add", "path": "/1", "value": 2},
            ]),
        ),
        (
            json!({}),
            json!({"a": 5}),
            json!([{"op": "add", "path": "/a", "value": 5}]),
        ),
        (
            json!({"a": 5}),
            json!({"a": 5, "b": "2"}),
            json!([{"op": "add", "path": "/b", "value": "2"}]),
        ),
        (
            json!({"a": 1, "b": 2}),
            json!({"b": 2}),
            json!([{"op": "remove", "path": "/a"}]),
        ),
        (
            json!({"a": {"b": 3, "c": 4}}),
            json!({"a": {"b": 5, "c": 4}}),
            json!([{"op": "replace", "path": "/a/b", "value": 5}]),
        ),
        (
            json!({"a": [5, 3]}),
            json!({"a": [5, 3, 7]}),
            json!([{"op": "add", "path": "/a/2", "value": 7}]),
        ),
        (
            json!({"a": {"x": [1, {"y": 2}]}}),
            json!({"a": {"x": [1, {"y": 3}]}}),
            json!([{"op": "replace", "path": "/a/x/1/y", "value": 3}]),
        ),
        // Kind change below the root swaps the whole subtree
        (
            json!({"a": [1]}),
            json!({"a": {"0": 1}}),
            json!([{"op": "replace", "path": "/a", "value": {"0": 1}}]),
        ),
        // Keys containing pointer syntax are escaped in emitted paths
        (
            json!({"/a": 1}),
            json!({"~a": 1}),
            json!([
                {"op": "remove", "path": "/~1a"},
                {"op": "add", "path": "/~0a", "value": 1},
            ]),
        ),
    ];

    for (origin, destination, expected) in cases {
        let ops = diff(&origin, &destination);
        assert_eq!(
            to_json_patch(&ops),
            expected,
            "unexpected batch for {origin} -> {destination}"
        );
    }
}

#[test]
fn diff_of_equal_values_is_empty() {
    let cases = [
        json!(5),
        json!("text"),
        json!(null),
        json!(true),
        json!([]),
        json!({}),
        json!([1, [2, [3]]]),
        json!({"a": {"b": [1, 2, {"c": null}]}}),
    ];

    for value in cases {
        let other = value.clone();
        assert_eq!(diff(&value, &other), vec![], "non-empty diff for {value}");
        assert_eq!(diff(&value, &value), vec![]);
    }
}

#[test]
fn diff_roundtrips_through_patch() {
    let pairs = [
        (json!(0), json!(1)),
        (json!({"a": 1}), json!([1])),
        (json!(["a", "c"]), json!(["b", "c", "a", 5])),
        (json!([1, 2, 3, 4]), json!([4, 3])),
        (json!(["x"]), json!(["x", "a", "b", "c"])),
        (json!([1]), json!([2, 3, 4, 5, 6])),
        (json!([]), json!([1, [2], {"k": 3}, null])),
        (
            json!({"a": {"b": 1}, "c": [1, 2]}),
            json!({"a": {"b": 2, "d": 3}, "c": [2]}),
        ),
        (
            json!({"/a": {"~b": "c"}}),
            json!({"~a": {"/b": "c"}}),
        ),
        (
            json!({"users": [{"id": 1, "tags": []}, {"id": 2}]}),
            json!({"users": [{"id": 1, "tags": ["x"]}], "total": 1}),
        ),
        (json!([[], [[]], [[[]]]]), json!([[[[]]], [[]], []])),
    ];

    for (origin, destination) in pairs {
        let ops = diff(&origin, &destination);
        let mut doc = origin.clone();
        patch(&mut doc, &ops).expect("diff output must apply cleanly");
        assert_eq!(doc, destination, "roundtrip failed for {origin} -> {destination}");
    }
}
