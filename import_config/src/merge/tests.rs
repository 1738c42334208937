//! Unit tests for the deep merge engine.

use rstest::rstest;
use serde_json::{Value, json};

use super::{deep_merge, fold_fragments, is_branch, merge_into};

fn nested_main() -> Value {
    json!({
        "level-01-01": {
            "level-02-01": {
                "level-03-01": [
                    "level-03-01-val-01",
                    "level-03-01-val-02",
                    "level-03-01-val-03",
                    "level-03-01-val-04",
                    "level-03-01-val-05",
                    "level-03-01-val-06"
                ],
                "level-03-02": ["level-03-02-val-01"]
            },
            "level-02-02": "test"
        },
        "level-01-02": ["level-01-02-val-01", "level-01-02-val-02"],
        "level-01-03": ["level-01-03-val-01", "level-01-03-val-02"]
    })
}

#[test]
fn merging_without_sources_is_identity() {
    let main = nested_main();
    assert_eq!(deep_merge(&main, std::iter::empty::<&Value>()), main);
}

#[rstest]
#[case::scalar_overwrite(json!({"a": 1}), json!({"a": 2}), json!({"a": 2}))]
#[case::leaf_list_replaced(json!({"a": [1, 2, 3]}), json!({"a": [9]}), json!({"a": [9]}))]
#[case::empty_list_replaces(json!({"a": [1, 2]}), json!({"a": []}), json!({"a": []}))]
#[case::branch_accumulates(
    json!({"a": {"x": 1, "y": 2}}),
    json!({"a": {"y": 3, "z": 4}}),
    json!({"a": {"x": 1, "y": 3, "z": 4}})
)]
#[case::null_overwrites(json!({"a": {"x": 1}}), json!({"a": null}), json!({"a": null}))]
#[case::object_replaces_scalar(json!({"a": "flat"}), json!({"a": {"x": 1}}), json!({"a": {"x": 1}}))]
#[case::list_replaces_object(json!({"a": {"x": 1}}), json!({"a": ["x"]}), json!({"a": ["x"]}))]
#[case::new_keys_added(json!({"a": 1}), json!({"b": {"c": [1]}}), json!({"a": 1, "b": {"c": [1]}}))]
fn merges_pairs(#[case] target: Value, #[case] source: Value, #[case] expected: Value) {
    assert_eq!(deep_merge(&target, [&source]), expected);
}

#[test]
fn branch_sequences_merge_by_position() {
    let target = json!({"subjects": [{"id": "a", "prefix": "x"}, {"id": "b"}]});
    let source = json!({"subjects": [{"prefix": "y"}, {"id": "c"}, {"id": "d"}]});
    let merged = deep_merge(&target, [&source]);
    assert_eq!(
        merged,
        json!({"subjects": [{"id": "a", "prefix": "y"}, {"id": "c"}, {"id": "d"}]})
    );
}

#[test]
fn sibling_branches_stay_untouched() {
    let target = json!({
        "p": "before",
        "q": {"nested": {"deep": [1, 2]}, "list": [{"id": 1}]}
    });
    let merged = deep_merge(&target, [&json!({"p": "after"})]);
    assert_eq!(merged["q"], target["q"]);
    assert_eq!(merged["p"], json!("after"));
}

#[test]
fn nested_lists_are_replaced_while_branches_merge() {
    let replacement = json!({
        "level-01-01": {
            "level-02-01": {
                "level-03-01": [
                    "level-03-01-val-07",
                    "level-03-01-val-08",
                    "level-03-01-val-09"
                ]
            },
            "level-02-02": ["level-02-02-val-01", "level-02-02-val-02"]
        },
        "level-01-03": "level-01-03-val-00"
    });
    let expected = json!({
        "level-01-01": {
            "level-02-01": {
                "level-03-01": [
                    "level-03-01-val-07",
                    "level-03-01-val-08",
                    "level-03-01-val-09"
                ],
                "level-03-02": ["level-03-02-val-01"]
            },
            "level-02-02": ["level-02-02-val-01", "level-02-02-val-02"]
        },
        "level-01-02": ["level-01-02-val-01", "level-01-02-val-02"],
        "level-01-03": "level-01-03-val-00"
    });
    assert_eq!(deep_merge(&nested_main(), [&replacement]), expected);
}

#[test]
fn later_sources_win() {
    let merged = deep_merge(
        &json!({"a": 1, "b": 1}),
        [&json!({"a": 2}), &json!({"a": 3, "c": 3})],
    );
    assert_eq!(merged, json!({"a": 3, "b": 1, "c": 3}));
}

#[test]
fn inputs_are_not_mutated() {
    let target = json!({"a": {"x": 1}, "list": [{"id": 1}]});
    let source = json!({"a": {"y": 2}, "list": [{"id": 2}]});
    let target_copy = target.clone();
    let source_copy = source.clone();
    let _merged = deep_merge(&target, [&source]);
    assert_eq!(target, target_copy);
    assert_eq!(source, source_copy);
}

#[test]
fn folding_seeds_with_first_fragment() {
    let folded = fold_fragments([json!({"a": {"x": 1}}), json!({"a": {"y": 2}}), json!({"b": true})]);
    assert_eq!(folded, Some(json!({"a": {"x": 1, "y": 2}, "b": true})));
    assert_eq!(fold_fragments(Vec::new()), None);
}

#[rstest]
#[case(json!({"a": {"b": 1}}), true)]
#[case(json!([[1]]), true)]
#[case(json!({"a": 1, "b": "two"}), false)]
#[case(json!([1, 2, 3]), false)]
#[case(json!([]), false)]
#[case(json!(null), false)]
fn classifies_branches(#[case] value: Value, #[case] expected: bool) {
    assert_eq!(is_branch(&value), expected);
}

#[test]
fn merge_into_replaces_non_object_target() {
    let mut target = json!("scalar");
    merge_into(&mut target, &json!({"a": 1}));
    assert_eq!(target, json!({"a": 1}));
}
