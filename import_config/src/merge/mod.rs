//! Deep merge of configuration fragments.
//!
//! Fragments are folded left to right: later sources override earlier ones,
//! except that nested objects accumulate. Sequences follow the branch/leaf
//! rule:
//!
//! - a *leaf list* (a sequence holding only scalars, including the empty
//!   sequence) replaces the existing value wholesale;
//! - a *branch* sequence (one holding at least one object or sequence) is
//!   merged element by element into the existing sequence at the same key.
//!
//! Objects always merge key by key, and scalars always overwrite.
//!
//! # Examples
//!
//! ```rust
//! use import_config::merge::deep_merge;
//! use serde_json::json;
//!
//! let base = json!({"a": {"x": 1, "y": 2}, "tags": [1, 2, 3]});
//! let merged = deep_merge(&base, [&json!({"a": {"y": 3, "z": 4}, "tags": [9]})]);
//! assert_eq!(merged, json!({"a": {"x": 1, "y": 3, "z": 4}, "tags": [9]}));
//! ```

use serde_json::{Map, Value};

/// Returns `true` when `value` is an object or a sequence.
#[must_use]
pub const fn is_composite(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

/// Returns `true` when `value` is a composite holding at least one nested
/// composite value.
///
/// # Examples
///
/// ```rust
/// use import_config::merge::is_branch;
/// use serde_json::json;
///
/// assert!(is_branch(&json!([{"id": "a"}])));
/// assert!(!is_branch(&json!(["a", "b"])));
/// assert!(!is_branch(&json!("scalar")));
/// ```
#[must_use]
pub fn is_branch(value: &Value) -> bool {
    match value {
        Value::Object(map) => map.values().any(is_composite),
        Value::Array(items) => items.iter().any(is_composite),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => false,
    }
}

/// Merge every source into a copy of `target`, returning the merged tree.
///
/// Neither `target` nor the sources are modified. Passing no sources returns
/// a tree equal to `target`.
#[must_use]
pub fn deep_merge<'a, I>(target: &Value, sources: I) -> Value
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut merged = target.clone();
    for source in sources {
        merge_into(&mut merged, source);
    }
    merged
}

/// Fold a sequence of fragments into one tree.
///
/// The first fragment seeds the accumulator and each following fragment is
/// merged into it. Returns `None` when `fragments` is empty.
#[must_use]
pub fn fold_fragments<I>(fragments: I) -> Option<Value>
where
    I: IntoIterator<Item = Value>,
{
    let mut iter = fragments.into_iter();
    let mut acc = iter.next()?;
    for fragment in iter {
        merge_into(&mut acc, &fragment);
    }
    Some(acc)
}

/// Overlay `source` onto `target` in place.
pub fn merge_into(target: &mut Value, source: &Value) {
    match source {
        Value::Object(incoming) => merge_object(target, incoming),
        Value::Array(incoming) if is_branch(source) => merge_sequence(target, incoming),
        Value::Array(_) | Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            *target = source.clone();
        }
    }
}

fn merge_object(target: &mut Value, incoming: &Map<String, Value>) {
    if !target.is_object() {
        *target = Value::Object(Map::new());
    }
    let Some(existing) = target.as_object_mut() else {
        return;
    };
    for (key, value) in incoming {
        let slot = existing.entry(key.clone()).or_insert(Value::Null);
        merge_into(slot, value);
    }
}

fn merge_sequence(target: &mut Value, incoming: &[Value]) {
    if !target.is_array() {
        *target = Value::Array(Vec::with_capacity(incoming.len()));
    }
    let Some(existing) = target.as_array_mut() else {
        return;
    };
    for (index, value) in incoming.iter().enumerate() {
        if let Some(slot) = existing.get_mut(index) {
            merge_into(slot, value);
        } else {
            let mut slot = Value::Null;
            merge_into(&mut slot, value);
            existing.push(slot);
        }
    }
}

#[cfg(test)]
mod tests;
