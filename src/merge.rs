//! Strategies combining an accumulated locale object with a newly parsed one.

use serde_json::{Map, Value};

/// A JSON object as parsed from a fragment file.
pub type JsonObject = Map<String, Value>;

/// Strategy merging `incoming` into the accumulated `target` object.
pub trait MergeStrategy {
    fn merge(&self, target: &mut JsonObject, incoming: JsonObject);
}

impl<F> MergeStrategy for F
where
    F: Fn(&mut JsonObject, JsonObject),
{
    fn merge(&self, target: &mut JsonObject, incoming: JsonObject) {
        self(target, incoming)
    }
}

/// Top-level key assignment. Later values overwrite earlier ones for the same
/// key, keys only present in `target` are kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShallowMerge;

impl MergeStrategy for ShallowMerge {
    fn merge(&self, target: &mut JsonObject, incoming: JsonObject) {
        for (key, value) in incoming {
            target.insert(key, value);
        }
    }
}

/// Recursive merge of nested objects.
///
/// When both sides hold an object under the same key the two are merged;
/// any other collision is resolved by taking the incoming value.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeepMerge;

impl MergeStrategy for DeepMerge {
    fn merge(&self, target: &mut JsonObject, incoming: JsonObject) {
        deep_merge(target, incoming);
    }
}

fn deep_merge(target: &mut JsonObject, incoming: JsonObject) {
    for (key, value) in incoming {
        let Value::Object(nested) = value else {
            target.insert(key, value);
            continue;
        };

        if let Some(Value::Object(existing)) = target.get_mut(&key) {
            deep_merge(existing, nested);
            continue;
        }
        target.insert(key, Value::Object(nested));
    }
}
