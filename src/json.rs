//! JSON text output for merged locales.
//!
//! [`stringify`] follows the `replacer` and `space` arguments of JavaScript's
//! `JSON.stringify`, so merged files come out the way web tooling expects:
//!
//! - no space: compact output, `{"a":"b"}`
//! - `Indent(n)`: `min(n, 10)` spaces per level, `0` is compact
//! - `Text(s)`: the first 10 UTF-16 code units of `s` per level, `""` is
//!   compact; a surrogate pair straddling the limit is dropped whole
//! - `Keys(list)`: only listed properties, at every depth, in list order
//! - `Function(f)`: `f(key, value)` for the root (key `""`) and then for every
//!   property and array index of what it returned; `None` drops a property,
//!   turns an array item into `null`, and fails at the root

use std::{convert::Infallible, fmt, str::FromStr};

use serde::Serialize;
use serde_json::{Map, Serializer, Value, ser::PrettyFormatter};
use thiserror::Error;

/// Largest indentation `JSON.stringify` honours.
const MAX_INDENT: usize = 10;

type ReplacerFn = dyn Fn(&str, Value) -> Option<Value>;

pub enum JsonReplacer {
    /// Property allow-list.
    Keys(Vec<String>),
    /// Value transform called for every key.
    Function(Box<ReplacerFn>),
}

impl JsonReplacer {
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&str, Value) -> Option<Value> + 'static,
    {
        JsonReplacer::Function(Box::new(f))
    }
}

impl fmt::Debug for JsonReplacer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonReplacer::Keys(keys) => f.debug_tuple("Keys").field(keys).finish(),
            JsonReplacer::Function(_) => f.write_str("Function(..)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonSpace {
    Indent(usize),
    Text(String),
}

impl JsonSpace {
    fn indent(&self) -> String {
        match self {
            JsonSpace::Indent(n) => " ".repeat((*n).min(MAX_INDENT)),
            JsonSpace::Text(text) => {
                let mut units = 0;
                text.chars()
                    .take_while(|c| {
                        units += c.len_utf16();
                        units <= MAX_INDENT
                    })
                    .collect()
            }
        }
    }
}

impl FromStr for JsonSpace {
    type Err = Infallible;

    /// Digits select a number of spaces, anything else is used verbatim.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<usize>() {
            Ok(n) => JsonSpace::Indent(n),
            Err(_) => JsonSpace::Text(s.to_string()),
        })
    }
}

/// Serialization options applied to every flushed locale.
#[derive(Debug, Default)]
pub struct JsonFormat {
    pub replacer: Option<JsonReplacer>,
    pub space: Option<JsonSpace>,
}

#[derive(Debug, Error)]
pub enum StringifyError {
    #[error("replacer discarded the root value")]
    RootDiscarded,
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub fn stringify(
    object: &Map<String, Value>,
    format: &JsonFormat,
) -> Result<String, StringifyError> {
    let root = Value::Object(object.clone());
    let value = match &format.replacer {
        None => root,
        Some(JsonReplacer::Keys(keys)) => retain_keys(root, keys),
        Some(JsonReplacer::Function(f)) => {
            replace(f.as_ref(), "", root).ok_or(StringifyError::RootDiscarded)?
        }
    };

    let indent = format
        .space
        .as_ref()
        .map(JsonSpace::indent)
        .unwrap_or_default();
    if indent.is_empty() {
        return Ok(serde_json::to_string(&value)?);
    }

    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn retain_keys(value: Value, keys: &[String]) -> Value {
    match value {
        Value::Object(mut map) => {
            let mut kept = Map::new();
            for key in keys {
                if kept.contains_key(key) {
                    continue;
                }
                if let Some(inner) = map.remove(key) {
                    kept.insert(key.clone(), retain_keys(inner, keys));
                }
            }
            Value::Object(kept)
        }
        Value::Array(items) => {
            Value::Array(items.into_iter().map(|v| retain_keys(v, keys)).collect())
        }
        other => other,
    }
}

fn replace(f: &ReplacerFn, key: &str, value: Value) -> Option<Value> {
    let value = f(key, value)?;
    Some(match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter_map(|(k, v)| replace(f, &k, v).map(|v| (k, v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .enumerate()
                .map(|(i, v)| replace(f, &i.to_string(), v).unwrap_or(Value::Null))
                .collect(),
        ),
        other => other,
    })
}
