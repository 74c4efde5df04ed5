//! Sample parsing and deep merging
//!
//! A sample is one observed log entry or event, held as a
//! `serde_json::Value` object. Merging reduces a batch of heterogeneous
//! samples into a single representative document whose key set is the
//! union of all inputs.
//!
//! Merge policy (fixed, see DESIGN.md):
//! - object keys union recursively
//! - arrays collapse to a single representative element, the merge of all
//!   elements seen on either side
//! - on scalar conflicts the first observed value wins; null always loses
//! - when an object meets a scalar under the same key, the object wins

use serde_json::{Map, Value};

use crate::error::Result;

/// Parse raw sample text into JSON documents.
///
/// Accepts either a JSON array of objects or NDJSON (one JSON document per
/// line, blank lines ignored).
pub fn parse_samples(raw: &str) -> Result<Vec<Value>> {
    let trimmed = raw.trim_start();
    if trimmed.starts_with('[') {
        let values: Vec<Value> = serde_json::from_str(raw)?;
        return Ok(values);
    }

    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| serde_json::from_str(line).map_err(Into::into))
        .collect()
}

/// Deep-merge a batch of samples into one representative document.
///
/// The reduction is a left fold over input order; the final key set does
/// not depend on order, only which value wins a scalar conflict does.
pub fn merge_samples(samples: &[Value]) -> Value {
    let mut merged = Value::Object(Map::new());
    for sample in samples {
        merge_value(&mut merged, sample);
    }
    merged
}

fn merge_value(acc: &mut Value, incoming: &Value) {
    match (&mut *acc, incoming) {
        (Value::Object(left), Value::Object(right)) => {
            for (key, value) in right {
                match left.get_mut(key) {
                    Some(existing) => merge_value(existing, value),
                    None => {
                        left.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (Value::Array(left), Value::Array(right)) => {
            let mut items: Vec<Value> = left.drain(..).collect();
            if items.is_empty() && right.is_empty() {
                return;
            }
            let mut representative = if items.is_empty() {
                Value::Null
            } else {
                items.remove(0)
            };
            for item in items.iter().chain(right.iter()) {
                merge_value(&mut representative, item);
            }
            *left = vec![representative];
        }
        // Structure wins over scalars so nested fields are never lost.
        (Value::Object(_), _) => {}
        (left, Value::Object(_)) => *left = incoming.clone(),
        (Value::Array(_), _) => {}
        (left, Value::Array(_)) => *left = incoming.clone(),
        // Null yields to anything; otherwise first observed value wins.
        (left @ Value::Null, _) => *left = incoming.clone(),
        (_, _) => {}
    }
}
