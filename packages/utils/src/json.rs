use serde::Serialize;
use serde_json::Value;

/// Serializes `value` to compact JSON with every object's keys sorted, so that output is stable
/// regardless of the map types used to build it.
pub fn to_sorted_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let bz = serde_json::to_vec(value)?;
    sort_json(&bz)
}

/// Re-encodes a JSON document with object keys sorted lexicographically.
pub fn sort_json(bz: &[u8]) -> serde_json::Result<String> {
    // serde_json's Map is ordered by key unless the `preserve_order` feature is enabled
    let value: Value = serde_json::from_slice(bz)?;
    serde_json::to_string(&sort_value(value))
}

fn sort_value(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<_> = map.into_iter().collect();
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));
            Value::Object(entries.into_iter().map(|(k, v)| (k, sort_value(v))).collect())
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_value).collect()),
        other => other,
    }
}
