use serde_json::Value;

/// Produce canonical JSON text: object keys sorted lexicographically (recursive),
/// arrays preserve order, no extra whitespace.
///
/// Used to serialize structured report sources deterministically — compiling
/// the same source twice must yield identical text.
pub fn canonical_json_string(value: &Value) -> String {
    let sorted = sort_value(value);
    serde_json::to_string(&sorted).expect("canonical JSON serialization should not fail")
}

fn sort_value(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut pairs: Vec<(&String, Value)> =
                map.iter().map(|(k, v)| (k, sort_value(v))).collect();
            pairs.sort_by(|a, b| a.0.cmp(b.0));
            let sorted_map: serde_json::Map<String, Value> =
                pairs.into_iter().map(|(k, v)| (k.clone(), v)).collect();
            Value::Object(sorted_map)
        }
        Value::Array(arr) => Value::Array(arr.iter().map(sort_value).collect()),
        other => other.clone(),
    }
}
