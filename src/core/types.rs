use serde_json::Value;

/// One raw record as it appears in a source file: arbitrary keys, scalar or
/// list values. The decoder and the index both work from this shape.
pub type RawRecord = serde_json::Map<String, Value>;

/// String representations a raw value contributes to the index: one term for
/// a scalar, one term per element for a list, none for an absent/null value.
pub fn index_terms(value: &Value) -> Vec<String> {
    match value {
        Value::Null => Vec::new(),
        Value::Array(elements) => elements.iter().map(scalar_string).collect(),
        other => vec![scalar_string(other)],
    }
}

fn scalar_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        other => other.to_string(),
    }
}
