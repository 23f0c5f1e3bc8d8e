use serde_json::Value;

/// Extract the item list from an upstream collection response.
///
/// The RIO LOD API answers collection resources with a HAL document holding
/// the items under `_embedded.<key>`. A bare JSON array is accepted as-is.
/// When `key` is missing, the first array found in `_embedded` is used.
pub fn embedded_items(value: Value, key: &str) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        Value::Object(mut object) => match object.remove("_embedded") {
            Some(Value::Object(mut embedded)) => match embedded.remove(key) {
                Some(Value::Array(items)) => items,
                Some(_) => Vec::new(),
                None => embedded
                    .into_iter()
                    .find_map(|(_, v)| match v {
                        Value::Array(items) => Some(items),
                        _ => None,
                    })
                    .unwrap_or_default(),
            },
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}
