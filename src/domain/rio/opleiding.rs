use serde::Serialize;
use serde_json::Value;

const NAAM_FIELDS: [&str; 3] = ["naam", "crohoNaam", "volledigeNaam"];
const NIVEAU_FIELDS: [&str; 2] = ["niveau", "EQFniveau"];

/// Name and level of a study program, picked from whichever fields the
/// upstream opleiding type happens to carry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OpleidingSummary {
    pub naam: Option<String>,
    pub niveau: Option<String>,
}

impl OpleidingSummary {
    pub fn from_opleiding(opleiding: &Value) -> Self {
        let naam = NAAM_FIELDS
            .iter()
            .filter_map(|field| opleiding.get(*field))
            .find_map(|v| v.as_str().filter(|s| !s.is_empty()))
            .map(str::to_string);

        let niveau = NIVEAU_FIELDS
            .iter()
            .filter_map(|field| opleiding.get(*field))
            .find(|v| is_present(v))
            .map(niveau_text);

        Self { naam, niveau }
    }
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
        Value::Number(_) => true,
    }
}

fn niveau_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Object(object) => ["code", "waarde"]
            .iter()
            .filter_map(|field| object.get(*field))
            .find(|v| is_present(v))
            .map(scalar_text)
            .unwrap_or_else(|| value.to_string()),
        other => other.to_string(),
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
