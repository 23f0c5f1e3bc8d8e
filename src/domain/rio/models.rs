//! Composed views returned by the gateway endpoints

use serde::Serialize;
use serde_json::{json, Value};

use super::{OpleidingSummary, Peildatum};

/// An erkenning together with its location usages and education licenses
#[derive(Debug, Clone, Serialize)]
pub struct ErkenningDetail {
    pub erkenning: Value,
    pub locaties: Vec<Value>,
    pub onderwijslicenties: Vec<Value>,
}

/// Offered program enriched with name and level of its opleiding
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AangebodenOpleidingItem {
    pub aangeboden_opleiding_id: Option<String>,
    pub organisatorische_eenheidcode: Option<Value>,
    #[serde(rename = "type")]
    pub opleiding_type: Option<Value>,
    pub begindatum: Option<Value>,
    pub einddatum: Option<Value>,
    pub opleiding_naam: Option<String>,
    pub opleiding_niveau: Option<String>,
    pub aangeboden_opleiding: Value,
    pub opleiding: Option<Value>,
}

impl AangebodenOpleidingItem {
    /// Combine an upstream aangeboden opleiding with its opleiding, if fetched
    pub fn new(aangeboden_opleiding: Value, opleiding: Option<Value>) -> Self {
        let field = |name: &str| aangeboden_opleiding.get(name).filter(|v| !v.is_null()).cloned();
        let summary = opleiding
            .as_ref()
            .map(OpleidingSummary::from_opleiding)
            .unwrap_or_default();

        Self {
            aangeboden_opleiding_id: aangeboden_opleiding_id(&aangeboden_opleiding),
            organisatorische_eenheidcode: field("organisatorischeEenheidcode"),
            opleiding_type: field("type"),
            begindatum: field("begindatum"),
            einddatum: field("einddatum"),
            opleiding_naam: summary.naam,
            opleiding_niveau: summary.niveau,
            aangeboden_opleiding,
            opleiding,
        }
    }
}

/// Study programs offered by one organisatorische eenheid
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpleidingenOverzicht {
    pub instelling_code: String,
    pub peildatum: Option<Peildatum>,
    pub aantal_opleidingen: usize,
    pub items: Vec<AangebodenOpleidingItem>,
}

impl OpleidingenOverzicht {
    pub fn new(
        instelling_code: impl Into<String>,
        peildatum: Option<Peildatum>,
        items: Vec<AangebodenOpleidingItem>,
    ) -> Self {
        Self {
            instelling_code: instelling_code.into(),
            peildatum,
            aantal_opleidingen: items.len(),
            items,
        }
    }
}

/// Entry of the legacy aangeboden-opleidingen listing
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyAangebodenOpleiding {
    pub id: Option<String>,
    pub opleiding: Value,
    pub heeft_cohorten: bool,
    pub cohorten: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LegacyAangebodenOpleiding {
    pub fn new(id: Option<String>, opleiding: Value, cohorten: Vec<Value>) -> Self {
        Self {
            id,
            opleiding,
            heeft_cohorten: !cohorten.is_empty(),
            cohorten,
            error: None,
        }
    }

    /// Placeholder entry for an item whose details could not be fetched
    pub fn failed(id: Option<String>, error: impl Into<String>) -> Self {
        Self {
            id,
            opleiding: json!({ "naam": "Fout bij ophalen details", "type": "ONBEKEND" }),
            heeft_cohorten: false,
            cohorten: Vec::new(),
            error: Some(error.into()),
        }
    }
}

/// Identifier of an upstream aangeboden opleiding, as a string
pub fn aangeboden_opleiding_id(aangeboden_opleiding: &Value) -> Option<String> {
    match aangeboden_opleiding.get("id")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_copies_fields_and_summary() {
        let item = AangebodenOpleidingItem::new(
            json!({
                "id": "f3a1",
                "organisatorischeEenheidcode": "115A122",
                "type": "AANGEBODEN_HO_OPLEIDING",
                "begindatum": "2020-09-01"
            }),
            Some(json!({ "naam": "Bedrijfskunde", "niveau": "HBO-BA" })),
        );

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["aangebodenOpleidingId"], "f3a1");
        assert_eq!(json["organisatorischeEenheidcode"], "115A122");
        assert_eq!(json["type"], "AANGEBODEN_HO_OPLEIDING");
        assert_eq!(json["einddatum"], Value::Null);
        assert_eq!(json["opleidingNaam"], "Bedrijfskunde");
        assert_eq!(json["opleidingNiveau"], "HBO-BA");
        assert_eq!(json["aangebodenOpleiding"]["id"], "f3a1");
    }

    #[test]
    fn test_item_without_opleiding() {
        let item = AangebodenOpleidingItem::new(json!({ "id": "f3a1" }), None);
        assert!(item.opleiding.is_none());
        assert!(item.opleiding_naam.is_none());
    }

    #[test]
    fn test_overzicht_counts_items() {
        let overzicht = OpleidingenOverzicht::new(
            "115A122",
            None,
            vec![AangebodenOpleidingItem::new(json!({ "id": "a" }), None)],
        );

        let json = serde_json::to_value(&overzicht).unwrap();
        assert_eq!(json["instellingCode"], "115A122");
        assert_eq!(json["aantalOpleidingen"], 1);
        assert_eq!(json["peildatum"], Value::Null);
    }

    #[test]
    fn test_legacy_entry_shapes() {
        let ok = LegacyAangebodenOpleiding::new(Some("a".into()), json!({}), vec![json!({})]);
        let json = serde_json::to_value(&ok).unwrap();
        assert_eq!(json["heeftCohorten"], true);
        assert!(json.get("error").is_none());

        let failed = LegacyAangebodenOpleiding::failed(Some("b".into()), "boom");
        let json = serde_json::to_value(&failed).unwrap();
        assert_eq!(json["opleiding"]["type"], "ONBEKEND");
        assert_eq!(json["heeftCohorten"], false);
        assert_eq!(json["error"], "boom");
    }

    #[test]
    fn test_numeric_id_is_stringified() {
        assert_eq!(aangeboden_opleiding_id(&json!({ "id": 42 })).as_deref(), Some("42"));
        assert_eq!(aangeboden_opleiding_id(&json!({})), None);
    }
}
