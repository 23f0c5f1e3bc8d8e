//! Registry service composing RIO client calls into the gateway views

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::{
    aangeboden_opleiding_id, AangebodenOpleidingItem, DomainError, ErkenningDetail,
    LegacyAangebodenOpleiding, OpleidingenOverzicht, Pagination, Peildatum, RioClient,
};

/// Pages of offered programs fetched for the opleidingen overview
pub const OVERVIEW_MAX_PAGES: u32 = 2;

/// Service for registry lookups
#[derive(Debug, Clone)]
pub struct RegistryService {
    client: Arc<dyn RioClient>,
}

impl RegistryService {
    pub fn new(client: Arc<dyn RioClient>) -> Self {
        Self { client }
    }

    /// Erkenningen of institutions in a place
    pub async fn search_erkenningen(
        &self,
        plaatsnaam: &str,
        peildatum: Option<Peildatum>,
        pagination: Pagination,
    ) -> Result<Vec<Value>, DomainError> {
        let plaatsnaam = plaatsnaam.trim();
        if plaatsnaam.is_empty() {
            return Err(DomainError::validation("plaatsnaam is verplicht"));
        }

        self.client
            .search_erkenningen(plaatsnaam, peildatum, pagination)
            .await
    }

    /// An erkenning merged with its locations and licenses
    pub async fn erkenning_detail(
        &self,
        erkenning_id: &str,
        peildatum: Option<Peildatum>,
    ) -> Result<ErkenningDetail, DomainError> {
        let erkenning = self.client.erkenning(erkenning_id).await?;
        let locaties = self.client.erkenning_locaties(erkenning_id, peildatum).await?;
        let onderwijslicenties = self
            .client
            .erkenning_onderwijslicenties(erkenning_id, peildatum)
            .await?;

        debug!(
            erkenning_id = %erkenning_id,
            locaties = locaties.len(),
            onderwijslicenties = onderwijslicenties.len(),
            "Erkenning detail assembled"
        );

        Ok(ErkenningDetail {
            erkenning,
            locaties,
            onderwijslicenties,
        })
    }

    pub async fn organisatorische_eenheden(
        &self,
        erkenning_id: &str,
        peildatum: Option<Peildatum>,
    ) -> Result<Vec<Value>, DomainError> {
        self.client
            .organisatorische_eenheden(erkenning_id, peildatum)
            .await
    }

    /// Offered programs of an organisatorische eenheid with name and level.
    ///
    /// Reads up to [`OVERVIEW_MAX_PAGES`] pages. A failing opleiding lookup
    /// leaves that item without details instead of failing the overview.
    pub async fn opleidingen_per_instelling(
        &self,
        organisatorische_eenheidcode: &str,
        peildatum: Option<Peildatum>,
    ) -> Result<OpleidingenOverzicht, DomainError> {
        let aangeboden = self
            .collect_aangeboden_opleidingen(
                organisatorische_eenheidcode,
                peildatum,
                Pagination::default(),
                OVERVIEW_MAX_PAGES,
            )
            .await?;

        let mut items = Vec::with_capacity(aangeboden.len());
        for aangeboden_opleiding in aangeboden {
            let opleiding = match aangeboden_opleiding_id(&aangeboden_opleiding) {
                Some(id) => match self.client.opleiding(&id, peildatum).await {
                    Ok(opleiding) => Some(opleiding),
                    Err(e) => {
                        warn!(aangeboden_opleiding_id = %id, error = %e, "Opleiding lookup failed");
                        None
                    }
                },
                None => None,
            };

            items.push(AangebodenOpleidingItem::new(aangeboden_opleiding, opleiding));
        }

        Ok(OpleidingenOverzicht::new(
            organisatorische_eenheidcode,
            peildatum,
            items,
        ))
    }

    /// One page of offered programs, each with its opleiding and cohorts.
    ///
    /// Per-item failures are reported inside the entry.
    pub async fn aangeboden_opleidingen_legacy(
        &self,
        organisatorische_eenheidcode: &str,
        peildatum: Option<Peildatum>,
        pagination: Pagination,
    ) -> Result<Vec<LegacyAangebodenOpleiding>, DomainError> {
        let aangeboden = self
            .collect_aangeboden_opleidingen(organisatorische_eenheidcode, peildatum, pagination, 1)
            .await?;

        let mut entries = Vec::with_capacity(aangeboden.len());
        for aangeboden_opleiding in aangeboden {
            let id = aangeboden_opleiding_id(&aangeboden_opleiding);
            let entry = match &id {
                Some(ao_id) => match self.legacy_details(ao_id).await {
                    Ok((opleiding, cohorten)) => {
                        LegacyAangebodenOpleiding::new(id.clone(), opleiding, cohorten)
                    }
                    Err(e) => {
                        warn!(aangeboden_opleiding_id = %ao_id, error = %e, "Legacy detail lookup failed");
                        LegacyAangebodenOpleiding::failed(id.clone(), e.to_string())
                    }
                },
                None => LegacyAangebodenOpleiding::failed(None, "Aangeboden opleiding zonder id"),
            };
            entries.push(entry);
        }

        Ok(entries)
    }

    async fn legacy_details(&self, ao_id: &str) -> Result<(Value, Vec<Value>), DomainError> {
        let opleiding = self.client.opleiding(ao_id, None).await?;
        let cohorten = self.client.aangeboden_opleiding_cohorten(ao_id).await?;
        Ok((opleiding, cohorten))
    }

    /// Walk pages from `start` until `max_pages` are read or a page comes back
    /// empty or short.
    async fn collect_aangeboden_opleidingen(
        &self,
        organisatorische_eenheidcode: &str,
        peildatum: Option<Peildatum>,
        start: Pagination,
        max_pages: u32,
    ) -> Result<Vec<Value>, DomainError> {
        let mut results = Vec::new();

        for offset in 0..max_pages {
            let pagination = start.with_page(start.page() + offset);
            let page = self
                .client
                .aangeboden_opleidingen(organisatorische_eenheidcode, peildatum, pagination)
                .await?;

            let count = page.len();
            results.extend(page);

            if count < pagination.page_size() as usize {
                break;
            }
        }

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::rio::mock::MockHttpClient;
    use crate::infrastructure::rio::RioLodClient;
    use serde_json::json;

    const BASE: &str = "https://rio.test/api/rio/v2";

    fn url(path: &str) -> String {
        format!("{}{}", BASE, path)
    }

    fn service(mock: Arc<MockHttpClient>) -> RegistryService {
        RegistryService::new(Arc::new(RioLodClient::new(BASE, mock).unwrap()))
    }

    fn aangeboden(ids: &[&str]) -> Value {
        let items: Vec<Value> = ids
            .iter()
            .map(|id| json!({ "id": id, "organisatorischeEenheidcode": "115A122", "type": "AANGEBODEN_HO_OPLEIDING" }))
            .collect();
        json!({ "_embedded": { "AangebodenOpleidingen": items } })
    }

    #[tokio::test]
    async fn test_search_requires_plaatsnaam() {
        let mock = Arc::new(MockHttpClient::new());

        let err = service(mock.clone())
            .search_erkenningen("  ", None, Pagination::default())
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation { .. }));
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_search_returns_empty_list() {
        let mock = Arc::new(
            MockHttpClient::new().with_response(url("/erkenningen"), json!({ "_links": {} })),
        );

        let results = service(mock)
            .search_erkenningen("Nergenshuizen", None, Pagination::default())
            .await
            .unwrap();

        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_erkenning_detail_merges_sub_resources() {
        let mock = Arc::new(
            MockHttpClient::new()
                .with_response(url("/erkenningen/100B490"), json!({ "erkenningId": "100B490" }))
                .with_response(
                    url("/erkenningen/100B490/onderwijslocatiegebruiken"),
                    json!({ "_embedded": { "onderwijslocatiegebruiken": [{ "plaatsnaam": "Utrecht" }] } }),
                )
                .with_response(
                    url("/erkenningen/100B490/onderwijslicenties"),
                    json!({ "_embedded": { "Onderwijslicenties": [{ "licentie": "HO" }] } }),
                ),
        );

        let detail = service(mock.clone())
            .erkenning_detail("100B490", Peildatum::parse_optional(Some("2025-06-01")).unwrap())
            .await
            .unwrap();

        assert_eq!(detail.erkenning["erkenningId"], "100B490");
        assert_eq!(detail.locaties.len(), 1);
        assert_eq!(detail.onderwijslicenties.len(), 1);

        // Sequential: detail, locations, licenses
        assert_eq!(
            mock.request_urls(),
            vec![
                url("/erkenningen/100B490"),
                url("/erkenningen/100B490/onderwijslocatiegebruiken"),
                url("/erkenningen/100B490/onderwijslicenties"),
            ]
        );
    }

    #[tokio::test]
    async fn test_erkenning_detail_fails_when_any_part_fails() {
        let mock = Arc::new(
            MockHttpClient::new()
                .with_response(url("/erkenningen/E1"), json!({}))
                .with_response(url("/erkenningen/E1/onderwijslocatiegebruiken"), json!([]))
                .with_error(url("/erkenningen/E1/onderwijslicenties"), "HTTP 500"),
        );

        let err = service(mock).erkenning_detail("E1", None).await.unwrap_err();
        assert!(matches!(err, DomainError::Upstream { .. }));
    }

    #[tokio::test]
    async fn test_opleidingen_enriches_with_name_and_level() {
        let mock = Arc::new(
            MockHttpClient::new()
                .with_response(url("/aangeboden-opleidingen"), aangeboden(&["ao-1", "ao-2"]))
                .with_response(
                    url("/aangeboden-opleidingen/ao-1/opleiding"),
                    json!({ "naam": "Verpleegkunde", "niveau": { "code": "HBO-BA" } }),
                )
                .with_error(url("/aangeboden-opleidingen/ao-2/opleiding"), "HTTP 500"),
        );

        let overzicht = service(mock.clone())
            .opleidingen_per_instelling("115A122", None)
            .await
            .unwrap();

        assert_eq!(overzicht.aantal_opleidingen, 2);
        assert_eq!(overzicht.items[0].opleiding_naam.as_deref(), Some("Verpleegkunde"));
        assert_eq!(overzicht.items[0].opleiding_niveau.as_deref(), Some("HBO-BA"));
        assert!(overzicht.items[1].opleiding.is_none());

        // A short first page ends paging
        let list_calls = mock
            .request_urls()
            .into_iter()
            .filter(|u| u == &url("/aangeboden-opleidingen"))
            .count();
        assert_eq!(list_calls, 1);
    }

    #[tokio::test]
    async fn test_opleidingen_reads_at_most_two_pages() {
        let ids: Vec<String> = (0..50).map(|i| format!("ao-{}", i)).collect();
        let id_refs: Vec<&str> = ids.iter().map(String::as_str).collect();
        let mut mock = MockHttpClient::new().with_response(url("/aangeboden-opleidingen"), aangeboden(&id_refs));
        for id in &ids {
            mock = mock.with_response(url(&format!("/aangeboden-opleidingen/{}/opleiding", id)), json!({}));
        }
        let mock = Arc::new(mock);

        let overzicht = service(mock.clone())
            .opleidingen_per_instelling("115A122", None)
            .await
            .unwrap();

        assert_eq!(overzicht.aantal_opleidingen, 100);
        let pages: Vec<String> = mock
            .requests()
            .into_iter()
            .filter(|r| r.url == url("/aangeboden-opleidingen"))
            .filter_map(|r| r.query.into_iter().find(|(k, _)| *k == "page").map(|(_, v)| v))
            .collect();
        assert_eq!(pages, vec!["0".to_string(), "1".to_string()]);
    }

    #[tokio::test]
    async fn test_opleidingen_list_failure_propagates() {
        let mock = Arc::new(MockHttpClient::new().with_timeout(url("/aangeboden-opleidingen")));

        let err = service(mock)
            .opleidingen_per_instelling("115A122", None)
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Timeout { .. }));
    }

    #[tokio::test]
    async fn test_legacy_adds_cohorts_and_reports_item_errors() {
        let mock = Arc::new(
            MockHttpClient::new()
                .with_response(url("/aangeboden-opleidingen"), aangeboden(&["ao-1", "ao-2"]))
                .with_response(url("/aangeboden-opleidingen/ao-1/opleiding"), json!({ "naam": "Bouwkunde" }))
                .with_response(
                    url("/aangeboden-opleidingen/ao-1/aangeboden-opleiding-cohorten"),
                    json!([{ "cohortcode": "2025-09" }]),
                )
                .with_not_found(url("/aangeboden-opleidingen/ao-2/opleiding")),
        );

        let entries = service(mock)
            .aangeboden_opleidingen_legacy("115A122", None, Pagination::default())
            .await
            .unwrap();

        assert_eq!(entries.len(), 2);
        assert!(entries[0].heeft_cohorten);
        assert_eq!(entries[0].opleiding["naam"], "Bouwkunde");
        assert!(entries[0].error.is_none());

        assert!(!entries[1].heeft_cohorten);
        assert_eq!(entries[1].opleiding["type"], "ONBEKEND");
        assert!(entries[1].error.is_some());
    }
}
