//! RIO LOD API client

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;
use tracing::debug;

use super::http_client::{HttpClient, HttpClientTrait, QueryParams};
use crate::config::RioConfig;
use crate::domain::{embedded_items, DomainError, Pagination, Peildatum, RioClient};

/// `RioClient` backed by the public RIO LOD API
#[derive(Debug, Clone)]
pub struct RioLodClient {
    base_url: Url,
    http: Arc<dyn HttpClientTrait>,
}

impl RioLodClient {
    pub fn new(base_url: &str, http: Arc<dyn HttpClientTrait>) -> Result<Self, DomainError> {
        let invalid = |reason: String| {
            DomainError::configuration(format!("Invalid RIO base URL '{}': {}", base_url, reason))
        };

        let mut url = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| invalid("cannot be a base".to_string()))?
            .pop_if_empty();

        Ok(Self {
            base_url: url,
            http,
        })
    }

    /// Build a client with a reqwest transport bounded by the configured timeout
    pub fn from_config(config: &RioConfig) -> Result<Self, DomainError> {
        let http = HttpClient::with_timeout(config.timeout())?;
        Self::new(&config.base_url, Arc::new(http))
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Resource URL below the base; segments are percent-encoded individually
    fn url(&self, segments: &[&str]) -> String {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.extend(segments);
        }
        url.into()
    }

    async fn get(&self, segments: &[&str], query: QueryParams) -> Result<Value, DomainError> {
        self.http.get_json(&self.url(segments), &query).await
    }

    async fn get_items(
        &self,
        segments: &[&str],
        query: QueryParams,
        embedded_key: &str,
    ) -> Result<Vec<Value>, DomainError> {
        let body = self.get(segments, query).await?;
        let items = embedded_items(body, embedded_key);
        debug!(resource = %segments.join("/"), count = items.len(), "Upstream collection fetched");
        Ok(items)
    }
}

fn peildatum_query(peildatum: Option<Peildatum>) -> QueryParams {
    peildatum
        .map(|p| vec![(Peildatum::QUERY_PARAM, p.as_query_value())])
        .unwrap_or_default()
}

#[async_trait]
impl RioClient for RioLodClient {
    async fn search_erkenningen(
        &self,
        plaatsnaam: &str,
        peildatum: Option<Peildatum>,
        pagination: Pagination,
    ) -> Result<Vec<Value>, DomainError> {
        let mut query: QueryParams = vec![("plaatsnaam", plaatsnaam.to_string())];
        query.extend(pagination.query_pairs());
        query.extend(peildatum_query(peildatum));

        self.get_items(&["erkenningen"], query, "Erkenningen").await
    }

    async fn erkenning(&self, erkenning_id: &str) -> Result<Value, DomainError> {
        self.get(&["erkenningen", erkenning_id], Vec::new()).await
    }

    async fn erkenning_locaties(
        &self,
        erkenning_id: &str,
        peildatum: Option<Peildatum>,
    ) -> Result<Vec<Value>, DomainError> {
        self.get_items(
            &["erkenningen", erkenning_id, "onderwijslocatiegebruiken"],
            peildatum_query(peildatum),
            "onderwijslocatiegebruiken",
        )
        .await
    }

    async fn erkenning_onderwijslicenties(
        &self,
        erkenning_id: &str,
        peildatum: Option<Peildatum>,
    ) -> Result<Vec<Value>, DomainError> {
        self.get_items(
            &["erkenningen", erkenning_id, "onderwijslicenties"],
            peildatum_query(peildatum),
            "Onderwijslicenties",
        )
        .await
    }

    async fn organisatorische_eenheden(
        &self,
        erkenning_id: &str,
        peildatum: Option<Peildatum>,
    ) -> Result<Vec<Value>, DomainError> {
        self.get_items(
            &["erkenningen", erkenning_id, "organisatorische-eenheden"],
            peildatum_query(peildatum),
            "organisatorischeEenheden",
        )
        .await
    }

    async fn aangeboden_opleidingen(
        &self,
        organisatorische_eenheidcode: &str,
        peildatum: Option<Peildatum>,
        pagination: Pagination,
    ) -> Result<Vec<Value>, DomainError> {
        let mut query: QueryParams = vec![(
            "organisatorischeEenheidcode",
            organisatorische_eenheidcode.to_string(),
        )];
        query.extend(pagination.query_pairs());
        query.extend(peildatum_query(peildatum));

        self.get_items(&["aangeboden-opleidingen"], query, "AangebodenOpleidingen")
            .await
    }

    async fn opleiding(
        &self,
        aangeboden_opleiding_id: &str,
        peildatum: Option<Peildatum>,
    ) -> Result<Value, DomainError> {
        self.get(
            &["aangeboden-opleidingen", aangeboden_opleiding_id, "opleiding"],
            peildatum_query(peildatum),
        )
        .await
    }

    async fn aangeboden_opleiding_cohorten(
        &self,
        aangeboden_opleiding_id: &str,
    ) -> Result<Vec<Value>, DomainError> {
        self.get_items(
            &[
                "aangeboden-opleidingen",
                aangeboden_opleiding_id,
                "aangeboden-opleiding-cohorten",
            ],
            Vec::new(),
            "aangebodenOpleidingCohorten",
        )
        .await
    }
}
