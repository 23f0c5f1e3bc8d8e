use std::fmt::Debug;

use async_trait::async_trait;
use serde_json::Value;

use super::{Pagination, Peildatum};
use crate::domain::DomainError;

/// Read-only access to the RIO LOD registry.
///
/// Every method maps to exactly one upstream GET. Collection methods return
/// the items unwrapped from their HAL envelope; detail methods return the
/// upstream document untouched.
#[async_trait]
pub trait RioClient: Send + Sync + Debug {
    /// Erkenningen of institutions located in a place
    async fn search_erkenningen(
        &self,
        plaatsnaam: &str,
        peildatum: Option<Peildatum>,
        pagination: Pagination,
    ) -> Result<Vec<Value>, DomainError>;

    /// A single erkenning
    async fn erkenning(&self, erkenning_id: &str) -> Result<Value, DomainError>;

    /// Location usages (onderwijslocatiegebruiken) of an erkenning
    async fn erkenning_locaties(
        &self,
        erkenning_id: &str,
        peildatum: Option<Peildatum>,
    ) -> Result<Vec<Value>, DomainError>;

    /// Education licenses of an erkenning
    async fn erkenning_onderwijslicenties(
        &self,
        erkenning_id: &str,
        peildatum: Option<Peildatum>,
    ) -> Result<Vec<Value>, DomainError>;

    /// Organisatorische eenheden belonging to an erkenning
    async fn organisatorische_eenheden(
        &self,
        erkenning_id: &str,
        peildatum: Option<Peildatum>,
    ) -> Result<Vec<Value>, DomainError>;

    /// One page of programs offered by an organisatorische eenheid
    async fn aangeboden_opleidingen(
        &self,
        organisatorische_eenheidcode: &str,
        peildatum: Option<Peildatum>,
        pagination: Pagination,
    ) -> Result<Vec<Value>, DomainError>;

    /// The opleiding behind an aangeboden opleiding
    async fn opleiding(
        &self,
        aangeboden_opleiding_id: &str,
        peildatum: Option<Peildatum>,
    ) -> Result<Value, DomainError>;

    /// Cohorts of an aangeboden opleiding
    async fn aangeboden_opleiding_cohorten(
        &self,
        aangeboden_opleiding_id: &str,
    ) -> Result<Vec<Value>, DomainError>;
}
