//! Application services

mod registry_service;

pub use registry_service::{RegistryService, OVERVIEW_MAX_PAGES};
