//! RIO LOD API transport and client

mod http_client;
mod lod_client;

pub use http_client::{HttpClient, HttpClientTrait, QueryParams};
pub use lod_client::RioLodClient;

#[cfg(test)]
pub use http_client::mock;
