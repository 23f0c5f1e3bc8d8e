//! RIO registry domain: reference dates, paging, HAL envelopes and composed views

mod client;
mod hal;
mod models;
mod opleiding;
mod pagination;
mod peildatum;

pub use client::RioClient;
pub use hal::embedded_items;
pub use models::{
    aangeboden_opleiding_id, AangebodenOpleidingItem, ErkenningDetail, LegacyAangebodenOpleiding,
    OpleidingenOverzicht,
};
pub use opleiding::OpleidingSummary;
pub use pagination::{Pagination, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use peildatum::Peildatum;
