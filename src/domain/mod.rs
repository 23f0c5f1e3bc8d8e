//! Domain layer - Registry concepts, value types and the upstream client seam

pub mod error;
pub mod rio;

pub use error::DomainError;
pub use rio::{
    aangeboden_opleiding_id, embedded_items, AangebodenOpleidingItem, ErkenningDetail,
    LegacyAangebodenOpleiding, OpleidingSummary, OpleidingenOverzicht, Pagination, Peildatum,
    RioClient,
};
