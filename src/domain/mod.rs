//! Domain aggregates exposed by the service layer.

pub mod campaign;
pub mod enrichment;
pub mod lead;
pub mod user;
