//! DTOs shaped for the JSON API.

pub mod campaigns;
pub mod dashboard;
pub mod leads;
