//! Pluggable lead profile enrichment.
//!
//! Profile data for a lead can come from an external source (a LinkedIn-style
//! lookup). The listing path only depends on the [`LeadEnricher`] capability;
//! the shipped implementation returns fixed placeholder data until a real
//! collaborator exists.

use crate::domain::lead::Lead;

/// Profile fields an enrichment source can contribute. Fields already present
/// on the stored lead always win over enriched values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadProfile {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub connection_degree: Option<String>,
}

pub trait LeadEnricher: Send + Sync {
    fn enrich(&self, lead: &Lead) -> LeadProfile;
}

/// Placeholder enrichment returning the same profile for every lead.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticProfileEnricher;

impl LeadEnricher for StaticProfileEnricher {
    fn enrich(&self, _lead: &Lead) -> LeadProfile {
        LeadProfile {
            title: Some("Regional Head".to_string()),
            company: Some("Gynandra".to_string()),
            location: Some("Mumbai, Maharashtra".to_string()),
            connection_degree: Some("2nd".to_string()),
        }
    }
}

/// Enricher that contributes nothing; useful where enrichment is undesired.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoEnrichment;

impl LeadEnricher for NoEnrichment {
    fn enrich(&self, _lead: &Lead) -> LeadProfile {
        LeadProfile::default()
    }
}
