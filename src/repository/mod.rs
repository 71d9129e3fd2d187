use chrono::NaiveDateTime;

use crate::{
    domain::{
        campaign::{Campaign, CampaignStatus, NewCampaign},
        lead::{Lead, LeadStatus, NewLead},
        user::{NewUser, User},
    },
    pagination::{CursorPage, DEFAULT_PAGE_SIZE},
    repository::errors::RepositoryResult,
};

pub mod campaign;
pub mod errors;
pub mod lead;
#[cfg(test)]
pub mod mock;
pub mod user;

/// Cursor-paginated, filterable lead listing scoped to one tenant.
#[derive(Debug, Clone)]
pub struct LeadListQuery {
    pub tenant_id: String,
    pub search: Option<String>,
    /// Only leads created strictly before this boundary are eligible.
    pub cursor: Option<NaiveDateTime>,
    pub limit: i64,
}

impl LeadListQuery {
    pub fn new(tenant_id: impl Into<String>) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            search: None,
            cursor: None,
            limit: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn cursor(mut self, boundary: NaiveDateTime) -> Self {
        self.cursor = Some(boundary);
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }
}

pub trait LeadReader {
    fn get_lead_by_id(&self, lead_id: &str, tenant_id: &str) -> RepositoryResult<Option<Lead>>;
    fn list_leads(&self, query: LeadListQuery) -> RepositoryResult<CursorPage<Lead>>;
    fn count_leads(&self, tenant_id: &str) -> RepositoryResult<usize>;
    fn recent_leads(&self, tenant_id: &str, limit: i64) -> RepositoryResult<Vec<Lead>>;
}

pub trait LeadWriter {
    fn create_leads(&self, new_leads: &[NewLead]) -> RepositoryResult<usize>;
    /// Returns the affected-row count; zero means the lead does not exist or
    /// is not owned by the tenant.
    fn set_lead_status(
        &self,
        lead_id: &str,
        tenant_id: &str,
        status: LeadStatus,
    ) -> RepositoryResult<usize>;
    fn delete_lead(&self, lead_id: &str, tenant_id: &str) -> RepositoryResult<usize>;
}

pub trait CampaignReader {
    fn get_campaign_by_id(
        &self,
        campaign_id: &str,
        tenant_id: &str,
    ) -> RepositoryResult<Option<Campaign>>;
    fn list_campaigns(&self, tenant_id: &str) -> RepositoryResult<Vec<Campaign>>;
    fn count_campaigns(&self, tenant_id: &str) -> RepositoryResult<usize>;
    fn count_active_campaigns(&self, tenant_id: &str) -> RepositoryResult<usize>;
    fn recent_campaigns(&self, tenant_id: &str, limit: i64) -> RepositoryResult<Vec<Campaign>>;
}

pub trait CampaignWriter {
    fn create_campaign(&self, new_campaign: &NewCampaign) -> RepositoryResult<Campaign>;
    /// Ownership is part of the mutating statement itself; the affected-row
    /// count distinguishes "updated" from "not owned / not found".
    fn set_campaign_status(
        &self,
        campaign_id: &str,
        tenant_id: &str,
        status: CampaignStatus,
    ) -> RepositoryResult<usize>;
    fn delete_campaign(&self, campaign_id: &str, tenant_id: &str) -> RepositoryResult<usize>;
}

pub trait UserWriter {
    fn upsert_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
}
