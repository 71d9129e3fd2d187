//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::campaign::{Campaign, CampaignStatus, NewCampaign};
use crate::domain::lead::{Lead, LeadStatus, NewLead};
use crate::domain::user::{NewUser, User};
use crate::pagination::CursorPage;
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    CampaignReader, CampaignWriter, LeadListQuery, LeadReader, LeadWriter, UserWriter,
};

mock! {
    pub Repository {}

    impl LeadReader for Repository {
        fn get_lead_by_id(&self, lead_id: &str, tenant_id: &str) -> RepositoryResult<Option<Lead>>;
        fn list_leads(&self, query: LeadListQuery) -> RepositoryResult<CursorPage<Lead>>;
        fn count_leads(&self, tenant_id: &str) -> RepositoryResult<usize>;
        fn recent_leads(&self, tenant_id: &str, limit: i64) -> RepositoryResult<Vec<Lead>>;
    }

    impl LeadWriter for Repository {
        fn create_leads(&self, new_leads: &[NewLead]) -> RepositoryResult<usize>;
        fn set_lead_status(
            &self,
            lead_id: &str,
            tenant_id: &str,
            status: LeadStatus,
        ) -> RepositoryResult<usize>;
        fn delete_lead(&self, lead_id: &str, tenant_id: &str) -> RepositoryResult<usize>;
    }

    impl CampaignReader for Repository {
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

    impl CampaignWriter for Repository {
        fn create_campaign(&self, new_campaign: &NewCampaign) -> RepositoryResult<Campaign>;
        fn set_campaign_status(
            &self,
            campaign_id: &str,
            tenant_id: &str,
            status: CampaignStatus,
        ) -> RepositoryResult<usize>;
        fn delete_campaign(&self, campaign_id: &str, tenant_id: &str) -> RepositoryResult<usize>;
    }

    impl UserWriter for Repository {
        fn upsert_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
    }
}
