//! Aggregate stats and recent items for the dashboard landing page.

use chrono::Utc;

use crate::domain::enrichment::LeadEnricher;
use crate::dto::dashboard::{DashboardData, DashboardStats};
use crate::dto::leads::LeadDto;
use crate::models::auth::AuthenticatedUser;
use crate::repository::{CampaignReader, LeadReader};
use crate::services::{ServiceError, ServiceResult};

const RECENT_ITEMS: i64 = 5;

pub fn dashboard_data<L, C>(
    lead_repo: &L,
    campaign_repo: &C,
    enricher: &dyn LeadEnricher,
    user: &AuthenticatedUser,
) -> ServiceResult<DashboardData>
where
    L: LeadReader + ?Sized,
    C: CampaignReader + ?Sized,
{
    if user.sub.is_empty() {
        return Err(ServiceError::Unauthorized);
    }

    let stats = DashboardStats {
        total_campaigns: campaign_repo
            .count_campaigns(&user.sub)
            .map_err(ServiceError::from)?,
        total_leads: lead_repo
            .count_leads(&user.sub)
            .map_err(ServiceError::from)?,
        active_campaigns: campaign_repo
            .count_active_campaigns(&user.sub)
            .map_err(ServiceError::from)?,
    };

    let recent_campaigns = campaign_repo
        .recent_campaigns(&user.sub, RECENT_ITEMS)
        .map_err(ServiceError::from)?
        .into_iter()
        .map(Into::into)
        .collect();

    let now = Utc::now().naive_utc();
    let recent_leads = lead_repo
        .recent_leads(&user.sub, RECENT_ITEMS)
        .map_err(ServiceError::from)?
        .into_iter()
        .map(|lead| {
            let profile = enricher.enrich(&lead);
            LeadDto::from_lead(lead, profile, now)
        })
        .collect();

    Ok(DashboardData {
        stats,
        recent_campaigns,
        recent_leads,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::enrichment::NoEnrichment;
    use crate::repository::mock::MockRepository;

    #[test]
    fn aggregates_counts_and_recents() {
        let user = AuthenticatedUser {
            sub: "tenant-1".into(),
            email: "t@example.com".into(),
            name: "Tenant".into(),
            exp: 4102444800,
        };

        let mut lead_repo = MockRepository::new();
        lead_repo.expect_count_leads().returning(|_| Ok(12));
        lead_repo.expect_recent_leads().returning(|_, _| Ok(vec![]));

        let mut campaign_repo = MockRepository::new();
        campaign_repo.expect_count_campaigns().returning(|_| Ok(4));
        campaign_repo
            .expect_count_active_campaigns()
            .returning(|_| Ok(3));
        campaign_repo
            .expect_recent_campaigns()
            .withf(|tenant, limit| tenant == "tenant-1" && *limit == 5)
            .returning(|_, _| Ok(vec![]));

        let data = dashboard_data(&lead_repo, &campaign_repo, &NoEnrichment, &user).unwrap();
        assert_eq!(
            data.stats,
            DashboardStats {
                total_campaigns: 4,
                total_leads: 12,
                active_campaigns: 3,
            }
        );
        assert!(data.recent_campaigns.is_empty());
        assert!(data.recent_leads.is_empty());
    }
}
