use chrono::Utc;
use diesel::prelude::*;

use crate::{
    db::DbPool,
    domain::campaign::{Campaign, CampaignStatus, NewCampaign},
    repository::{CampaignReader, CampaignWriter, errors::RepositoryResult},
};

/// Diesel implementation of [`CampaignReader`] and [`CampaignWriter`].
pub struct DieselCampaignRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> DieselCampaignRepository<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }
}

impl CampaignReader for DieselCampaignRepository<'_> {
    fn get_campaign_by_id(
        &self,
        campaign_id: &str,
        tenant_id: &str,
    ) -> RepositoryResult<Option<Campaign>> {
        use crate::models::campaign::Campaign as DbCampaign;
        use crate::schema::campaigns;

        let mut conn = self.pool.get()?;
        let campaign = campaigns::table
            .filter(campaigns::id.eq(campaign_id))
            .filter(campaigns::user_id.eq(tenant_id))
            .first::<DbCampaign>(&mut conn)
            .optional()?;

        Ok(campaign.map(Into::into))
    }

    fn list_campaigns(&self, tenant_id: &str) -> RepositoryResult<Vec<Campaign>> {
        use crate::models::campaign::Campaign as DbCampaign;
        use crate::schema::campaigns;

        let mut conn = self.pool.get()?;
        let rows = campaigns::table
            .filter(campaigns::user_id.eq(tenant_id))
            .order(campaigns::created_at.desc())
            .load::<DbCampaign>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn count_campaigns(&self, tenant_id: &str) -> RepositoryResult<usize> {
        use crate::schema::campaigns;

        let mut conn = self.pool.get()?;
        let total: i64 = campaigns::table
            .filter(campaigns::user_id.eq(tenant_id))
            .count()
            .get_result(&mut conn)?;

        Ok(total as usize)
    }

    fn count_active_campaigns(&self, tenant_id: &str) -> RepositoryResult<usize> {
        use crate::schema::campaigns;

        let mut conn = self.pool.get()?;
        let total: i64 = campaigns::table
            .filter(campaigns::user_id.eq(tenant_id))
            .filter(campaigns::status.eq(CampaignStatus::Active.as_str()))
            .count()
            .get_result(&mut conn)?;

        Ok(total as usize)
    }

    fn recent_campaigns(&self, tenant_id: &str, limit: i64) -> RepositoryResult<Vec<Campaign>> {
        use crate::models::campaign::Campaign as DbCampaign;
        use crate::schema::campaigns;

        let mut conn = self.pool.get()?;
        let rows = campaigns::table
            .filter(campaigns::user_id.eq(tenant_id))
            .order(campaigns::created_at.desc())
            .limit(limit)
            .load::<DbCampaign>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

impl CampaignWriter for DieselCampaignRepository<'_> {
    fn create_campaign(&self, new_campaign: &NewCampaign) -> RepositoryResult<Campaign> {
        use crate::models::campaign::{Campaign as DbCampaign, NewCampaign as DbNewCampaign};
        use crate::schema::campaigns;

        let mut conn = self.pool.get()?;
        let insertable: DbNewCampaign = new_campaign.into();
        let created = diesel::insert_into(campaigns::table)
            .values(&insertable)
            .get_result::<DbCampaign>(&mut conn)?;

        Ok(created.into())
    }

    fn set_campaign_status(
        &self,
        campaign_id: &str,
        tenant_id: &str,
        status: CampaignStatus,
    ) -> RepositoryResult<usize> {
        use crate::schema::campaigns;

        // Ownership lives inside the UPDATE itself; there is no window
        // between a separate read and the write.
        let mut conn = self.pool.get()?;
        let affected = diesel::update(
            campaigns::table
                .filter(campaigns::id.eq(campaign_id))
                .filter(campaigns::user_id.eq(tenant_id)),
        )
        .set((
            campaigns::status.eq(status.as_str()),
            campaigns::updated_at.eq(Utc::now().naive_utc()),
        ))
        .execute(&mut conn)?;

        Ok(affected)
    }

    fn delete_campaign(&self, campaign_id: &str, tenant_id: &str) -> RepositoryResult<usize> {
        use crate::schema::campaigns;

        // Leads fall with the campaign via ON DELETE CASCADE.
        let mut conn = self.pool.get()?;
        let affected = diesel::delete(
            campaigns::table
                .filter(campaigns::id.eq(campaign_id))
                .filter(campaigns::user_id.eq(tenant_id)),
        )
        .execute(&mut conn)?;

        Ok(affected)
    }
}
