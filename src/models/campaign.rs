use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::campaign::{
    Campaign as DomainCampaign, CampaignStatus, NewCampaign as DomainNewCampaign,
};

#[derive(Debug, Clone, Identifiable, Queryable, QueryableByName)]
#[diesel(table_name = crate::schema::campaigns)]
/// Diesel model for [`crate::domain::campaign::Campaign`].
pub struct Campaign {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub status: String,
    pub progress: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::campaigns)]
/// Insertable form of [`Campaign`].
pub struct NewCampaign<'a> {
    pub id: &'a str,
    pub user_id: &'a str,
    pub name: &'a str,
    pub status: &'a str,
    pub progress: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<Campaign> for DomainCampaign {
    fn from(campaign: Campaign) -> Self {
        Self {
            status: campaign.status.parse::<CampaignStatus>().unwrap_or_default(),
            id: campaign.id,
            user_id: campaign.user_id,
            name: campaign.name,
            progress: campaign.progress,
            created_at: campaign.created_at,
            updated_at: campaign.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewCampaign> for NewCampaign<'a> {
    fn from(campaign: &'a DomainNewCampaign) -> Self {
        Self {
            id: campaign.id.as_str(),
            user_id: campaign.user_id.as_str(),
            name: campaign.name.as_str(),
            status: campaign.status.as_str(),
            progress: campaign.progress,
            created_at: campaign.created_at,
            updated_at: campaign.updated_at,
        }
    }
}
