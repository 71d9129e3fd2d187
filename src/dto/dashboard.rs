//! Aggregate payload for the dashboard landing page.

use serde::{Deserialize, Serialize};

use crate::dto::campaigns::CampaignDto;
use crate::dto::leads::LeadDto;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_campaigns: usize,
    pub total_leads: usize,
    pub active_campaigns: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub stats: DashboardStats,
    pub recent_campaigns: Vec<CampaignDto>,
    pub recent_leads: Vec<LeadDto>,
}
