//! Campaign payloads and mutation outcomes.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::campaign::{Campaign, CampaignStatus};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CampaignDto {
    pub id: String,
    pub name: String,
    pub status: CampaignStatus,
    pub progress: i32,
    pub created_at: NaiveDateTime,
}

impl From<Campaign> for CampaignDto {
    fn from(campaign: Campaign) -> Self {
        Self {
            id: campaign.id,
            name: campaign.name,
            status: campaign.status,
            progress: campaign.progress,
            created_at: campaign.created_at,
        }
    }
}

/// Result of an ownership-scoped mutation. `affected == 0` means the target
/// did not exist or is not owned by the tenant — a non-error the caller (and
/// the tests) can distinguish from an applied change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutationOutcome {
    pub affected: usize,
}

impl MutationOutcome {
    pub fn applied(&self) -> bool {
        self.affected > 0
    }
}

/// Wire shape of mutation responses: `{ "success": bool, "error"?: string }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MutationResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}
