use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Campaign lifecycle: a campaign is either running or paused, nothing else.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum CampaignStatus {
    #[default]
    Active,
    Paused,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown campaign status: {0}")]
pub struct ParseCampaignStatusError(String);

impl CampaignStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::Active => "Active",
            CampaignStatus::Paused => "Paused",
        }
    }

    /// The other of the two defined states.
    pub fn toggled(&self) -> Self {
        match self {
            CampaignStatus::Active => CampaignStatus::Paused,
            CampaignStatus::Paused => CampaignStatus::Active,
        }
    }
}

impl Display for CampaignStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CampaignStatus {
    type Err = ParseCampaignStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(CampaignStatus::Active),
            "Paused" => Ok(CampaignStatus::Paused),
            other => Err(ParseCampaignStatusError(other.to_string())),
        }
    }
}

/// A named outreach effort owned by exactly one tenant.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Campaign {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub status: CampaignStatus,
    pub progress: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewCampaign {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub status: CampaignStatus,
    pub progress: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl NewCampaign {
    #[must_use]
    pub fn new(user_id: impl Into<String>, name: impl Into<String>) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            name: name.into().trim().to_string(),
            status: CampaignStatus::Active,
            progress: 0,
            created_at: now,
            updated_at: now,
        }
    }
}
