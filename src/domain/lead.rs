use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Lifecycle status of a lead within an outreach campaign.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum LeadStatus {
    #[default]
    Pending,
    Contacted,
    Responded,
    Connected,
    #[serde(rename = "Not Interested")]
    NotInterested,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown lead status: {0}")]
pub struct ParseLeadStatusError(String);

impl LeadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::Pending => "Pending",
            LeadStatus::Contacted => "Contacted",
            LeadStatus::Responded => "Responded",
            LeadStatus::Connected => "Connected",
            LeadStatus::NotInterested => "Not Interested",
        }
    }
}

impl Display for LeadStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LeadStatus {
    type Err = ParseLeadStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(LeadStatus::Pending),
            "Contacted" => Ok(LeadStatus::Contacted),
            "Responded" => Ok(LeadStatus::Responded),
            "Connected" => Ok(LeadStatus::Connected),
            "Not Interested" => Ok(LeadStatus::NotInterested),
            other => Err(ParseLeadStatusError(other.to_string())),
        }
    }
}

/// A prospective contact attached to a campaign.
///
/// `created_at` is immutable once set and serves as the pagination sort key;
/// ordering ties are broken by `id`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Lead {
    pub id: String,
    pub campaign_id: String,
    pub user_id: String,
    pub name: Option<String>,
    pub email: String,
    pub status: LeadStatus,
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub industry: Option<String>,
    pub company_size: Option<String>,
    pub connection_degree: Option<String>,
    pub last_activity: Option<NaiveDateTime>,
    pub last_contacted_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewLead {
    pub id: String,
    pub campaign_id: String,
    pub user_id: String,
    pub name: Option<String>,
    pub email: String,
    pub status: LeadStatus,
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub industry: Option<String>,
    pub company_size: Option<String>,
    pub connection_degree: Option<String>,
    pub last_activity: Option<NaiveDateTime>,
    pub last_contacted_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl NewLead {
    #[must_use]
    pub fn new(
        campaign_id: impl Into<String>,
        user_id: impl Into<String>,
        name: Option<String>,
        email: impl Into<String>,
    ) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            id: Uuid::new_v4().to_string(),
            campaign_id: campaign_id.into(),
            user_id: user_id.into(),
            name: name.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()),
            email: email.into().trim().to_lowercase(),
            status: LeadStatus::Pending,
            title: None,
            company: None,
            location: None,
            industry: None,
            company_size: None,
            connection_degree: None,
            last_activity: None,
            last_contacted_at: None,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_str() {
        for status in [
            LeadStatus::Pending,
            LeadStatus::Contacted,
            LeadStatus::Responded,
            LeadStatus::Connected,
            LeadStatus::NotInterested,
        ] {
            assert_eq!(status.as_str().parse::<LeadStatus>().unwrap(), status);
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!("Ghosted".parse::<LeadStatus>().is_err());
        assert!("pending".parse::<LeadStatus>().is_err());
    }

    #[test]
    fn new_lead_normalizes_email_and_name() {
        let lead = NewLead::new("c1", "u1", Some("  ".to_string()), " Jane@Example.COM ");
        assert_eq!(lead.email, "jane@example.com");
        assert_eq!(lead.name, None);
        assert_eq!(lead.status, LeadStatus::Pending);
    }
}
