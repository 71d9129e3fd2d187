//! Lead payloads returned by the listing API.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::enrichment::LeadProfile;
use crate::domain::lead::{Lead, LeadStatus};

/// Query parameters accepted by the `/api/v1/leads` service.
#[derive(Debug, Default)]
pub struct LeadsQuery {
    /// Optional free-form search string matched against name, email,
    /// company, and title.
    pub search: Option<String>,
    /// Continuation cursor from the previous page (RFC 3339 timestamp).
    pub cursor: Option<String>,
    /// Requested page size; defaults when absent.
    pub limit: Option<i64>,
}

/// One lead as presented to the client, including display fields computed
/// per call and profile fields overlaid from the enrichment capability.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeadDto {
    pub id: String,
    pub campaign_id: String,
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
    /// Whole days since the last recorded activity; `None` when there is none.
    pub days_since_last_activity: Option<i64>,
    /// Human-relative rendering of `last_activity`, recomputed per call.
    pub last_activity_formatted: String,
}

impl LeadDto {
    /// Stored fields win over enriched ones; computed fields derive from
    /// `last_activity` and `now` only.
    pub fn from_lead(lead: Lead, profile: LeadProfile, now: NaiveDateTime) -> Self {
        let days_since_last_activity = lead.last_activity.map(|ts| (now - ts).num_days());
        let last_activity_formatted = lead
            .last_activity
            .map(|ts| format_relative_time(ts, now))
            .unwrap_or_else(|| "Never".to_string());

        Self {
            id: lead.id,
            campaign_id: lead.campaign_id,
            name: lead.name,
            email: lead.email,
            status: lead.status,
            title: lead.title.or(profile.title),
            company: lead.company.or(profile.company),
            location: lead.location.or(profile.location),
            industry: lead.industry,
            company_size: lead.company_size,
            connection_degree: lead.connection_degree.or(profile.connection_degree),
            last_activity: lead.last_activity,
            last_contacted_at: lead.last_contacted_at,
            created_at: lead.created_at,
            days_since_last_activity,
            last_activity_formatted,
        }
    }
}

/// Result payload returned by [`crate::services::leads::list_leads`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadsPage {
    pub leads: Vec<LeadDto>,
    pub next_cursor: Option<String>,
    /// Number of leads in this page.
    pub total: usize,
}

/// Render a timestamp relative to `now`: "Just now", "Nm ago", "Nh ago",
/// "Nd ago", or a calendar date once it is over a week old.
pub fn format_relative_time(ts: NaiveDateTime, now: NaiveDateTime) -> String {
    let secs = (now - ts).num_seconds();
    if secs < 60 {
        return "Just now".to_string();
    }
    if secs < 3600 {
        return format!("{}m ago", secs / 60);
    }
    if secs < 86_400 {
        return format!("{}h ago", secs / 3600);
    }
    if secs < 604_800 {
        return format!("{}d ago", secs / 86_400);
    }
    ts.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn base() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 30)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn relative_time_buckets() {
        let now = base();
        assert_eq!(format_relative_time(now - Duration::seconds(5), now), "Just now");
        assert_eq!(format_relative_time(now - Duration::minutes(7), now), "7m ago");
        assert_eq!(format_relative_time(now - Duration::hours(3), now), "3h ago");
        assert_eq!(format_relative_time(now - Duration::days(2), now), "2d ago");
        assert_eq!(
            format_relative_time(now - Duration::days(30), now),
            "2026-07-31"
        );
    }

    #[test]
    fn stored_profile_fields_win_over_enrichment() {
        let now = base();
        let lead = Lead {
            id: "l1".into(),
            campaign_id: "c1".into(),
            user_id: "u1".into(),
            name: Some("Jane".into()),
            email: "jane@example.com".into(),
            status: LeadStatus::Contacted,
            title: Some("CTO".into()),
            company: None,
            location: None,
            industry: None,
            company_size: None,
            connection_degree: None,
            last_activity: Some(now - Duration::days(2)),
            last_contacted_at: None,
            created_at: now - Duration::days(10),
            updated_at: now,
        };
        let profile = LeadProfile {
            title: Some("Regional Head".into()),
            company: Some("Gynandra".into()),
            location: Some("Mumbai, Maharashtra".into()),
            connection_degree: Some("2nd".into()),
        };

        let dto = LeadDto::from_lead(lead, profile, now);
        assert_eq!(dto.title.as_deref(), Some("CTO"));
        assert_eq!(dto.company.as_deref(), Some("Gynandra"));
        assert_eq!(dto.days_since_last_activity, Some(2));
        assert_eq!(dto.last_activity_formatted, "2d ago");
    }

    #[test]
    fn lead_without_activity_formats_as_never() {
        let now = base();
        let lead = Lead {
            id: "l1".into(),
            campaign_id: "c1".into(),
            user_id: "u1".into(),
            name: None,
            email: "x@example.com".into(),
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
        };
        let dto = LeadDto::from_lead(lead, LeadProfile::default(), now);
        assert_eq!(dto.days_since_last_activity, None);
        assert_eq!(dto.last_activity_formatted, "Never");
    }
}
