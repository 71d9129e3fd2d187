use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::lead::{Lead as DomainLead, LeadStatus, NewLead as DomainNewLead};

#[derive(Debug, Clone, Identifiable, Queryable, QueryableByName)]
#[diesel(table_name = crate::schema::leads)]
/// Diesel model for [`crate::domain::lead::Lead`].
pub struct Lead {
    pub id: String,
    pub campaign_id: String,
    pub user_id: String,
    pub name: Option<String>,
    pub email: String,
    pub status: String,
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

#[derive(Insertable)]
#[diesel(table_name = crate::schema::leads)]
/// Insertable form of [`Lead`].
pub struct NewLead<'a> {
    pub id: &'a str,
    pub campaign_id: &'a str,
    pub user_id: &'a str,
    pub name: Option<&'a str>,
    pub email: &'a str,
    pub status: &'a str,
    pub title: Option<&'a str>,
    pub company: Option<&'a str>,
    pub location: Option<&'a str>,
    pub industry: Option<&'a str>,
    pub company_size: Option<&'a str>,
    pub connection_degree: Option<&'a str>,
    pub last_activity: Option<NaiveDateTime>,
    pub last_contacted_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<Lead> for DomainLead {
    fn from(lead: Lead) -> Self {
        Self {
            // The CHECK constraint keeps stored statuses inside the enum; an
            // out-of-band edit degrades to Pending rather than failing reads.
            status: lead.status.parse::<LeadStatus>().unwrap_or_default(),
            id: lead.id,
            campaign_id: lead.campaign_id,
            user_id: lead.user_id,
            name: lead.name,
            email: lead.email,
            title: lead.title,
            company: lead.company,
            location: lead.location,
            industry: lead.industry,
            company_size: lead.company_size,
            connection_degree: lead.connection_degree,
            last_activity: lead.last_activity,
            last_contacted_at: lead.last_contacted_at,
            created_at: lead.created_at,
            updated_at: lead.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewLead> for NewLead<'a> {
    fn from(lead: &'a DomainNewLead) -> Self {
        Self {
            id: lead.id.as_str(),
            campaign_id: lead.campaign_id.as_str(),
            user_id: lead.user_id.as_str(),
            name: lead.name.as_deref(),
            email: lead.email.as_str(),
            status: lead.status.as_str(),
            title: lead.title.as_deref(),
            company: lead.company.as_deref(),
            location: lead.location.as_deref(),
            industry: lead.industry.as_deref(),
            company_size: lead.company_size.as_deref(),
            connection_degree: lead.connection_degree.as_deref(),
            last_activity: lead.last_activity,
            last_contacted_at: lead.last_contacted_at,
            created_at: lead.created_at,
            updated_at: lead.updated_at,
        }
    }
}
