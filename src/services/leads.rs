//! Lead query service and lead mutations.

use chrono::Utc;

use crate::domain::enrichment::LeadEnricher;
use crate::domain::lead::LeadStatus;
use crate::dto::campaigns::MutationOutcome;
use crate::dto::leads::{LeadDto, LeadsPage, LeadsQuery};
use crate::models::auth::AuthenticatedUser;
use crate::pagination::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, decode_cursor, encode_cursor};
use crate::repository::{LeadListQuery, LeadReader, LeadWriter};
use crate::services::{ServiceError, ServiceResult};

/// Returns one page of the authenticated tenant's leads.
///
/// Failures are always surfaced; an empty page strictly means "no matching
/// rows". Display fields are recomputed from the current time on every call.
pub fn list_leads<R>(
    repo: &R,
    enricher: &dyn LeadEnricher,
    user: &AuthenticatedUser,
    params: LeadsQuery,
) -> ServiceResult<LeadsPage>
where
    R: LeadReader + ?Sized,
{
    if user.sub.is_empty() {
        return Err(ServiceError::Unauthorized);
    }

    let limit = params.limit.unwrap_or(DEFAULT_PAGE_SIZE);
    if limit < 1 || limit > MAX_PAGE_SIZE {
        return Err(ServiceError::Validation(format!(
            "limit must be between 1 and {MAX_PAGE_SIZE}"
        )));
    }

    let mut query = LeadListQuery::new(&user.sub).limit(limit);

    if let Some(raw) = params.cursor.as_deref() {
        let boundary =
            decode_cursor(raw).map_err(|e| ServiceError::Validation(e.to_string()))?;
        query = query.cursor(boundary);
    }

    let search = params
        .search
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
    if let Some(term) = search {
        query = query.search(term);
    }

    let page = repo.list_leads(query).map_err(ServiceError::from)?;

    let now = Utc::now().naive_utc();
    let leads: Vec<LeadDto> = page
        .items
        .into_iter()
        .map(|lead| {
            let profile = enricher.enrich(&lead);
            LeadDto::from_lead(lead, profile, now)
        })
        .collect();

    Ok(LeadsPage {
        next_cursor: page.next_cursor.map(encode_cursor),
        total: leads.len(),
        leads,
    })
}

/// Sets a lead's lifecycle status. Unknown statuses are rejected, not guessed.
pub fn set_lead_status<R>(
    repo: &R,
    user: &AuthenticatedUser,
    lead_id: &str,
    status: &str,
) -> ServiceResult<MutationOutcome>
where
    R: LeadWriter + ?Sized,
{
    if user.sub.is_empty() {
        return Err(ServiceError::Unauthorized);
    }

    let status = status
        .parse::<LeadStatus>()
        .map_err(|e| ServiceError::Validation(e.to_string()))?;

    let affected = repo
        .set_lead_status(lead_id, &user.sub, status)
        .map_err(ServiceError::from)?;

    Ok(MutationOutcome { affected })
}

/// Deletes a lead owned by the tenant; zero affected rows is a non-error.
pub fn delete_lead<R>(
    repo: &R,
    user: &AuthenticatedUser,
    lead_id: &str,
) -> ServiceResult<MutationOutcome>
where
    R: LeadWriter + ?Sized,
{
    if user.sub.is_empty() {
        return Err(ServiceError::Unauthorized);
    }

    let affected = repo
        .delete_lead(lead_id, &user.sub)
        .map_err(ServiceError::from)?;

    Ok(MutationOutcome { affected })
}
