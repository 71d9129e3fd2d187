use chrono::Utc;
use diesel::prelude::*;

use crate::{
    db::DbPool,
    domain::lead::{Lead, LeadStatus, NewLead},
    pagination::CursorPage,
    repository::{LeadListQuery, LeadReader, LeadWriter, errors::RepositoryResult},
};

/// Diesel implementation of [`LeadReader`] and [`LeadWriter`].
pub struct DieselLeadRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> DieselLeadRepository<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }
}

impl LeadReader for DieselLeadRepository<'_> {
    fn get_lead_by_id(&self, lead_id: &str, tenant_id: &str) -> RepositoryResult<Option<Lead>> {
        use crate::models::lead::Lead as DbLead;
        use crate::schema::leads;

        let mut conn = self.pool.get()?;
        let lead = leads::table
            .filter(leads::id.eq(lead_id))
            .filter(leads::user_id.eq(tenant_id))
            .first::<DbLead>(&mut conn)
            .optional()?;

        Ok(lead.map(Into::into))
    }

    fn list_leads(&self, query: LeadListQuery) -> RepositoryResult<CursorPage<Lead>> {
        use crate::models::lead::Lead as DbLead;
        use crate::schema::leads;

        let mut conn = self.pool.get()?;

        let mut statement = leads::table
            .filter(leads::user_id.eq(&query.tenant_id))
            .into_boxed();

        // Forward pagination over a descending order: everything strictly
        // before the boundary. The comparison direction must match the sort
        // direction or pages skip/repeat rows.
        if let Some(boundary) = query.cursor {
            statement = statement.filter(leads::created_at.lt(boundary));
        }

        if let Some(term) = &query.search {
            // SQLite LIKE is case-insensitive for ASCII.
            let pattern = format!("%{}%", term.trim());
            statement = statement.filter(
                leads::email
                    .like(pattern.clone())
                    .or(leads::name.assume_not_null().like(pattern.clone()))
                    .or(leads::company.assume_not_null().like(pattern.clone()))
                    .or(leads::title.assume_not_null().like(pattern)),
            );
        }

        // Over-fetch one row to learn whether a further page exists.
        let rows = statement
            .order((leads::created_at.desc(), leads::id.desc()))
            .limit(query.limit + 1)
            .load::<DbLead>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect::<Vec<Lead>>();

        Ok(CursorPage::from_overfetched(rows, query.limit, |lead| {
            lead.created_at
        }))
    }

    fn count_leads(&self, tenant_id: &str) -> RepositoryResult<usize> {
        use crate::schema::leads;

        let mut conn = self.pool.get()?;
        let total: i64 = leads::table
            .filter(leads::user_id.eq(tenant_id))
            .count()
            .get_result(&mut conn)?;

        Ok(total as usize)
    }

    fn recent_leads(&self, tenant_id: &str, limit: i64) -> RepositoryResult<Vec<Lead>> {
        use crate::models::lead::Lead as DbLead;
        use crate::schema::leads;

        let mut conn = self.pool.get()?;
        let rows = leads::table
            .filter(leads::user_id.eq(tenant_id))
            .order((leads::created_at.desc(), leads::id.desc()))
            .limit(limit)
            .load::<DbLead>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

impl LeadWriter for DieselLeadRepository<'_> {
    fn create_leads(&self, new_leads: &[NewLead]) -> RepositoryResult<usize> {
        use crate::models::lead::NewLead as DbNewLead;
        use crate::schema::leads;

        let mut conn = self.pool.get()?;
        let insertables: Vec<DbNewLead> = new_leads.iter().map(Into::into).collect();
        let affected = diesel::insert_into(leads::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn set_lead_status(
        &self,
        lead_id: &str,
        tenant_id: &str,
        status: LeadStatus,
    ) -> RepositoryResult<usize> {
        use crate::schema::leads;

        let mut conn = self.pool.get()?;
        let affected = diesel::update(
            leads::table
                .filter(leads::id.eq(lead_id))
                .filter(leads::user_id.eq(tenant_id)),
        )
        .set((
            leads::status.eq(status.as_str()),
            leads::updated_at.eq(Utc::now().naive_utc()),
        ))
        .execute(&mut conn)?;

        Ok(affected)
    }

    fn delete_lead(&self, lead_id: &str, tenant_id: &str) -> RepositoryResult<usize> {
        use crate::schema::leads;

        let mut conn = self.pool.get()?;
        let affected = diesel::delete(
            leads::table
                .filter(leads::id.eq(lead_id))
                .filter(leads::user_id.eq(tenant_id)),
        )
        .execute(&mut conn)?;

        Ok(affected)
    }
}
