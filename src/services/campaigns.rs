//! Campaign listing and ownership-scoped mutations.

use crate::domain::campaign::CampaignStatus;
use crate::dto::campaigns::{CampaignDto, MutationOutcome};
use crate::models::auth::AuthenticatedUser;
use crate::repository::{CampaignReader, CampaignWriter};
use crate::services::{ServiceError, ServiceResult};

/// Lists the authenticated tenant's campaigns, newest first.
pub fn list_campaigns<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<Vec<CampaignDto>>
where
    R: CampaignReader + ?Sized,
{
    if user.sub.is_empty() {
        return Err(ServiceError::Unauthorized);
    }

    let campaigns = repo.list_campaigns(&user.sub).map_err(ServiceError::from)?;
    Ok(campaigns.into_iter().map(Into::into).collect())
}

/// Flips a campaign between `Active` and `Paused`.
///
/// `current_status` must name one of the two defined states; anything else is
/// rejected rather than guessed. The flip and the ownership check happen in a
/// single UPDATE.
pub fn toggle_campaign_status<R>(
    repo: &R,
    user: &AuthenticatedUser,
    campaign_id: &str,
    current_status: &str,
) -> ServiceResult<MutationOutcome>
where
    R: CampaignWriter + ?Sized,
{
    if user.sub.is_empty() {
        return Err(ServiceError::Unauthorized);
    }

    let current = current_status
        .parse::<CampaignStatus>()
        .map_err(|e| ServiceError::Validation(e.to_string()))?;

    let affected = repo
        .set_campaign_status(campaign_id, &user.sub, current.toggled())
        .map_err(ServiceError::from)?;

    Ok(MutationOutcome { affected })
}

/// Deletes a campaign the tenant owns; its leads cascade with it.
pub fn delete_campaign<R>(
    repo: &R,
    user: &AuthenticatedUser,
    campaign_id: &str,
) -> ServiceResult<MutationOutcome>
where
    R: CampaignWriter + ?Sized,
{
    if user.sub.is_empty() {
        return Err(ServiceError::Unauthorized);
    }

    let affected = repo
        .delete_campaign(campaign_id, &user.sub)
        .map_err(ServiceError::from)?;

    Ok(MutationOutcome { affected })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::mock::MockRepository;

    fn user() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "tenant-1".into(),
            email: "t@example.com".into(),
            name: "Tenant".into(),
            exp: 4102444800,
        }
    }

    #[test]
    fn toggle_sends_the_flipped_status() {
        let mut repo = MockRepository::new();
        repo.expect_set_campaign_status()
            .withf(|id, tenant, status| {
                id == "c1" && tenant == "tenant-1" && *status == CampaignStatus::Paused
            })
            .returning(|_, _, _| Ok(1));

        let outcome = toggle_campaign_status(&repo, &user(), "c1", "Active").unwrap();
        assert!(outcome.applied());
    }

    #[test]
    fn toggle_rejects_unknown_status() {
        let repo = MockRepository::new();
        let err = toggle_campaign_status(&repo, &user(), "c1", "Archived");
        assert!(matches!(err, Err(ServiceError::Validation(_))));
    }

    #[test]
    fn delete_by_non_owner_is_zero_affected() {
        let mut repo = MockRepository::new();
        repo.expect_delete_campaign().returning(|_, _| Ok(0));

        let outcome = delete_campaign(&repo, &user(), "someone-elses").unwrap();
        assert_eq!(outcome.affected, 0);
        assert!(!outcome.applied());
    }

    #[test]
    fn empty_tenant_is_unauthorized() {
        let repo = MockRepository::new();
        let mut anonymous = user();
        anonymous.sub = String::new();

        assert!(matches!(
            list_campaigns(&repo, &anonymous),
            Err(ServiceError::Unauthorized)
        ));
        assert!(matches!(
            delete_campaign(&repo, &anonymous, "c1"),
            Err(ServiceError::Unauthorized)
        ));
    }
}
