use actix_web::{HttpResponse, Responder, delete, get, post, web};
use log::error;
use serde::Deserialize;

use crate::db::DbPool;
use crate::dto::campaigns::MutationResponse;
use crate::models::auth::AuthenticatedUser;
use crate::repository::campaign::DieselCampaignRepository;
use crate::routes::error_response;
use crate::services::ServiceError;
use crate::services::campaigns as campaign_services;

#[get("/v1/campaigns")]
pub async fn api_v1_campaigns(
    user: AuthenticatedUser,
    pool: web::Data<DbPool>,
) -> impl Responder {
    let repo = DieselCampaignRepository::new(&pool);

    match campaign_services::list_campaigns(&repo, &user) {
        Ok(campaigns) => HttpResponse::Ok().json(campaigns),
        Err(e) => error_response(e, "list campaigns"),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ToggleCampaignPayload {
    current_status: String,
}

#[post("/v1/campaigns/{campaign_id}/status")]
pub async fn api_v1_toggle_campaign_status(
    path: web::Path<String>,
    payload: web::Json<ToggleCampaignPayload>,
    user: AuthenticatedUser,
    pool: web::Data<DbPool>,
) -> impl Responder {
    let campaign_id = path.into_inner();
    let repo = DieselCampaignRepository::new(&pool);

    match campaign_services::toggle_campaign_status(
        &repo,
        &user,
        &campaign_id,
        &payload.current_status,
    ) {
        Ok(_) => HttpResponse::Ok().json(MutationResponse::ok()),
        Err(e @ (ServiceError::StoreUnavailable(_) | ServiceError::Internal(_))) => {
            error!("toggle campaign status: {e}");
            HttpResponse::InternalServerError()
                .json(MutationResponse::failed("Failed to update campaign status."))
        }
        Err(e) => error_response(e, "toggle campaign status"),
    }
}

#[delete("/v1/campaigns/{campaign_id}")]
pub async fn api_v1_delete_campaign(
    path: web::Path<String>,
    user: AuthenticatedUser,
    pool: web::Data<DbPool>,
) -> impl Responder {
    let campaign_id = path.into_inner();
    let repo = DieselCampaignRepository::new(&pool);

    match campaign_services::delete_campaign(&repo, &user, &campaign_id) {
        Ok(_) => HttpResponse::Ok().json(MutationResponse::ok()),
        Err(e @ (ServiceError::StoreUnavailable(_) | ServiceError::Internal(_))) => {
            error!("delete campaign: {e}");
            HttpResponse::InternalServerError()
                .json(MutationResponse::failed("Failed to delete campaign."))
        }
        Err(e) => error_response(e, "delete campaign"),
    }
}
