use actix_web::{HttpResponse, Responder, get, web};

use crate::db::DbPool;
use crate::domain::enrichment::LeadEnricher;
use crate::models::auth::AuthenticatedUser;
use crate::repository::campaign::DieselCampaignRepository;
use crate::repository::lead::DieselLeadRepository;
use crate::routes::error_response;
use crate::services::dashboard as dashboard_services;

#[get("/v1/dashboard")]
pub async fn api_v1_dashboard(
    user: AuthenticatedUser,
    pool: web::Data<DbPool>,
    enricher: web::Data<dyn LeadEnricher>,
) -> impl Responder {
    let lead_repo = DieselLeadRepository::new(&pool);
    let campaign_repo = DieselCampaignRepository::new(&pool);

    match dashboard_services::dashboard_data(&lead_repo, &campaign_repo, enricher.as_ref(), &user)
    {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(e) => error_response(e, "dashboard"),
    }
}
