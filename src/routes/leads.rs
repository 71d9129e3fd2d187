use actix_web::{HttpResponse, Responder, delete, get, post, web};
use log::error;
use serde::Deserialize;
use validator::Validate;

use crate::db::DbPool;
use crate::domain::enrichment::LeadEnricher;
use crate::dto::campaigns::MutationResponse;
use crate::dto::leads::LeadsQuery;
use crate::models::auth::AuthenticatedUser;
use crate::repository::lead::DieselLeadRepository;
use crate::routes::error_response;
use crate::services::ServiceError;
use crate::services::leads as lead_services;

#[derive(Debug, Deserialize, Validate)]
struct LeadsQueryParams {
    search: Option<String>,
    cursor: Option<String>,
    #[validate(range(min = 1, max = 100))]
    limit: Option<i64>,
}

#[get("/v1/leads")]
pub async fn api_v1_leads(
    params: web::Query<LeadsQueryParams>,
    user: AuthenticatedUser,
    pool: web::Data<DbPool>,
    enricher: web::Data<dyn LeadEnricher>,
) -> impl Responder {
    let params = params.into_inner();
    if let Err(e) = params.validate() {
        return error_response(ServiceError::Validation(e.to_string()), "list leads");
    }

    let repo = DieselLeadRepository::new(&pool);
    let query = LeadsQuery {
        search: params.search,
        cursor: params.cursor,
        limit: params.limit,
    };

    match lead_services::list_leads(&repo, enricher.as_ref(), &user, query) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(e) => error_response(e, "list leads"),
    }
}

#[derive(Debug, Deserialize)]
struct SetLeadStatusPayload {
    status: String,
}

#[post("/v1/leads/{lead_id}/status")]
pub async fn api_v1_set_lead_status(
    path: web::Path<String>,
    payload: web::Json<SetLeadStatusPayload>,
    user: AuthenticatedUser,
    pool: web::Data<DbPool>,
) -> impl Responder {
    let lead_id = path.into_inner();
    let repo = DieselLeadRepository::new(&pool);

    match lead_services::set_lead_status(&repo, &user, &lead_id, &payload.status) {
        Ok(_) => HttpResponse::Ok().json(MutationResponse::ok()),
        Err(e @ (ServiceError::StoreUnavailable(_) | ServiceError::Internal(_))) => {
            error!("set lead status: {e}");
            HttpResponse::InternalServerError()
                .json(MutationResponse::failed("Failed to update lead status."))
        }
        Err(e) => error_response(e, "set lead status"),
    }
}

#[delete("/v1/leads/{lead_id}")]
pub async fn api_v1_delete_lead(
    path: web::Path<String>,
    user: AuthenticatedUser,
    pool: web::Data<DbPool>,
) -> impl Responder {
    let lead_id = path.into_inner();
    let repo = DieselLeadRepository::new(&pool);

    match lead_services::delete_lead(&repo, &user, &lead_id) {
        Ok(_) => HttpResponse::Ok().json(MutationResponse::ok()),
        Err(e @ (ServiceError::StoreUnavailable(_) | ServiceError::Internal(_))) => {
            error!("delete lead: {e}");
            HttpResponse::InternalServerError()
                .json(MutationResponse::failed("Failed to delete lead."))
        }
        Err(e) => error_response(e, "delete lead"),
    }
}
