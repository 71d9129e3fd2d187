//! HTTP surface. Handlers stay thin: resolve the tenant, build a repository
//! over the pool, call the service, translate the outcome.

use actix_identity::Identity;
use actix_web::{HttpResponse, Responder, get};
use log::error;
use serde_json::json;

use crate::services::ServiceError;

pub mod campaigns;
pub mod dashboard;
pub mod leads;

/// Maps a service failure onto the wire. `context` names the operation for
/// the server log; clients get a stable error envelope and nothing internal.
pub fn error_response(err: ServiceError, context: &str) -> HttpResponse {
    match err {
        ServiceError::Unauthorized => {
            HttpResponse::Unauthorized().json(json!({"error": "Unauthorized"}))
        }
        ServiceError::Validation(message) => {
            HttpResponse::BadRequest().json(json!({"error": message}))
        }
        ServiceError::NotFound => HttpResponse::NotFound().json(json!({"error": "Not found"})),
        ServiceError::StoreUnavailable(_) | ServiceError::Internal(_) => {
            error!("{context}: {err}");
            HttpResponse::InternalServerError().json(json!({"error": "Internal server error"}))
        }
    }
}

#[get("/logout")]
pub async fn logout(user: Identity) -> impl Responder {
    user.logout();
    HttpResponse::NoContent().finish()
}
