use std::sync::Arc;

use actix_cors::Cors;
use actix_identity::IdentityMiddleware;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware, web};

use crate::db::establish_connection_pool;
use crate::domain::enrichment::{LeadEnricher, StaticProfileEnricher};
use crate::models::config::ServerConfig;
use crate::routes::campaigns::{
    api_v1_campaigns, api_v1_delete_campaign, api_v1_toggle_campaign_status,
};
use crate::routes::dashboard::api_v1_dashboard;
use crate::routes::leads::{api_v1_delete_lead, api_v1_leads, api_v1_set_lead_status};
use crate::routes::logout;

pub mod db;
pub mod domain;
pub mod dto;
pub mod listing;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Establish Diesel connection pool for the SQLite database.
    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    // Key for the identity cookie.
    let secret_key = Key::from(server_config.secret.as_bytes());

    let enricher: Arc<dyn LeadEnricher> = Arc::new(StaticProfileEnricher);

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .cookie_domain(Some(format!(".{}", server_config.domain)))
                    .build(),
            )
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(
                web::scope("/api")
                    .service(api_v1_dashboard)
                    .service(api_v1_leads)
                    .service(api_v1_set_lead_status)
                    .service(api_v1_delete_lead)
                    .service(api_v1_campaigns)
                    .service(api_v1_toggle_campaign_status)
                    .service(api_v1_delete_campaign),
            )
            .service(web::scope("/auth").service(logout))
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::from(enricher.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
