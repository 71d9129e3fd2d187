//! Resolved tenant identity.
//!
//! Authentication happens at an external identity provider which issues a
//! JWT signed with the shared secret. This module only verifies and consumes
//! that token: from the `actix-identity` cookie for browser sessions, or from
//! an `Authorization: Bearer` header for API clients.

use actix_identity::Identity;
use actix_web::dev::Payload;
use actix_web::error::{ErrorInternalServerError, ErrorUnauthorized};
use actix_web::http::header;
use actix_web::{Error, FromRequest, HttpRequest, web};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::models::config::ServerConfig;

/// JWT claims identifying the tenant behind a request.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// Tenant identifier; every query and mutation is scoped by it.
    pub sub: String,
    pub email: String,
    pub name: String,
    pub exp: usize,
}

impl AuthenticatedUser {
    pub fn from_jwt(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        let data = decode::<AuthenticatedUser>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(data.claims)
    }

    pub fn to_jwt(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }
}

fn bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::to_string)
}

fn resolve_user(req: &HttpRequest) -> Result<AuthenticatedUser, Error> {
    let config = req
        .app_data::<web::Data<ServerConfig>>()
        .ok_or_else(|| ErrorInternalServerError("server configuration missing"))?;

    let token = Identity::extract(req)
        .into_inner()
        .ok()
        .and_then(|identity| identity.id().ok())
        .or_else(|| bearer_token(req))
        .ok_or_else(|| ErrorUnauthorized("Unauthorized"))?;

    AuthenticatedUser::from_jwt(&token, &config.secret).map_err(|e| {
        log::debug!("Rejected identity token: {e}");
        ErrorUnauthorized("Unauthorized")
    })
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = std::future::Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        std::future::ready(resolve_user(req))
    }
}
