//! Database models and infrastructure types shared across the repository.

pub mod auth;
pub mod campaign;
pub mod config;
pub mod lead;
pub mod user;
