//! LocalLibrary catalog server
//!
//! A small library catalog: a home page with record counts, and paginated
//! list and detail pages for books and authors, served both as HTML and as
//! a JSON API.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;
pub mod web;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use routes::create_router;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
    pub templates: Arc<web::Templates>,
}
