//! Shared helpers for the HTTP tests

use std::sync::Arc;

use axum_test::TestServer;
use locallibrary_server::{
    create_router, repository::Repository, services::Services, web::Templates, AppState,
};
use sqlx::PgPool;

/// Build a test server over the full router, backed by the given pool
pub fn test_server(pool: PgPool) -> TestServer {
    let state = AppState {
        services: Arc::new(Services::new(Repository::new(pool))),
        templates: Arc::new(Templates::new().unwrap()),
    };
    TestServer::new(create_router(state)).unwrap()
}
