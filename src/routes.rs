//! Application router

use axum::{response::Redirect, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{api, web, AppState};

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Catalog summary
        .route("/catalog/counts", get(api::catalog::get_counts))
        // Books
        .route("/books", get(api::books::list_books))
        .route("/books/:id", get(api::books::get_book))
        // Authors
        .route("/authors", get(api::authors::list_authors))
        .route("/authors/:id", get(api::authors::get_author))
        .layer(cors)
        .with_state(state.clone());

    // HTML pages
    let pages = Router::new()
        .route("/", get(|| async { Redirect::to("/catalog/") }))
        .route("/catalog", get(|| async { Redirect::to("/catalog/") }))
        .route("/catalog/", get(web::catalog::index))
        .route("/catalog/books", get(|| async { Redirect::to("/catalog/books/") }))
        .route("/catalog/books/", get(web::catalog::book_list))
        .route("/catalog/book/:id", get(web::catalog::book_detail))
        .route("/catalog/authors", get(|| async { Redirect::to("/catalog/authors/") }))
        .route("/catalog/authors/", get(web::catalog::author_list))
        .route("/catalog/author/:id", get(web::catalog::author_detail))
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(pages)
        .merge(openapi)
        .fallback(web::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new()),
        )
}
