//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{authors, books, catalog, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "LocalLibrary API",
        version = "0.1.0",
        description = "Read-only library catalog API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Catalog
        catalog::get_counts,
        // Books
        books::list_books,
        books::get_book,
        // Authors
        authors::list_authors,
        authors::get_author,
    ),
    components(
        schemas(
            crate::models::catalog::CatalogCounts,
            crate::models::book::Book,
            crate::models::book::BookSummary,
            crate::models::book::BookDetail,
            crate::models::book_instance::BookCopy,
            crate::models::book_instance::LoanStatus,
            crate::models::genre::Genre,
            crate::models::author::Author,
            crate::models::author::AuthorDetail,
            crate::models::pagination::BookPage,
            crate::models::pagination::AuthorPage,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "catalog", description = "Catalog summary"),
        (name = "books", description = "Books"),
        (name = "authors", description = "Authors")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
