//! Catalog summary endpoint

use axum::{extract::State, Json};

use crate::{error::AppResult, models::catalog::CatalogCounts};

/// Counts of books, copies, available copies and authors
#[utoipa::path(
    get,
    path = "/catalog/counts",
    tag = "catalog",
    responses(
        (status = 200, description = "Catalog counts", body = CatalogCounts)
    )
)]
pub async fn get_counts(State(state): State<crate::AppState>) -> AppResult<Json<CatalogCounts>> {
    let counts = state.services.catalog.counts().await?;
    Ok(Json(counts))
}
