//! Author endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::{
    error::AppResult,
    models::{
        author::AuthorDetail,
        pagination::{AuthorPage, PageQuery, PageRequest},
    },
};

use super::parse_id;

/// List authors, 10 per page
#[utoipa::path(
    get,
    path = "/authors",
    tag = "authors",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of authors", body = AuthorPage),
        (status = 404, description = "No such page", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_authors(
    State(state): State<crate::AppState>,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<AuthorPage>> {
    let request = PageRequest::parse(query.page.as_deref())?;
    let page = state.services.catalog.list_authors(request).await?;
    Ok(Json(page))
}

/// Get author details by ID
#[utoipa::path(
    get,
    path = "/authors/{id}",
    tag = "authors",
    params(
        ("id" = i32, Path, description = "Author ID")
    ),
    responses(
        (status = 200, description = "Author and their books", body = AuthorDetail),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_author(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<AuthorDetail>> {
    let id = parse_id(&id, "Author")?;
    let author = state.services.catalog.get_author(id).await?;
    Ok(Json(author))
}
