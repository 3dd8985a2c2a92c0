//! HTML catalog pages

use axum::{
    extract::{Path, Query, State},
    response::Html,
};
use serde_json::json;

use crate::{
    api::parse_id,
    models::pagination::{PageQuery, PageRequest},
    AppState,
};

use super::PageResult;

/// Home page with catalog counts
pub async fn index(State(state): State<AppState>) -> PageResult {
    let counts = state.services.catalog.counts().await?;
    let html = state.templates.render(
        "index",
        &json!({
            "title": "Home",
            "counts": counts,
        }),
    )?;
    Ok(Html(html))
}

/// Paginated list of books
pub async fn book_list(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> PageResult {
    let request = PageRequest::parse(query.page.as_deref())?;
    let page = state.services.catalog.list_books(request).await?;
    let html = state.templates.render(
        "book_list",
        &json!({
            "title": "Books",
            "page": page,
        }),
    )?;
    Ok(Html(html))
}

/// Single book with its copies
pub async fn book_detail(State(state): State<AppState>, Path(id): Path<String>) -> PageResult {
    let id = parse_id(&id, "Book")?;
    let book = state.services.catalog.get_book(id).await?;
    let author_name = book.author.as_ref().map(|a| a.display_name());
    let html = state.templates.render(
        "book_detail",
        &json!({
            "title": book.book.title,
            "author_name": author_name,
            "genre_names": book.genre_names(),
            "book": book,
        }),
    )?;
    Ok(Html(html))
}

/// Paginated list of authors
pub async fn author_list(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> PageResult {
    let request = PageRequest::parse(query.page.as_deref())?;
    let page = state.services.catalog.list_authors(request).await?;
    let authors: Vec<_> = page
        .items
        .iter()
        .map(|a| {
            json!({
                "id": a.id,
                "name": a.display_name(),
                "lifespan": a.lifespan(),
            })
        })
        .collect();
    let html = state.templates.render(
        "author_list",
        &json!({
            "title": "Authors",
            "authors": authors,
            "page": page,
        }),
    )?;
    Ok(Html(html))
}

/// Single author with their books
pub async fn author_detail(State(state): State<AppState>, Path(id): Path<String>) -> PageResult {
    let id = parse_id(&id, "Author")?;
    let author = state.services.catalog.get_author(id).await?;
    let name = author.author.display_name();
    let html = state.templates.render(
        "author_detail",
        &json!({
            "title": name,
            "name": name,
            "lifespan": author.author.lifespan(),
            "author": author,
        }),
    )?;
    Ok(Html(html))
}
