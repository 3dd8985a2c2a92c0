//! Server-rendered HTML pages

pub mod catalog;
pub mod templates;

use axum::{
    http::Uri,
    response::{Html, IntoResponse, Response},
};

use crate::error::AppError;

pub use templates::Templates;

/// Error raised by an HTML page handler, answered as an HTML error page
#[derive(Debug)]
pub struct PageError(pub AppError);

impl From<AppError> for PageError {
    fn from(error: AppError) -> Self {
        PageError(error)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, _, message) = self.0.parts();
        let reason = status.canonical_reason().unwrap_or("Error");

        let body = format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>{code} {reason} | Local Library</title></head>\n<body>\n<h1>{code} {reason}</h1>\n<p>{message}</p>\n<p><a href=\"/catalog/\">Back to the catalog</a></p>\n</body>\n</html>\n",
            code = status.as_u16(),
            reason = reason,
            message = handlebars::html_escape(&message),
        );

        (status, Html(body)).into_response()
    }
}

pub type PageResult = Result<Html<String>, PageError>;

/// Fallback for paths that match no route
pub async fn not_found(uri: Uri) -> PageError {
    PageError(AppError::NotFound(format!("No page at {}", uri.path())))
}
