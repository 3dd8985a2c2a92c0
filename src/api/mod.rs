//! API handlers for the LocalLibrary JSON endpoints

pub mod authors;
pub mod books;
pub mod catalog;
pub mod health;
pub mod openapi;

use crate::error::{AppError, AppResult};

/// Parse a primary key taken from the URL path.
///
/// Only plain decimal digits name a record; anything else (signs, spaces,
/// overflow) is reported as not found.
pub fn parse_id(raw: &str, entity: &str) -> AppResult<i32> {
    let not_found = || AppError::NotFound(format!("{} {} not found", entity, raw));

    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(not_found());
    }
    raw.parse::<i32>().map_err(|_| not_found())
}
