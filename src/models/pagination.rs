//! Page-number pagination for list views.
//!
//! Lists are split into fixed pages of [`PAGE_SIZE`] rows. The requested page
//! comes from the `page` query parameter, which accepts a 1-based number or
//! the literal `last`. Anything that does not name an existing page is
//! reported as [`AppError::NotFound`]. An empty listing still has one (empty)
//! first page.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::{AppError, AppResult},
    models::{author::Author, book::BookSummary},
};

/// Number of rows shown per list page
pub const PAGE_SIZE: i64 = 10;

/// Query string of paginated list endpoints
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Page number (1-based) or `last`
    pub page: Option<String>,
}

/// Requested page, before it is checked against the row count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    Number(i64),
    Last,
}

impl PageRequest {
    /// Parse the raw `page` parameter. A missing or empty value means page 1.
    ///
    /// Only the exact literal `last` or plain decimal digits are accepted.
    pub fn parse(raw: Option<&str>) -> AppResult<Self> {
        let raw = match raw {
            None | Some("") => return Ok(PageRequest::Number(1)),
            Some(raw) => raw,
        };

        if raw == "last" {
            return Ok(PageRequest::Last);
        }

        let invalid = || AppError::NotFound(format!("Invalid page ({})", raw));
        if !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        raw.parse::<i64>().map(PageRequest::Number).map_err(|_| invalid())
    }
}

/// Position of one page within a listing of `total` rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub number: i64,
    pub per_page: i64,
    pub total: i64,
    pub num_pages: i64,
}

impl PageInfo {
    /// Resolve a request against a row count
    pub fn resolve(request: PageRequest, total: i64, per_page: i64) -> AppResult<Self> {
        let num_pages = Self::page_count(total, per_page);

        let number = match request {
            PageRequest::Last => num_pages,
            PageRequest::Number(n) if n < 1 => {
                return Err(AppError::NotFound(format!(
                    "Invalid page ({}): that page number is less than 1",
                    n
                )));
            }
            PageRequest::Number(n) if n > num_pages => {
                return Err(AppError::NotFound(format!(
                    "Invalid page ({}): that page contains no results",
                    n
                )));
            }
            PageRequest::Number(n) => n,
        };

        Ok(Self {
            number,
            per_page,
            total,
            num_pages,
        })
    }

    fn page_count(total: i64, per_page: i64) -> i64 {
        if total <= 0 {
            1
        } else {
            (total + per_page - 1) / per_page
        }
    }

    /// SQL `OFFSET` of the first row on this page
    pub fn offset(&self) -> i64 {
        (self.number - 1) * self.per_page
    }

    /// SQL `LIMIT` for this page
    pub fn limit(&self) -> i64 {
        self.per_page
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.num_pages
    }

    pub fn previous_page(&self) -> Option<i64> {
        self.has_previous().then(|| self.number - 1)
    }

    pub fn next_page(&self) -> Option<i64> {
        self.has_next().then(|| self.number + 1)
    }
}

/// One page of a list, as sent to clients and templates
#[derive(Debug, Serialize, ToSchema)]
#[aliases(BookPage = Paginated<BookSummary>, AuthorPage = Paginated<Author>)]
pub struct Paginated<T>
where
    T: for<'a> ToSchema<'a>,
{
    /// Rows on this page
    pub items: Vec<T>,
    /// Total number of rows across all pages
    pub total: i64,
    /// Current page number (1-based)
    pub page: i64,
    /// Rows per page
    pub per_page: i64,
    /// Number of pages
    pub num_pages: i64,
    /// Whether there is more than one page
    pub is_paginated: bool,
    pub has_previous: bool,
    pub has_next: bool,
    pub previous_page: Option<i64>,
    pub next_page: Option<i64>,
}

impl<T> Paginated<T>
where
    T: for<'a> ToSchema<'a>,
{
    pub fn new(items: Vec<T>, info: PageInfo) -> Self {
        Self {
            items,
            total: info.total,
            page: info.number,
            per_page: info.per_page,
            num_pages: info.num_pages,
            is_paginated: info.num_pages > 1,
            has_previous: info.has_previous(),
            has_next: info.has_next(),
            previous_page: info.previous_page(),
            next_page: info.next_page(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page() {
        assert_eq!(PageRequest::parse(None).unwrap(), PageRequest::Number(1));
        assert_eq!(PageRequest::parse(Some("")).unwrap(), PageRequest::Number(1));
        assert_eq!(PageRequest::parse(Some("3")).unwrap(), PageRequest::Number(3));
        assert_eq!(PageRequest::parse(Some("last")).unwrap(), PageRequest::Last);
        assert!(matches!(PageRequest::parse(Some("abc")), Err(AppError::NotFound(_))));
        assert!(matches!(PageRequest::parse(Some("1.5")), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_parse_page_is_strict() {
        for raw in [" last ", "Last", "+2", " 2", "-1"] {
            assert!(
                matches!(PageRequest::parse(Some(raw)), Err(AppError::NotFound(_))),
                "{:?} should not name a page",
                raw
            );
        }
    }

    #[test]
    fn test_page_count() {
        let info = PageInfo::resolve(PageRequest::Number(1), 0, PAGE_SIZE).unwrap();
        assert_eq!(info.num_pages, 1);

        let info = PageInfo::resolve(PageRequest::Number(1), 10, PAGE_SIZE).unwrap();
        assert_eq!(info.num_pages, 1);

        let info = PageInfo::resolve(PageRequest::Number(1), 11, PAGE_SIZE).unwrap();
        assert_eq!(info.num_pages, 2);
    }

    #[test]
    fn test_out_of_range_pages_are_not_found() {
        assert!(matches!(
            PageInfo::resolve(PageRequest::Number(0), 25, PAGE_SIZE),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            PageInfo::resolve(PageRequest::Number(4), 25, PAGE_SIZE),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            PageInfo::resolve(PageRequest::Number(2), 0, PAGE_SIZE),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_last_page() {
        let info = PageInfo::resolve(PageRequest::Last, 25, PAGE_SIZE).unwrap();
        assert_eq!(info.number, 3);
        assert_eq!(info.offset(), 20);
        assert_eq!(info.limit(), 10);
        assert!(info.has_previous());
        assert!(!info.has_next());
        assert_eq!(info.previous_page(), Some(2));
        assert_eq!(info.next_page(), None);
    }

    #[test]
    fn test_middle_page_navigation() {
        let info = PageInfo::resolve(PageRequest::Number(2), 25, PAGE_SIZE).unwrap();
        assert_eq!(info.offset(), 10);
        assert_eq!(info.previous_page(), Some(1));
        assert_eq!(info.next_page(), Some(3));

        let page = Paginated::<Author>::new(Vec::new(), info);
        assert!(page.is_paginated);
        assert_eq!(page.page, 2);
        assert_eq!(page.num_pages, 3);
    }
}
