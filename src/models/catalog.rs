//! Catalog-wide aggregates

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Counts shown on the home page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CatalogCounts {
    /// Number of books (titles)
    pub num_books: i64,
    /// Number of physical copies
    pub num_instances: i64,
    /// Copies whose status is "a" (available)
    pub num_instances_available: i64,
    /// Number of authors
    pub num_authors: i64,
}
