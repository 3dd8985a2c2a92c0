//! Data models for the library catalog

pub mod author;
pub mod book;
pub mod book_instance;
pub mod catalog;
pub mod genre;
pub mod pagination;

// Re-export commonly used types
pub use author::{Author, AuthorDetail};
pub use book::{Book, BookDetail, BookSummary};
pub use book_instance::{BookCopy, BookInstance, LoanStatus};
pub use catalog::CatalogCounts;
pub use genre::Genre;
pub use pagination::{PageInfo, PageQuery, PageRequest, Paginated, PAGE_SIZE};
