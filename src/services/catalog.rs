//! Catalog browsing service

use chrono::Utc;

use crate::{
    error::AppResult,
    models::{
        author::{Author, AuthorDetail},
        book::{BookDetail, BookSummary},
        book_instance::{BookCopy, LoanStatus},
        catalog::CatalogCounts,
        pagination::{PageInfo, PageRequest, Paginated, PAGE_SIZE},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Aggregate counts for the home page
    pub async fn counts(&self) -> AppResult<CatalogCounts> {
        let (num_books, num_instances, num_instances_available, num_authors) = tokio::try_join!(
            self.repository.books.count(),
            self.repository.book_instances.count(),
            self.repository
                .book_instances
                .count_with_status(LoanStatus::Available),
            self.repository.authors.count(),
        )?;

        Ok(CatalogCounts {
            num_books,
            num_instances,
            num_instances_available,
            num_authors,
        })
    }

    /// One page of the book list
    pub async fn list_books(&self, request: PageRequest) -> AppResult<Paginated<BookSummary>> {
        let total = self.repository.books.count().await?;
        let info = PageInfo::resolve(request, total, PAGE_SIZE)?;
        let books = self
            .repository
            .books
            .list(info.limit(), info.offset())
            .await?;
        Ok(Paginated::new(books, info))
    }

    /// Book with author, genres and copies
    pub async fn get_book(&self, id: i32) -> AppResult<BookDetail> {
        let book = self.repository.books.get_by_id(id).await?;

        let author = match book.author_id {
            Some(author_id) => self.repository.authors.find_by_id(author_id).await?,
            None => None,
        };
        let genres = self.repository.genres.list_by_book(id).await?;

        let today = Utc::now().date_naive();
        let copies = self
            .repository
            .book_instances
            .list_by_book(id)
            .await?
            .into_iter()
            .map(|instance| BookCopy::from_instance(instance, today))
            .collect();

        Ok(BookDetail {
            book,
            author,
            genres,
            copies,
        })
    }

    /// One page of the author list
    pub async fn list_authors(&self, request: PageRequest) -> AppResult<Paginated<Author>> {
        let total = self.repository.authors.count().await?;
        let info = PageInfo::resolve(request, total, PAGE_SIZE)?;
        let authors = self
            .repository
            .authors
            .list(info.limit(), info.offset())
            .await?;
        Ok(Paginated::new(authors, info))
    }

    /// Author with the books they wrote
    pub async fn get_author(&self, id: i32) -> AppResult<AuthorDetail> {
        let author = self.repository.authors.get_by_id(id).await?;
        let books = self.repository.books.list_by_author(id).await?;
        Ok(AuthorDetail { author, books })
    }
}
