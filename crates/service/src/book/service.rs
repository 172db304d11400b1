use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{error, info, instrument};

use super::{id, validation, Book};
use crate::errors::ServiceError;
use crate::storage::BookRepository;

/// Book operations over an injected repository.
///
/// Every call loads the full collection; mutations save it back in full.
/// Read-modify-write cycles are serialized through `write_gate` so two
/// concurrent creates or deletes cannot overwrite each other's result.
pub struct BookService {
    repo: Arc<dyn BookRepository>,
    write_gate: RwLock<()>,
}

impl BookService {
    pub fn new(repo: Arc<dyn BookRepository>) -> Self {
        Self { repo, write_gate: RwLock::new(()) }
    }

    /// The whole collection in insertion order.
    pub async fn list(&self) -> Result<Vec<Book>, ServiceError> {
        let _read = self.write_gate.read().await;
        self.load().await
    }

    /// Fetch by id. Malformed ids fail with `InvalidId` before any I/O.
    pub async fn get(&self, book_id: &str) -> Result<Book, ServiceError> {
        if !id::is_valid_id(book_id) {
            return Err(ServiceError::InvalidId);
        }
        let _read = self.write_gate.read().await;
        self.load()
            .await?
            .into_iter()
            .find(|b| b.id == book_id)
            .ok_or(ServiceError::NotFound)
    }

    /// Validate `payload`, reject title/year duplicates, then append and persist.
    #[instrument(skip_all)]
    pub async fn create(&self, payload: &Value) -> Result<Book, ServiceError> {
        let new_book = validation::validate_new_book(payload)?;

        let _write = self.write_gate.write().await;
        let mut books = self.load().await?;
        if books.iter().any(|b| new_book.collides_with(b)) {
            info!(title = %new_book.title, year = ?new_book.year, "duplicate book rejected");
            return Err(ServiceError::Duplicate);
        }

        let book = new_book.into_book(id::new_id());
        books.push(book.clone());
        self.save(&books).await?;
        info!(id = %book.id, title = %book.title, total = books.len(), "book created");
        Ok(book)
    }

    /// Remove the first book with this id and persist; returns the removed book.
    #[instrument(skip(self))]
    pub async fn delete(&self, book_id: &str) -> Result<Book, ServiceError> {
        if !id::is_valid_id(book_id) {
            return Err(ServiceError::InvalidId);
        }

        let _write = self.write_gate.write().await;
        let mut books = self.load().await?;
        let index = books
            .iter()
            .position(|b| b.id == book_id)
            .ok_or(ServiceError::NotFound)?;
        let removed = books.remove(index);
        self.save(&books).await?;
        info!(id = %removed.id, total = books.len(), "book deleted");
        Ok(removed)
    }

    async fn load(&self) -> Result<Vec<Book>, ServiceError> {
        self.repo.load().await.map_err(|e| {
            error!(error = %e, detail = e.detail().unwrap_or_default(), "book storage read failed");
            e
        })
    }

    async fn save(&self, books: &[Book]) -> Result<(), ServiceError> {
        self.repo.save(books).await.map_err(|e| {
            error!(error = %e, detail = e.detail().unwrap_or_default(), "book storage write failed");
            e
        })
    }
}
