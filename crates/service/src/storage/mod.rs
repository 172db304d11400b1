//! Persistence gateway for the book collection.
//!
//! The whole collection is the unit of storage: `load` returns every record
//! and `save` replaces every record. Backends:
//! - [`JsonFileBookStore`]: a pretty-printed JSON array on disk
//! - [`InMemoryBookStore`]: a vector in memory, used by tests

pub mod json_file_store;
pub mod memory_store;

use async_trait::async_trait;

use crate::book::Book;
use crate::errors::ServiceError;

pub use json_file_store::JsonFileBookStore;
pub use memory_store::InMemoryBookStore;

/// Whole-collection storage for books.
/// Implementations may be file-backed, in-memory, or remote.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Read the full collection. Fails with `ServiceError::StorageRead`.
    async fn load(&self) -> Result<Vec<Book>, ServiceError>;
    /// Overwrite the full collection. Fails with `ServiceError::StorageWrite`.
    async fn save(&self, books: &[Book]) -> Result<(), ServiceError>;
}
