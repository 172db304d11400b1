use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::BookRepository;
use crate::book::Book;
use crate::errors::ServiceError;

/// In-memory book collection. `fail_reads` / `fail_writes` switch the store
/// into returning storage errors so failure paths can be exercised.
#[derive(Debug, Default)]
pub struct InMemoryBookStore {
    books: RwLock<Vec<Book>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl InMemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_books(books: Vec<Book>) -> Self {
        Self { books: RwLock::new(books), ..Self::default() }
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Current contents, bypassing the failure switches.
    pub async fn snapshot(&self) -> Vec<Book> {
        self.books.read().await.clone()
    }
}

#[async_trait]
impl BookRepository for InMemoryBookStore {
    async fn load(&self) -> Result<Vec<Book>, ServiceError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(ServiceError::read("in-memory store set to fail reads"));
        }
        Ok(self.books.read().await.clone())
    }

    async fn save(&self, books: &[Book]) -> Result<(), ServiceError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(ServiceError::write("in-memory store set to fail writes"));
        }
        *self.books.write().await = books.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_replaces_whole_collection() -> Result<(), ServiceError> {
        let store = InMemoryBookStore::new();
        assert!(store.load().await?.is_empty());

        let a = Book { id: "a".into(), title: "A".into(), author: "X".into(), year: None };
        let b = Book { id: "b".into(), title: "B".into(), author: "Y".into(), year: Some(2000) };
        store.save(&[a.clone(), b.clone()]).await?;
        assert_eq!(store.load().await?, vec![a.clone(), b]);

        store.save(&[a.clone()]).await?;
        assert_eq!(store.snapshot().await, vec![a]);
        Ok(())
    }

    #[tokio::test]
    async fn failure_switches() {
        let store = InMemoryBookStore::new();
        store.fail_reads(true);
        assert!(matches!(store.load().await, Err(ServiceError::StorageRead { .. })));
        store.fail_reads(false);
        assert!(store.load().await.is_ok());

        store.fail_writes(true);
        assert!(matches!(store.save(&[]).await, Err(ServiceError::StorageWrite { .. })));
    }
}
