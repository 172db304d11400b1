use std::sync::Arc;

use service::storage::BookRepository;
use service::BookService;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub books: Arc<BookService>,
    /// Put the underlying detail into 500 bodies (development mode only).
    pub expose_errors: bool,
}

impl AppState {
    pub fn new(repo: Arc<dyn BookRepository>, expose_errors: bool) -> Self {
        Self { books: Arc::new(BookService::new(repo)), expose_errors }
    }
}
