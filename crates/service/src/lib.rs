//! Service layer for the book collection.
//! - `storage`: the persistence gateway trait and its file/in-memory backends.
//! - `book`: the record type, identifier and request validation, and the
//!   orchestrating `BookService`.
//! - `errors`: the failure taxonomy surfaced to the HTTP layer.

pub mod errors;
pub mod storage;
pub mod book;

pub use book::{Book, BookService, NewBook};
pub use errors::ServiceError;
