//! Shared building blocks for the libros workspace: wire types and logging
//! setup.

pub mod types;
pub mod utils;
