//! Storage backend implementations.
//!
//! Concrete implementations of the repository capability traits defined in
//! `hexpolls_core::storage`, selected at compile time via feature flags:
//!
//! - `dynamodb` (default): single-table AWS DynamoDB backend
//! - `inmemory`: in-memory backend, always compiled for tests

#[cfg(not(any(feature = "dynamodb", feature = "inmemory", test)))]
compile_error!(
    "No storage backend selected. Enable 'dynamodb' or 'inmemory'. \
    Example: cargo build -p hexpolls_questions --features dynamodb"
);

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(any(test, feature = "inmemory"))]
pub mod inmemory;
