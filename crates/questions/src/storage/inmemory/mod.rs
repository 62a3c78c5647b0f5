//! In-memory storage backend, used by tests and local runs.

mod repository;

pub use repository::InMemoryQuestionRepository;
