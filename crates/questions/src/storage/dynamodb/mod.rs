//! DynamoDB storage backend.
//!
//! Single-table design: every poll entity lives in one table, keyed by a
//! `pk`/`sk` prefix pair and disambiguated by an `entity_type` attribute.

mod conversions;
mod error;
mod keys;
mod repository;

pub use repository::DynamoQuestionRepository;
