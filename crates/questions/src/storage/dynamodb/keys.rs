//! DynamoDB key generation functions.
//!
//! Pure functions for generating partition and sort keys following the
//! single-table design. All functions are sync and have no side effects.

use uuid::Uuid;

/// Partition key prefix for Question records.
pub const QUESTION_PREFIX: &str = "QUESTION#";

/// Sort key prefix for the question's own record. Reserved so future
/// related records (e.g. choices) can share the partition under different
/// sort-key prefixes without a schema migration.
pub const INFO_PREFIX: &str = "INFO#";

/// Generate partition key for a Question.
///
/// Pattern: `QUESTION#<question_id>`
pub fn question_pk(question_id: Uuid) -> String {
    format!("{QUESTION_PREFIX}{question_id}")
}

/// Generate sort key for a Question.
///
/// Pattern: `INFO#<question_id>`
pub fn question_sk(question_id: Uuid) -> String {
    format!("{INFO_PREFIX}{question_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_pk() {
        let id = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440001").unwrap();
        assert_eq!(
            question_pk(id),
            "QUESTION#550e8400-e29b-41d4-a716-446655440001"
        );
    }

    #[test]
    fn test_question_sk() {
        let id = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440001").unwrap();
        assert_eq!(question_sk(id), "INFO#550e8400-e29b-41d4-a716-446655440001");
    }

    #[test]
    fn test_keys_derive_from_id_alone() {
        let id = Uuid::new_v4();
        assert_eq!(question_pk(id), question_pk(id));
        assert_eq!(question_sk(id), question_sk(id));
    }
}
