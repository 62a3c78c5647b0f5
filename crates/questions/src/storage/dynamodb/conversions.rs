//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! the Question aggregate. Testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use chrono::NaiveDateTime;
use hexpolls_core::question::Question;
use hexpolls_core::storage::RepositoryError;
use uuid::Uuid;

use super::keys;

/// Discriminator value for Question records in the shared table.
pub const ENTITY_TYPE_QUESTION: &str = "QUESTION";

// Stored pub_date is ISO-8601 with microsecond precision and no timezone
// suffix, matching the naive-UTC semantics of the aggregate.
const PUB_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";
const PUB_DATE_PARSE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Serialize a publication date for storage.
pub fn format_pub_date(pub_date: NaiveDateTime) -> String {
    pub_date.format(PUB_DATE_FORMAT).to_string()
}

/// Parse a stored publication date.
///
/// Lenient: an unparsable value becomes `None` so read paths never fail on
/// a malformed record.
pub fn parse_pub_date(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, PUB_DATE_PARSE_FORMAT).ok()
}

/// Convert a Question to a DynamoDB item.
pub fn question_to_item(question: &Question) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    // Keys
    item.insert(
        "pk".to_string(),
        AttributeValue::S(keys::question_pk(question.id)),
    );
    item.insert(
        "sk".to_string(),
        AttributeValue::S(keys::question_sk(question.id)),
    );

    // Entity type
    item.insert(
        "entity_type".to_string(),
        AttributeValue::S(ENTITY_TYPE_QUESTION.to_string()),
    );

    // Data
    item.insert(
        "question_id".to_string(),
        AttributeValue::S(question.id.to_string()),
    );
    if let Some(text) = &question.question_text {
        item.insert("question_text".to_string(), AttributeValue::S(text.clone()));
    }
    if let Some(pub_date) = question.pub_date {
        item.insert(
            "pub_date".to_string(),
            AttributeValue::S(format_pub_date(pub_date)),
        );
    }

    item
}

/// Convert a DynamoDB item to a Question.
///
/// `question_id` is required; `question_text` and `pub_date` degrade to
/// `None` when missing or unparsable.
pub fn item_to_question(
    item: &HashMap<String, AttributeValue>,
) -> Result<Question, RepositoryError> {
    Ok(Question {
        id: get_uuid(item, "question_id")?,
        question_text: get_optional_string(item, "question_text"),
        pub_date: get_optional_string(item, "pub_date")
            .as_deref()
            .and_then(parse_pub_date),
    })
}

/// Get a required string attribute.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get an optional string attribute.
fn get_optional_string(item: &HashMap<String, AttributeValue>, key: &str) -> Option<String> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
}

/// Get a required UUID attribute.
fn get_uuid(item: &HashMap<String, AttributeValue>, key: &str) -> Result<Uuid, RepositoryError> {
    let s = get_string(item, key)?;
    Uuid::parse_str(&s)
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid UUID {}: {}", key, e)))
}
