use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A poll question, the single aggregate this service manages.
///
/// `pub_date` carries timezone-naive UTC semantics and is stamped exactly
/// once, at creation. It is optional because stored records with a missing
/// or unparsable value must still round-trip through read paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: Uuid,
    pub question_text: Option<String>,
    pub pub_date: Option<NaiveDateTime>,
}

impl Question {
    /// Creates a new question with a fresh ID and the current UTC time.
    ///
    /// The ID is never supplied by callers; it is generated here, exactly
    /// once per question.
    pub fn new(question_text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            question_text: Some(question_text.into()),
            pub_date: Some(Utc::now().naive_utc()),
        }
    }

    /// Sets a specific ID for this question (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Sets a specific publication date (useful for testing).
    pub fn with_pub_date(mut self, pub_date: NaiveDateTime) -> Self {
        self.pub_date = Some(pub_date);
        self
    }
}
