use async_trait::async_trait;
use uuid::Uuid;

use crate::question::Question;

use super::Result;

/// Default number of questions returned by [`QuestionStore::get_recent`].
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// The read/create capability for questions.
///
/// This is the narrow contract the use-cases consume. Adapters that only
/// serve creation and listing implement this trait alone and never see the
/// mutation surface of [`QuestionCrud`].
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// Creates a new question, generating its ID and publication date.
    ///
    /// Every call creates a distinct record, even with identical text; the
    /// caller is responsible for `question_text` being non-empty.
    async fn create(&self, question_text: String) -> Result<Question>;

    /// Gets a question by its ID.
    ///
    /// A miss is an absent result, never an error.
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Question>>;

    /// Gets the `limit` most recent questions, `pub_date` descending.
    async fn get_recent(&self, limit: usize) -> Result<Vec<Question>>;
}

/// The full five-operation repository contract.
///
/// Kept for interface uniformity with other aggregate types. The question
/// adapters implement it but reject the three operations below with
/// [`RepositoryError::OperationNotPermitted`]; mutation and unbounded reads
/// belong to a different capability implementation.
///
/// [`RepositoryError::OperationNotPermitted`]: super::RepositoryError::OperationNotPermitted
#[async_trait]
pub trait QuestionCrud: QuestionStore {
    /// Gets every stored question, without a limit.
    async fn get_all(&self) -> Result<Vec<Question>>;

    /// Updates an existing question.
    async fn update(&self, question: &Question) -> Result<Question>;

    /// Deletes a question by its ID.
    async fn delete(&self, id: Uuid) -> Result<()>;
}
