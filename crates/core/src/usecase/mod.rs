//! Use-case orchestrators.
//!
//! Each use-case holds the narrow [`QuestionStore`] capability, invokes
//! exactly one repository operation, and returns its result unmodified.
//! No retries, no caching, no error translation: repository failures
//! propagate unchanged to the I/O boundary, which is the only layer that
//! classifies and renders them.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::question::{CreateQuestionRequest, Question};
use crate::storage::{QuestionStore, RepositoryError, Result};

/// The use-case executor capability: one operation, `execute`.
#[async_trait]
pub trait UseCase: Send + Sync {
    type Input: Send;
    type Output: Send;

    async fn execute(&self, input: Self::Input) -> Result<Self::Output>;
}

/// Creates a question from a transport DTO.
pub struct CreateQuestion {
    store: Arc<dyn QuestionStore>,
}

impl CreateQuestion {
    pub fn new(store: Arc<dyn QuestionStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UseCase for CreateQuestion {
    type Input = CreateQuestionRequest;
    type Output = Question;

    /// The boundary adapter never rejects a request body, so the required
    /// `question_text` field is checked here before the repository is
    /// asked to persist anything.
    async fn execute(&self, input: CreateQuestionRequest) -> Result<Question> {
        let question_text = input
            .question_text
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| {
                RepositoryError::InvalidData("question_text is required".to_string())
            })?;

        self.store.create(question_text).await
    }
}

/// Lists the most recent questions. Pure fetch-and-return.
pub struct GetRecentQuestions {
    store: Arc<dyn QuestionStore>,
}

impl GetRecentQuestions {
    pub fn new(store: Arc<dyn QuestionStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UseCase for GetRecentQuestions {
    type Input = usize;
    type Output = Vec<Question>;

    async fn execute(&self, limit: usize) -> Result<Vec<Question>> {
        self.store.get_recent(limit).await
    }
}

/// Fetches one question by ID. A miss stays an absent result.
pub struct GetQuestionDetail {
    store: Arc<dyn QuestionStore>,
}

impl GetQuestionDetail {
    pub fn new(store: Arc<dyn QuestionStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UseCase for GetQuestionDetail {
    type Input = Uuid;
    type Output = Option<Question>;

    async fn execute(&self, id: Uuid) -> Result<Option<Question>> {
        self.store.get_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a canned answer, or a canned failure.
    struct StubStore {
        fail_with: Option<RepositoryError>,
    }

    impl StubStore {
        fn ok() -> Arc<Self> {
            Arc::new(Self { fail_with: None })
        }

        fn failing(error: RepositoryError) -> Arc<Self> {
            Arc::new(Self {
                fail_with: Some(error),
            })
        }
    }

    #[async_trait]
    impl QuestionStore for StubStore {
        async fn create(&self, question_text: String) -> Result<Question> {
            match &self.fail_with {
                Some(error) => Err(error.clone()),
                None => Ok(Question::new(question_text)),
            }
        }

        async fn get_by_id(&self, _id: Uuid) -> Result<Option<Question>> {
            match &self.fail_with {
                Some(error) => Err(error.clone()),
                None => Ok(None),
            }
        }

        async fn get_recent(&self, limit: usize) -> Result<Vec<Question>> {
            match &self.fail_with {
                Some(error) => Err(error.clone()),
                None => Ok((0..limit.min(2)).map(|_| Question::new("stub")).collect()),
            }
        }
    }

    #[tokio::test]
    async fn test_create_delegates_to_store() {
        let usecase = CreateQuestion::new(StubStore::ok());
        let request = CreateQuestionRequest {
            question_text: Some("What is hexagonal architecture?".to_string()),
        };

        let question = usecase.execute(request).await.unwrap();
        assert_eq!(
            question.question_text.as_deref(),
            Some("What is hexagonal architecture?")
        );
        assert!(question.pub_date.is_some());
    }

    #[tokio::test]
    async fn test_create_rejects_missing_text() {
        let usecase = CreateQuestion::new(StubStore::ok());

        let error = usecase
            .execute(CreateQuestionRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(error, RepositoryError::InvalidData(_)));
    }

    #[tokio::test]
    async fn test_create_rejects_blank_text() {
        let usecase = CreateQuestion::new(StubStore::ok());
        let request = CreateQuestionRequest {
            question_text: Some("   ".to_string()),
        };

        let error = usecase.execute(request).await.unwrap_err();
        assert!(matches!(error, RepositoryError::InvalidData(_)));
    }

    #[tokio::test]
    async fn test_recent_passes_limit_through() {
        let usecase = GetRecentQuestions::new(StubStore::ok());
        let questions = usecase.execute(2).await.unwrap();
        assert_eq!(questions.len(), 2);
    }

    #[tokio::test]
    async fn test_detail_preserves_absent_result() {
        let usecase = GetQuestionDetail::new(StubStore::ok());
        let result = usecase.execute(Uuid::new_v4()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_repository_failures_propagate_unchanged() {
        let failure = RepositoryError::QueryFailed("scan failed".to_string());
        let usecase = GetRecentQuestions::new(StubStore::failing(failure.clone()));

        let error = usecase.execute(5).await.unwrap_err();
        assert_eq!(error, failure);
    }
}
