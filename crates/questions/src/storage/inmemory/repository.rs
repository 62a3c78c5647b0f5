//! In-memory question repository.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use hexpolls_core::question::{sort_recent, Question};
use hexpolls_core::storage::{QuestionCrud, QuestionStore, RepositoryError, Result};

/// In-memory storage backend.
///
/// Questions are kept in insertion order so the stable tie-break policy of
/// `get_recent` is observable. Data is not persisted and is lost when the
/// repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryQuestionRepository {
    questions: Arc<RwLock<Vec<Question>>>,
}

impl InMemoryQuestionRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a pre-built question, bypassing creation (test seeding).
    pub async fn insert(&self, question: Question) {
        self.questions.write().await.push(question);
    }
}

#[async_trait]
impl QuestionStore for InMemoryQuestionRepository {
    async fn create(&self, question_text: String) -> Result<Question> {
        let question = Question::new(question_text);
        self.questions.write().await.push(question.clone());
        Ok(question)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Question>> {
        let questions = self.questions.read().await;
        Ok(questions.iter().find(|q| q.id == id).cloned())
    }

    async fn get_recent(&self, limit: usize) -> Result<Vec<Question>> {
        let questions = self.questions.read().await.clone();
        Ok(sort_recent(questions, limit))
    }
}

// The rejection policy is uniform across backends: the in-memory adapter
// refuses the same operations the DynamoDB adapter refuses.
#[async_trait]
impl QuestionCrud for InMemoryQuestionRepository {
    async fn get_all(&self) -> Result<Vec<Question>> {
        Err(RepositoryError::OperationNotPermitted {
            operation: "get_all",
        })
    }

    async fn update(&self, _question: &Question) -> Result<Question> {
        Err(RepositoryError::OperationNotPermitted {
            operation: "update",
        })
    }

    async fn delete(&self, _id: Uuid) -> Result<()> {
        Err(RepositoryError::OperationNotPermitted {
            operation: "delete",
        })
    }
}
