//! Per-process application state.
//!
//! The state holds the wired use-cases behind `Arc` and is cloned for each
//! Lambda invocation. It is built exactly once, before the runtime starts
//! polling for events, from a container whose bindings were validated at
//! startup.

use std::sync::Arc;

use hexpolls_core::usecase::{CreateQuestion, GetQuestionDetail, GetRecentQuestions};
use hexpolls_core::wiring::{Container, ContainerBuilder, WiringError};

use crate::config::Config;
#[cfg(feature = "dynamodb")]
use crate::storage::dynamodb::DynamoQuestionRepository;
#[cfg(any(test, feature = "inmemory"))]
use crate::storage::inmemory::InMemoryQuestionRepository;

/// Shared application state, one instance per process.
#[derive(Clone)]
pub struct AppState {
    pub create_question: Arc<CreateQuestion>,
    pub recent_questions: Arc<GetRecentQuestions>,
    pub question_detail: Arc<GetQuestionDetail>,
}

impl AppState {
    /// Builds the state from an already-wired container.
    pub fn from_container(container: &Container) -> Self {
        Self {
            create_question: Arc::new(CreateQuestion::new(container.question_store())),
            recent_questions: Arc::new(GetRecentQuestions::new(container.question_store())),
            question_detail: Arc::new(GetQuestionDetail::new(container.question_store())),
        }
    }

    /// Wires the DynamoDB repository and builds the state.
    #[cfg(feature = "dynamodb")]
    pub async fn from_config(config: &Config) -> Result<Self, WiringError> {
        let repository = DynamoQuestionRepository::from_config(config).await;
        let container = ContainerBuilder::new()
            .with_question_store(Arc::new(repository))
            .build()?;

        Ok(Self::from_container(&container))
    }

    /// Wires the in-memory repository when DynamoDB is compiled out.
    #[cfg(all(not(feature = "dynamodb"), feature = "inmemory"))]
    pub async fn from_config(_config: &Config) -> Result<Self, WiringError> {
        Self::inmemory()
    }

    /// Wires the in-memory repository, for tests and local runs.
    #[cfg(any(test, feature = "inmemory"))]
    pub fn inmemory() -> Result<Self, WiringError> {
        let container = ContainerBuilder::new()
            .with_question_store(Arc::new(InMemoryQuestionRepository::new()))
            .build()?;

        Ok(Self::from_container(&container))
    }
}
