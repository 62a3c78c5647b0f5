//! Explicit dependency wiring.
//!
//! The container binds capability traits to concrete adapters once, at
//! process start, and is read-only afterwards. Unsatisfied bindings are
//! rejected by [`ContainerBuilder::build`] before any request is served,
//! so a wiring defect surfaces at startup rather than on first resolution.
//! There is no process-wide global; the container is handed to whatever
//! constructs the request-handling state.

use std::sync::Arc;

use thiserror::Error;

use crate::storage::QuestionStore;

/// Errors raised while building the container.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WiringError {
    #[error("no implementation bound for capability: {capability}")]
    MissingBinding { capability: &'static str },
}

/// The resolved, read-only binding table.
#[derive(Clone)]
pub struct Container {
    question_store: Arc<dyn QuestionStore>,
}

impl std::fmt::Debug for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Container").finish_non_exhaustive()
    }
}

impl Container {
    /// Resolves the question store capability.
    ///
    /// Cheap `Arc` clone; safe to call concurrently without locking since
    /// bindings never change after [`ContainerBuilder::build`].
    pub fn question_store(&self) -> Arc<dyn QuestionStore> {
        self.question_store.clone()
    }
}

/// Collects bindings before the process starts serving requests.
#[derive(Default)]
pub struct ContainerBuilder {
    question_store: Option<Arc<dyn QuestionStore>>,
}

impl ContainerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds the question store capability.
    ///
    /// Registering the same capability twice overwrites the earlier
    /// binding (last-write-wins).
    pub fn with_question_store(mut self, store: Arc<dyn QuestionStore>) -> Self {
        self.question_store = Some(store);
        self
    }

    /// Resolves every binding, failing on the first missing capability.
    pub fn build(self) -> Result<Container, WiringError> {
        let question_store = self.question_store.ok_or(WiringError::MissingBinding {
            capability: "QuestionStore",
        })?;

        Ok(Container { question_store })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use uuid::Uuid;

    use crate::question::Question;
    use crate::storage::Result;

    struct NamedStore(&'static str);

    #[async_trait]
    impl QuestionStore for NamedStore {
        async fn create(&self, _question_text: String) -> Result<Question> {
            Ok(Question::new(self.0))
        }

        async fn get_by_id(&self, _id: Uuid) -> Result<Option<Question>> {
            Ok(None)
        }

        async fn get_recent(&self, _limit: usize) -> Result<Vec<Question>> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_missing_binding_is_rejected_at_build() {
        let error = ContainerBuilder::new().build().unwrap_err();
        assert_eq!(
            error,
            WiringError::MissingBinding {
                capability: "QuestionStore"
            }
        );
    }

    #[tokio::test]
    async fn test_resolves_registered_store() {
        let container = ContainerBuilder::new()
            .with_question_store(Arc::new(NamedStore("registered")))
            .build()
            .unwrap();

        let question = container
            .question_store()
            .create("ignored".to_string())
            .await
            .unwrap();
        assert_eq!(question.question_text.as_deref(), Some("registered"));
    }

    #[tokio::test]
    async fn test_reregistration_is_last_write_wins() {
        let container = ContainerBuilder::new()
            .with_question_store(Arc::new(NamedStore("first")))
            .with_question_store(Arc::new(NamedStore("second")))
            .build()
            .unwrap();

        let question = container
            .question_store()
            .create("ignored".to_string())
            .await
            .unwrap();
        assert_eq!(question.question_text.as_deref(), Some("second"));
    }
}
