//! DynamoDB question repository.
//!
//! Implements the repository capability traits from `hexpolls_core::storage`
//! against the single-table design. This adapter is read/create only:
//! mutation and unbounded reads are rejected, not silently ignored.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use uuid::Uuid;

use hexpolls_core::question::{sort_recent, Question};
use hexpolls_core::storage::{QuestionCrud, QuestionStore, RepositoryError, Result};

use super::conversions::{item_to_question, question_to_item, ENTITY_TYPE_QUESTION};
use super::error::{map_get_item_error, map_put_item_error, map_scan_error};
use super::keys;
use crate::config::Config;

/// DynamoDB-based question repository.
pub struct DynamoQuestionRepository {
    client: Client,
    table_name: String,
}

impl DynamoQuestionRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new repository from process configuration.
    ///
    /// Uses the AWS SDK default credential chain, honoring the optional
    /// endpoint override used against LocalStack.
    pub async fn from_config(config: &Config) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()));
        if let Some(endpoint_url) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint_url.clone());
        }
        let sdk_config = loader.load().await;

        Self::new(Client::new(&sdk_config), config.table_name.clone())
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl QuestionStore for DynamoQuestionRepository {
    async fn create(&self, question_text: String) -> Result<Question> {
        let question = Question::new(question_text);
        let item = question_to_item(&question);

        // Unconditional write: the id was generated just above, so no
        // attribute_not_exists guard is applied. Identical text still
        // creates a distinct record.
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| map_put_item_error(e, "Question", question.id.to_string()))?;

        tracing::info!(question_id = %question.id, "created question");
        Ok(question)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Question>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("pk", AttributeValue::S(keys::question_pk(id)))
            .key("sk", AttributeValue::S(keys::question_sk(id)))
            .send()
            .await
            .map_err(|e| map_get_item_error(e, "Question", id.to_string()))?;

        // A miss is an absent result, never an error.
        match result.item {
            Some(item) => Ok(Some(item_to_question(&item)?)),
            None => Ok(None),
        }
    }

    /// Paginated full-table scan filtered on the entity discriminator,
    /// then an in-memory stable sort. O(total records) by documented
    /// policy: a recency index would change read-after-write ordering
    /// guarantees, so none is assumed here.
    async fn get_recent(&self, limit: usize) -> Result<Vec<Question>> {
        let mut items = Vec::new();
        let mut exclusive_start_key = None;

        loop {
            let result = self
                .client
                .scan()
                .table_name(&self.table_name)
                .filter_expression("entity_type = :entity_type")
                .expression_attribute_values(
                    ":entity_type",
                    AttributeValue::S(ENTITY_TYPE_QUESTION.to_string()),
                )
                .set_exclusive_start_key(exclusive_start_key.take())
                .send()
                .await
                .map_err(map_scan_error)?;

            items.extend(result.items.unwrap_or_default());

            exclusive_start_key = result.last_evaluated_key;
            if exclusive_start_key.is_none() {
                break;
            }
        }

        let questions = items
            .iter()
            .map(item_to_question)
            .collect::<Result<Vec<_>>>()?;

        Ok(sort_recent(questions, limit))
    }
}

#[async_trait]
impl QuestionCrud for DynamoQuestionRepository {
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
