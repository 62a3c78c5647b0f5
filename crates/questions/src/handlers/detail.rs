use hexpolls_core::question::Question;
use hexpolls_core::storage::RepositoryError;
use hexpolls_core::transport::IoAdapter;
use hexpolls_core::usecase::UseCase;
use uuid::Uuid;

use crate::state::AppState;

use super::error::repository_error_response;
use super::event::{ApiGatewayEvent, ApiGatewayResponse};

/// Boundary adapter for the single-question detail lookup.
pub struct QuestionDetailAdapter;

impl IoAdapter for QuestionDetailAdapter {
    type Raw = ApiGatewayEvent;
    type Dto = Option<Uuid>;
    type Domain = Option<Question>;
    type Response = ApiGatewayResponse;

    /// A missing or non-UUID path parameter yields `None`; the handler
    /// renders that as a client error without touching the repository.
    fn input(&self, raw: &ApiGatewayEvent) -> Option<Uuid> {
        raw.path_parameter("id")
            .and_then(|value| Uuid::parse_str(value).ok())
    }

    fn output(&self, result: &Option<Question>) -> ApiGatewayResponse {
        match result {
            Some(question) => ApiGatewayResponse::json(200, question),
            None => ApiGatewayResponse::error(404, "question not found"),
        }
    }

    fn map_error(&self, error: &RepositoryError) -> ApiGatewayResponse {
        repository_error_response(error)
    }
}

/// Handles `GET /questions/{id}`.
pub async fn question_detail(state: &AppState, event: &ApiGatewayEvent) -> ApiGatewayResponse {
    let adapter = QuestionDetailAdapter;

    let Some(id) = adapter.input(event) else {
        return ApiGatewayResponse::error(400, "invalid question id");
    };

    match state.question_detail.execute(id).await {
        Ok(result) => adapter.output(&result),
        Err(error) => {
            tracing::warn!(%error, question_id = %id, "question detail lookup failed");
            adapter.map_error(&error)
        }
    }
}
