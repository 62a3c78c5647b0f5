use hexpolls_core::question::Question;
use hexpolls_core::storage::{RepositoryError, DEFAULT_RECENT_LIMIT};
use hexpolls_core::transport::IoAdapter;
use hexpolls_core::usecase::UseCase;

use crate::state::AppState;

use super::error::repository_error_response;
use super::event::{ApiGatewayEvent, ApiGatewayResponse};

/// Boundary adapter for the recent-questions listing.
pub struct RecentQuestionsAdapter;

impl IoAdapter for RecentQuestionsAdapter {
    type Raw = ApiGatewayEvent;
    type Dto = usize;
    type Domain = Vec<Question>;
    type Response = ApiGatewayResponse;

    /// An absent or unparsable `limit` query parameter falls back to the
    /// contract default.
    fn input(&self, raw: &ApiGatewayEvent) -> usize {
        raw.query_parameter("limit")
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_RECENT_LIMIT)
    }

    fn output(&self, questions: &Vec<Question>) -> ApiGatewayResponse {
        ApiGatewayResponse::json(200, questions)
    }

    fn map_error(&self, error: &RepositoryError) -> ApiGatewayResponse {
        repository_error_response(error)
    }
}

/// Handles `GET /questions`.
pub async fn recent_questions(state: &AppState, event: &ApiGatewayEvent) -> ApiGatewayResponse {
    let adapter = RecentQuestionsAdapter;
    let limit = adapter.input(event);

    match state.recent_questions.execute(limit).await {
        Ok(questions) => adapter.output(&questions),
        Err(error) => {
            tracing::warn!(%error, "recent questions listing failed");
            adapter.map_error(&error)
        }
    }
}
