use hexpolls_core::question::{CreateQuestionRequest, Question};
use hexpolls_core::storage::RepositoryError;
use hexpolls_core::transport::IoAdapter;
use hexpolls_core::usecase::UseCase;

use crate::state::AppState;

use super::error::repository_error_response;
use super::event::{ApiGatewayEvent, ApiGatewayResponse};

/// Boundary adapter for question creation.
pub struct CreateQuestionAdapter;

impl IoAdapter for CreateQuestionAdapter {
    type Raw = ApiGatewayEvent;
    type Dto = CreateQuestionRequest;
    type Domain = Question;
    type Response = ApiGatewayResponse;

    /// A missing or malformed body degrades to the default DTO; the create
    /// use-case decides whether the request is actually usable.
    fn input(&self, raw: &ApiGatewayEvent) -> CreateQuestionRequest {
        raw.body
            .as_deref()
            .and_then(|body| serde_json::from_str(body).ok())
            .unwrap_or_default()
    }

    fn output(&self, question: &Question) -> ApiGatewayResponse {
        ApiGatewayResponse::json(201, question)
    }

    fn map_error(&self, error: &RepositoryError) -> ApiGatewayResponse {
        repository_error_response(error)
    }
}

/// Handles `POST /questions`.
pub async fn create_question(state: &AppState, event: &ApiGatewayEvent) -> ApiGatewayResponse {
    let adapter = CreateQuestionAdapter;
    let request = adapter.input(event);

    match state.create_question.execute(request).await {
        Ok(question) => adapter.output(&question),
        Err(error) => {
            tracing::warn!(%error, "create question failed");
            adapter.map_error(&error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event_with_body(body: Option<&str>) -> ApiGatewayEvent {
        ApiGatewayEvent {
            http_method: Some("POST".to_string()),
            body: body.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_input_decodes_question_text() {
        let event = event_with_body(Some(r#"{"question_text": "favorite color?"}"#));
        let request = CreateQuestionAdapter.input(&event);
        assert_eq!(request.question_text.as_deref(), Some("favorite color?"));
    }

    #[test]
    fn test_malformed_body_degrades_to_default_dto() {
        let event = event_with_body(Some("{not json"));
        let request = CreateQuestionAdapter.input(&event);
        assert!(request.question_text.is_none());
    }

    #[test]
    fn test_missing_body_degrades_to_default_dto() {
        let event = event_with_body(None);
        let request = CreateQuestionAdapter.input(&event);
        assert!(request.question_text.is_none());
    }

    #[tokio::test]
    async fn test_successful_create_returns_201_with_full_envelope() {
        let state = AppState::inmemory().unwrap();
        let event = event_with_body(Some(r#"{"question_text": "favorite color?"}"#));

        let response = create_question(&state, &event).await;

        assert_eq!(response.status_code, 201);
        let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
        assert!(body["id"].is_string());
        assert_eq!(body["question_text"], "favorite color?");
        assert!(body["pub_date"].is_string());
    }

    #[tokio::test]
    async fn test_missing_question_text_is_rejected_with_400() {
        let state = AppState::inmemory().unwrap();
        let event = event_with_body(Some("{not json"));

        let response = create_question(&state, &event).await;
        assert_eq!(response.status_code, 400);
    }
}
