//! Lambda transport layer.
//!
//! One boundary adapter per operation, plus the dispatcher that routes an
//! invocation to it. Only this layer classifies and renders errors; the
//! orchestrators and repositories below it raise and propagate.

mod create;
mod detail;
mod error;
pub mod event;
mod recent;

use crate::state::AppState;
use event::{ApiGatewayEvent, ApiGatewayResponse};

/// Routes one invocation to its boundary adapter.
///
/// Always returns a response: no fault may escape the transport entry
/// point.
pub async fn dispatch(state: &AppState, event: ApiGatewayEvent) -> ApiGatewayResponse {
    match event.http_method.as_deref() {
        Some("POST") => create::create_question(state, &event).await,
        Some("GET") if event.path_parameter("id").is_some() => {
            detail::question_detail(state, &event).await
        }
        Some("GET") => recent::recent_questions(state, &event).await,
        _ => ApiGatewayResponse::error(404, "unsupported route"),
    }
}
