use serde::{Deserialize, Serialize};

/// DTO carried from the transport boundary into the create use-case.
///
/// `question_text` is optional by contract: a malformed or empty request
/// body degrades to a default DTO instead of failing at the boundary, and
/// validation happens downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateQuestionRequest {
    #[serde(default)]
    pub question_text: Option<String>,
}
