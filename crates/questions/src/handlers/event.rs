//! Raw Lambda/API Gateway event and response shapes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// API Gateway proxy event, reduced to the fields this service reads.
///
/// Every field is defaulted so an incomplete envelope still deserializes;
/// body decoding failures are absorbed further in, at the boundary
/// adapters.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiGatewayEvent {
    pub http_method: Option<String>,
    pub path_parameters: Option<HashMap<String, String>>,
    pub query_string_parameters: Option<HashMap<String, String>>,
    pub body: Option<String>,
}

impl ApiGatewayEvent {
    pub fn path_parameter(&self, name: &str) -> Option<&str> {
        self.path_parameters
            .as_ref()
            .and_then(|params| params.get(name))
            .map(String::as_str)
    }

    pub fn query_parameter(&self, name: &str) -> Option<&str> {
        self.query_string_parameters
            .as_ref()
            .and_then(|params| params.get(name))
            .map(String::as_str)
    }
}

/// API Gateway proxy response.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: Value,
    pub body: String,
}

impl ApiGatewayResponse {
    /// Serializes `payload` into a JSON response with the given status.
    pub fn json(status_code: u16, payload: &impl Serialize) -> Self {
        match serde_json::to_string(payload) {
            Ok(body) => Self {
                status_code,
                headers: json!({"Content-Type": "application/json"}),
                body,
            },
            Err(error) => Self::error(500, &format!("response serialization failed: {error}")),
        }
    }

    /// Renders an `{"error": ...}` body with the given status.
    pub fn error(status_code: u16, message: &str) -> Self {
        Self {
            status_code,
            headers: json!({"Content-Type": "application/json"}),
            body: json!({ "error": message }).to_string(),
        }
    }
}
