use hexpolls_core::storage::{repository_error_to_status_code, RepositoryError};

use super::event::ApiGatewayResponse;

/// Renders a propagated repository failure as the client-facing envelope.
///
/// Recognized client errors (contract misuse, invalid input) map to 400;
/// everything else defaults to the generic 500-class response.
pub fn repository_error_response(error: &RepositoryError) -> ApiGatewayResponse {
    ApiGatewayResponse::error(repository_error_to_status_code(error), &error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_operation_not_permitted_is_a_client_error() {
        let response = repository_error_response(&RepositoryError::OperationNotPermitted {
            operation: "delete",
        });

        assert_eq!(response.status_code, 400);
        let body: Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body["error"], "operation not permitted: delete");
    }

    #[test]
    fn test_infrastructure_failure_is_a_server_error() {
        let response =
            repository_error_response(&RepositoryError::QueryFailed("scan failed".to_string()));
        assert_eq!(response.status_code, 500);
    }
}
