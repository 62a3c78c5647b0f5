use std::env;

/// Infrastructure configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// DynamoDB endpoint override (set against LocalStack in development,
    /// unset in production).
    pub endpoint_url: Option<String>,
    /// Single-table name shared by all poll entities (default: "PollsQuestionsTable")
    pub table_name: String,
    /// AWS region (default: "us-east-1")
    pub region: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DYNAMODB_ENDPOINT_URL` - endpoint override (default: unset)
    /// - `QUESTION_TABLE_NAME` - table name (default: "PollsQuestionsTable")
    /// - `AWS_REGION` - region (default: "us-east-1")
    pub fn from_env() -> Self {
        Self {
            endpoint_url: env::var("DYNAMODB_ENDPOINT_URL")
                .ok()
                .filter(|v| !v.is_empty()),
            table_name: env::var("QUESTION_TABLE_NAME")
                .unwrap_or_else(|_| "PollsQuestionsTable".to_string()),
            region: env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
