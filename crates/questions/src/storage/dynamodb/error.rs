//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `RepositoryError` from `hexpolls_core::storage`.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::scan::ScanError;
use hexpolls_core::storage::RepositoryError;

/// Map a GetItem SDK error to RepositoryError.
pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
    entity_type: &'static str,
    id: impl Into<String>,
) -> RepositoryError {
    let id_str = id.into();
    match err.into_service_error() {
        GetItemError::ResourceNotFoundException(_) => RepositoryError::NotFound {
            entity_type,
            id: id_str,
        },
        GetItemError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        GetItemError::RequestLimitExceeded(_) => {
            RepositoryError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        GetItemError::InternalServerError(_) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::QueryFailed(format!("GetItem failed: {:?}", err)),
    }
}

/// Map a PutItem SDK error to RepositoryError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
    entity_type: &'static str,
    id: impl Into<String>,
) -> RepositoryError {
    let id_str = id.into();
    match err.into_service_error() {
        PutItemError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed("Table not found".to_string())
        }
        PutItemError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        PutItemError::RequestLimitExceeded(_) => {
            RepositoryError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        PutItemError::ItemCollectionSizeLimitExceededException(_) => {
            RepositoryError::QueryFailed("Item collection size limit exceeded".to_string())
        }
        PutItemError::TransactionConflictException(_) => {
            RepositoryError::QueryFailed("Transaction conflict, please retry".to_string())
        }
        PutItemError::InternalServerError(_) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::QueryFailed(format!(
            "PutItem failed for {} {}: {:?}",
            entity_type, id_str, err
        )),
    }
}

/// Map a Scan SDK error to RepositoryError.
pub fn map_scan_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<ScanError, R>,
) -> RepositoryError {
    match err.into_service_error() {
        ScanError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed("Table not found".to_string())
        }
        ScanError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        ScanError::RequestLimitExceeded(_) => {
            RepositoryError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        ScanError::InternalServerError(_) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::QueryFailed(format!("Scan failed: {:?}", err)),
    }
}
