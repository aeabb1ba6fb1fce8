//! Mock API Gateway client for testing
//!
//! Provides an in-memory [`GatewayApi`] so the audit engine can be exercised
//! without AWS credentials or network access.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{ApiSummary, GatewayApi, RawResource};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure expected responses via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockGatewayClient::new()
///     .with_api(ApiSummaryBuilder::new("a1").build(), vec![])
///     .await;
///
/// let apis = mock.list_apis().await?;
/// assert_eq!(apis.len(), 1);
/// ```
#[derive(Default)]
pub struct MockGatewayClient {
    /// APIs to return from list_apis, in order
    apis: Arc<Mutex<Vec<ApiSummary>>>,
    /// Resources to return from list_resources, keyed by API id
    resources: Arc<Mutex<HashMap<String, Vec<RawResource>>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Errors returned by list_resources for specific API ids
    resource_errors: Arc<Mutex<HashMap<String, ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// API ids passed to list_resources, in call order
    requested_api_ids: Arc<Mutex<Vec<String>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub list_apis: usize,
    pub list_resources: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.list_apis + self.list_resources
    }
}

impl MockGatewayClient {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an API and the resources list_resources returns for it.
    pub async fn with_api(self, api: ApiSummary, resources: Vec<RawResource>) -> Self {
        self.resources
            .lock()
            .await
            .insert(api.id.clone(), resources);
        self.apis.lock().await.push(api);
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Configure list_resources to fail for one API id.
    pub async fn with_resource_error(self, api_id: &str, error: ApiError) -> Self {
        self.resource_errors
            .lock()
            .await
            .insert(api_id.to_string(), error);
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Get the API ids list_resources was called with.
    pub async fn requested_api_ids(&self) -> Vec<String> {
        self.requested_api_ids.lock().await.clone()
    }

    /// Check if there's a pending error and consume it.
    async fn check_error(&self) -> Result<()> {
        let mut error = self.error.lock().await;
        if let Some(e) = error.take() {
            return Err(e.into());
        }
        Ok(())
    }
}

#[async_trait]
impl GatewayApi for MockGatewayClient {
    async fn list_apis(&self) -> Result<Vec<ApiSummary>> {
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.list_apis += 1;

        Ok(self.apis.lock().await.clone())
    }

    async fn list_resources(&self, api_id: &str) -> Result<Vec<RawResource>> {
        self.requested_api_ids
            .lock()
            .await
            .push(api_id.to_string());
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.list_resources += 1;
        drop(counts);

        if let Some(e) = self.resource_errors.lock().await.remove(api_id) {
            return Err(e.into());
        }

        let resources = self.resources.lock().await;
        resources.get(api_id).cloned().ok_or_else(|| {
            ApiError::NotFound(format!("Invalid API identifier specified: {api_id}")).into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::{ApiSummaryBuilder, RawResourceBuilder};
    use crate::error::Error;

    #[tokio::test]
    async fn test_mock_client_default_empty() {
        let mock = MockGatewayClient::new();

        let apis = mock.list_apis().await.unwrap();
        assert!(apis.is_empty());
    }

    #[tokio::test]
    async fn test_mock_client_with_apis_keeps_order() {
        let mock = MockGatewayClient::new()
            .with_api(ApiSummaryBuilder::new("b").build(), vec![])
            .await
            .with_api(ApiSummaryBuilder::new("a").build(), vec![])
            .await;

        let apis = mock.list_apis().await.unwrap();
        assert_eq!(apis[0].id, "b");
        assert_eq!(apis[1].id, "a");
    }

    #[tokio::test]
    async fn test_mock_client_resources_per_api() {
        let mock = MockGatewayClient::new()
            .with_api(
                ApiSummaryBuilder::new("a1").build(),
                vec![RawResourceBuilder::new("/items").build()],
            )
            .await;

        let resources = mock.list_resources("a1").await.unwrap();
        assert_eq!(resources.len(), 1);
        assert_eq!(resources[0].path, "/items");
    }

    #[tokio::test]
    async fn test_mock_client_unknown_api_is_not_found() {
        let mock = MockGatewayClient::new();

        let result = mock.list_resources("missing").await;
        assert!(matches!(result, Err(Error::Api(ApiError::NotFound(_)))));
    }

    #[tokio::test]
    async fn test_mock_client_with_error() {
        let mock = MockGatewayClient::new()
            .with_error(ApiError::Unauthorized)
            .await;

        let result = mock.list_apis().await;
        assert!(matches!(result, Err(Error::Api(ApiError::Unauthorized))));

        // Error is consumed
        let result = mock.list_apis().await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_mock_client_call_counts() {
        let mock = MockGatewayClient::new()
            .with_api(ApiSummaryBuilder::new("a1").build(), vec![])
            .await;

        mock.list_apis().await.unwrap();
        mock.list_resources("a1").await.unwrap();
        mock.list_resources("a1").await.unwrap();

        let counts = mock.call_counts().await;
        assert_eq!(counts.list_apis, 1);
        assert_eq!(counts.list_resources, 2);
        assert_eq!(counts.total(), 3);
        assert_eq!(mock.requested_api_ids().await, vec!["a1", "a1"]);
    }
}
