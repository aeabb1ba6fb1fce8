//! API Gateway client
//!
//! The audit engine only talks to [`GatewayApi`]; [`ApiGatewayClient`] backs it
//! with the AWS SDK and [`MockGatewayClient`] backs it in tests.

use async_trait::async_trait;

use crate::error::Result;

pub mod apigateway;
#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use apigateway::ApiGatewayClient;
#[cfg(test)]
pub use mock::MockGatewayClient;
pub use models::{ApiSummary, RawMethod, RawResource};

/// Read-only view of the REST APIs deployed in one account and region
///
/// Implementations return complete listings: any paging against the provider
/// happens behind this trait.
#[async_trait]
pub trait GatewayApi: Send + Sync {
    /// List every REST API, in provider order
    async fn list_apis(&self) -> Result<Vec<ApiSummary>>;

    /// List every resource of one API with its method detail embedded
    async fn list_resources(&self, api_id: &str) -> Result<Vec<RawResource>>;
}
