//! AWS SDK backed API Gateway client

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_apigateway::Client as SdkClient;
use aws_sdk_apigateway::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_apigateway::types::{Resource, RestApi};
use log::debug;

use super::{ApiSummary, GatewayApi, RawMethod, RawResource};
use crate::error::{ApiError, Result};

/// Page size requested from `GetRestApis` and `GetResources` (service maximum)
const PAGE_LIMIT: i32 = 500;

/// Error codes API Gateway and STS use for rejected credentials
const AUTH_ERROR_CODES: &[&str] = &[
    "UnauthorizedException",
    "AccessDeniedException",
    "UnrecognizedClientException",
    "InvalidSignatureException",
    "ExpiredTokenException",
];

/// Connection settings for the AWS SDK
///
/// Every field left unset falls back to the SDK default provider chain.
#[derive(Debug, Clone, Default)]
pub struct ConnectOptions {
    pub region: Option<String>,
    pub profile: Option<String>,
    pub endpoint_url: Option<String>,
}

/// API Gateway client using the AWS SDK
pub struct ApiGatewayClient {
    sdk: SdkClient,
}

impl ApiGatewayClient {
    /// Wrap an already configured SDK client
    pub fn new(sdk: SdkClient) -> Self {
        Self { sdk }
    }

    /// Resolve credentials and region through the SDK and build a client.
    ///
    /// Credentials are never handled here: the SDK reads them from the
    /// environment, the shared config files or the instance role.
    pub async fn connect(options: &ConnectOptions) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());

        if let Some(region) = &options.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(profile) = &options.profile {
            loader = loader.profile_name(profile);
        }
        if let Some(endpoint_url) = &options.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }

        let sdk_config = loader.load().await;
        debug!("Resolved AWS region: {:?}", sdk_config.region());

        Self::new(SdkClient::new(&sdk_config))
    }
}

#[async_trait]
impl GatewayApi for ApiGatewayClient {
    async fn list_apis(&self) -> Result<Vec<ApiSummary>> {
        let mut apis = Vec::new();
        let mut position: Option<String> = None;

        loop {
            let response = self
                .sdk
                .get_rest_apis()
                .set_position(position.take())
                .limit(PAGE_LIMIT)
                .send()
                .await
                .map_err(|e| map_sdk_error("GetRestApis", e))?;

            debug!("Rest APIs: {:?}", response);

            for api in response.items() {
                apis.push(api_summary(api)?);
            }

            match response.position() {
                Some(next) if !next.is_empty() => position = Some(next.to_string()),
                _ => break,
            }
        }

        Ok(apis)
    }

    async fn list_resources(&self, api_id: &str) -> Result<Vec<RawResource>> {
        let mut resources = Vec::new();
        let mut position: Option<String> = None;

        loop {
            let response = self
                .sdk
                .get_resources()
                .rest_api_id(api_id)
                .embed("methods")
                .set_position(position.take())
                .limit(PAGE_LIMIT)
                .send()
                .await
                .map_err(|e| map_sdk_error("GetResources", e))?;

            for resource in response.items() {
                resources.push(raw_resource(api_id, resource)?);
            }

            match response.position() {
                Some(next) if !next.is_empty() => position = Some(next.to_string()),
                _ => break,
            }
        }

        Ok(resources)
    }
}

fn api_summary(api: &RestApi) -> std::result::Result<ApiSummary, ApiError> {
    let id = api
        .id()
        .ok_or_else(|| ApiError::InvalidResponse("REST API without an id".to_string()))?;
    let name = api.name().ok_or_else(|| {
        ApiError::InvalidResponse(format!("REST API '{}' without a name", id))
    })?;

    let endpoint_types: Vec<String> = api
        .endpoint_configuration()
        .map(|config| {
            config
                .types()
                .iter()
                .map(|t| t.as_str().to_string())
                .collect()
        })
        .unwrap_or_default();

    Ok(ApiSummary {
        id: id.to_string(),
        name: name.to_string(),
        endpoint_types,
    })
}

/// Convert one SDK resource.
///
/// The SDK hands `resourceMethods` over as a hash map, so entries are ordered
/// by key to keep reports stable between runs.
fn raw_resource(api_id: &str, resource: &Resource) -> std::result::Result<RawResource, ApiError> {
    let path = resource.path().ok_or_else(|| {
        ApiError::InvalidResponse(format!("Resource of API '{}' without a path", api_id))
    })?;

    let resource_methods = resource.resource_methods().map(|methods| {
        let mut entries: Vec<RawMethod> = methods
            .iter()
            .map(|(key, method)| RawMethod {
                key: key.clone(),
                http_method: method.http_method().map(str::to_string),
                authorization_type: method.authorization_type().map(str::to_string),
                api_key_required: method.api_key_required(),
            })
            .collect();
        entries.sort_by(|a, b| a.key.cmp(&b.key));
        entries
    });

    Ok(RawResource {
        path: path.to_string(),
        resource_methods,
    })
}

fn map_sdk_error<E, R>(operation: &str, err: SdkError<E, R>) -> ApiError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    let detail = format!("{}: {}", operation, DisplayErrorContext(&err));

    match err.code() {
        Some(code) if AUTH_ERROR_CODES.contains(&code) => ApiError::Unauthorized,
        Some("TooManyRequestsException") | Some("ThrottlingException") => {
            ApiError::RateLimited(detail)
        }
        Some("NotFoundException") => ApiError::NotFound(detail),
        _ => match &err {
            SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => ApiError::Network(detail),
            _ => ApiError::Provider(detail),
        },
    }
}
