//! Per-API audit orchestration

use log::debug;

use super::{ApiAudit, AuditReport, MethodFilter, parse_resource};
use crate::client::GatewayApi;
use crate::error::Result;

/// Builds an [`AuditReport`] from a [`GatewayApi`] snapshot
///
/// One `list_apis` call, then one `list_resources` call per API, each awaited
/// before the next is issued. Any failure aborts the run.
#[derive(Debug, Clone, Default)]
pub struct AuditCollector {
    filter: MethodFilter,
}

impl AuditCollector {
    pub fn new(filter: MethodFilter) -> Self {
        Self { filter }
    }

    /// Audit every API the client can see.
    pub async fn audit<C: GatewayApi + ?Sized>(&self, client: &C) -> Result<AuditReport> {
        let apis = client.list_apis().await?;
        debug!("Number of API Gateways: {}", apis.len());

        let mut report = Vec::with_capacity(apis.len());
        for api in apis {
            let raw_resources = client.list_resources(&api.id).await?;
            debug!(
                "API {} ({}): {} resources",
                api.id,
                api.name,
                raw_resources.len()
            );

            let mut resources = Vec::new();
            for raw in &raw_resources {
                if let Some(resource) = parse_resource(raw, &self.filter)? {
                    resources.push(resource);
                }
            }

            report.push(ApiAudit {
                api_id: api.id,
                name: api.name,
                endpoint_types: api.endpoint_types,
                resources: (!resources.is_empty()).then_some(resources),
            });
        }

        Ok(report)
    }
}
