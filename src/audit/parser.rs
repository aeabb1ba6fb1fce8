//! Raw resource normalization

use log::debug;

use super::{MethodFilter, MethodSecurity, Resource};
use crate::client::RawResource;
use crate::error::AuditError;

/// Normalize one raw resource, keeping only methods the filter allows.
///
/// Returns `Ok(None)` when the resource has no methods or the filter removed
/// all of them. Method entries keep their provider order.
///
/// A method entry without `httpMethod` fails the whole resource. Entries the
/// filter excludes are not inspected further; included entries must carry both
/// `authorizationType` and `apiKeyRequired`. A missing security attribute is
/// never defaulted, since a guessed value could hide an unprotected endpoint.
pub fn parse_resource(
    raw: &RawResource,
    filter: &MethodFilter,
) -> Result<Option<Resource>, AuditError> {
    debug!("resource: {:?}", raw);

    let Some(entries) = &raw.resource_methods else {
        return Ok(None);
    };

    let mut methods = Vec::new();
    for entry in entries {
        let http_method = entry
            .http_method
            .as_deref()
            .ok_or_else(|| malformed(raw, &entry.key, "httpMethod"))?;

        if !filter.allows(http_method) {
            continue;
        }

        let authorization_type = entry
            .authorization_type
            .clone()
            .ok_or_else(|| malformed(raw, http_method, "authorizationType"))?;
        let api_key_required = entry
            .api_key_required
            .ok_or_else(|| malformed(raw, http_method, "apiKeyRequired"))?;

        methods.push(MethodSecurity {
            http_method: http_method.to_string(),
            authorization_type,
            api_key_required,
        });
    }

    if methods.is_empty() {
        return Ok(None);
    }

    Ok(Some(Resource {
        path: raw.path.clone(),
        methods,
    }))
}

fn malformed(raw: &RawResource, method: &str, field: &'static str) -> AuditError {
    AuditError::MalformedRecord {
        path: raw.path.clone(),
        method: method.to_string(),
        field,
    }
}
