//! Flat row output, one line per audited method
//!
//! Rows are `name,api_id,endpoint_types,path,method,authorization_type,api_key_required`
//! with no header and no escaping. Endpoint types render as a Python list
//! literal and booleans as `True`/`False`, the row format spreadsheets built
//! from earlier audits already expect.

use super::MissingResources;
use crate::audit::{ApiAudit, AuditReport, MethodSecurity, Resource};
use crate::error::AuditError;

/// Format every method of every API as one row, rows joined by `\n`.
pub fn format_rows(report: &AuditReport, missing: MissingResources) -> Result<String, AuditError> {
    let mut rows = Vec::new();

    for api in report {
        if api.resources.is_none() {
            match missing {
                MissingResources::Skip => continue,
                MissingResources::Fail => {
                    return Err(AuditError::MissingResources {
                        api_id: api.api_id.clone(),
                    });
                }
            }
        }

        rows.extend(api.methods().map(|(resource, method)| format_row(api, resource, method)));
    }

    Ok(rows.join("\n"))
}

fn format_row(api: &ApiAudit, resource: &Resource, method: &MethodSecurity) -> String {
    format!(
        "{},{},{},{},{},{},{}",
        api.name,
        api.api_id,
        list_literal(&api.endpoint_types),
        resource.path,
        method.http_method,
        method.authorization_type,
        bool_literal(method.api_key_required),
    )
}

fn bool_literal(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

/// `['EDGE', 'PRIVATE']`
fn list_literal(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|s| str_literal(s)).collect();
    format!("[{}]", quoted.join(", "))
}

/// Quote a string the way Python's `repr` does: single quotes unless the text
/// contains a single quote and no double quote.
fn str_literal(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}
