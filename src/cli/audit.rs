//! Audit command implementation

use log::debug;

use crate::audit::AuditCollector;
use crate::cli::{AuditArgs, CommandContext, GlobalOptions};
use crate::error::Result;
use crate::output;

/// Run the audit command: collect the report, then print it in one piece.
///
/// Nothing is printed unless the whole audit and render succeed.
pub async fn run(opts: &GlobalOptions, args: &AuditArgs) -> Result<()> {
    let ctx = CommandContext::new(opts, args).await?;
    let settings = &ctx.settings;

    let filter = settings.method_filter();
    if filter.is_unrestricted() {
        debug!("Auditing all HTTP methods");
    } else {
        debug!(
            "Auditing HTTP methods: {}",
            filter.verbs().collect::<Vec<_>>().join(", ")
        );
    }
    debug!(
        "format: {}, missing resources: {:?}",
        settings.format.value, settings.missing_resources.value
    );

    let report = AuditCollector::new(filter).audit(&ctx.client).await?;

    output::print(
        &report,
        settings.format.value,
        settings.missing_resources.value,
    )
}
