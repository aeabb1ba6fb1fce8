//! Audit traversal and aggregation engine
//!
//! Walks every REST API exposed by a [`GatewayApi`](crate::client::GatewayApi),
//! normalizes each resource's method security and assembles an
//! [`AuditReport`]. Rendering lives in [`crate::output`].

mod collector;
mod filter;
mod parser;
mod report;

pub use collector::AuditCollector;
pub use filter::MethodFilter;
pub use parser::parse_resource;
pub use report::{ApiAudit, AuditReport, MethodSecurity, Resource};
