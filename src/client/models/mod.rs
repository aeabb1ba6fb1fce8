//! API Gateway data models
//!
//! Raw shapes handed over by a [`GatewayApi`](crate::client::GatewayApi)
//! implementation. Attributes the provider may omit stay optional here; the
//! audit engine decides what a missing value means.

mod api;
mod resource;

pub use api::ApiSummary;
pub use resource::{RawMethod, RawResource};
