//! trustwise-core: typed client for the Trustwise metrics API and the
//! versioned tool registry that exposes it to MCP callers.
//! Build one [`TrustwiseClient`], wrap it in a [`ToolRegistry`] for the
//! API version you target, and call tools by name.

pub mod client;
pub mod config;
pub mod error;
pub mod registry;
pub mod testing;
pub mod tools;
pub mod transport;

pub use client::{Alignment, MetricEndpoint, Metrics, Performance, Safety, TrustwiseClient};
pub use config::{ApiVersion, TrustwiseConfig, DEFAULT_BASE_URL};
pub use error::{Result, TrustwiseError};
pub use registry::{ForwardingTool, JsonObject, MetricTool, ToolRegistry};
pub use transport::{HttpTransport, Route, Transport};
pub use trustwise_types as types;
