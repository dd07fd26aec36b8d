use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;
use trustwise_types::{Validate, ValidationError};

use crate::client::{MetricEndpoint, TrustwiseClient};
use crate::config::ApiVersion;
use crate::error::{Result, TrustwiseError};

pub type JsonObject = Map<String, Value>;

/// Picks the client method a tool forwards to.
pub type EndpointFn<Req, Resp> = for<'c> fn(&'c TrustwiseClient) -> MetricEndpoint<'c, Req, Resp>;

/// A named entry point callable with untyped JSON arguments.
#[async_trait]
pub trait MetricTool: Send + Sync {
	fn name(&self) -> &'static str;
	fn description(&self) -> &'static str;
	/// Schema tag: which API shape the parameters follow.
	fn version(&self) -> ApiVersion;
	fn input_schema(&self) -> Arc<JsonObject>;
	async fn call(&self, client: &TrustwiseClient, arguments: JsonObject) -> Result<Value>;
}

/// Decodes arguments into `Req`, forwards them to one endpoint and hands
/// back the response JSON as the service sent it.
pub struct ForwardingTool<Req, Resp> {
	name: &'static str,
	description: &'static str,
	version: ApiVersion,
	schema: Arc<JsonObject>,
	endpoint: EndpointFn<Req, Resp>,
}

impl<Req: JsonSchema, Resp> ForwardingTool<Req, Resp> {
	pub fn new(
		name: &'static str,
		version: ApiVersion,
		description: &'static str,
		endpoint: EndpointFn<Req, Resp>,
	) -> Self {
		Self {
			name,
			description,
			version,
			schema: Arc::new(input_schema::<Req>()),
			endpoint,
		}
	}
}

#[async_trait]
impl<Req, Resp> MetricTool for ForwardingTool<Req, Resp>
where
	Req: DeserializeOwned + Serialize + Validate + Send + Sync + 'static,
	Resp: DeserializeOwned + Send + Sync + 'static,
{
	fn name(&self) -> &'static str {
		self.name
	}

	fn description(&self) -> &'static str {
		self.description
	}

	fn version(&self) -> ApiVersion {
		self.version
	}

	fn input_schema(&self) -> Arc<JsonObject> {
		self.schema.clone()
	}

	async fn call(&self, client: &TrustwiseClient, arguments: JsonObject) -> Result<Value> {
		let request: Req =
			serde_json::from_value(Value::Object(arguments)).map_err(ValidationError::arguments)?;
		let (_, response) = (self.endpoint)(client).evaluate_raw(request).await?;
		Ok(response)
	}
}

/// JSON schema of `T` as a plain object, the form MCP tool listings carry.
pub fn input_schema<T: JsonSchema>() -> JsonObject {
	match serde_json::to_value(schemars::schema_for!(T)) {
		Ok(Value::Object(map)) => map,
		_ => JsonObject::new(),
	}
}

/// The tools of one API version, bound to the process-wide client.
#[derive(Clone)]
pub struct ToolRegistry {
	client: Arc<TrustwiseClient>,
	version: ApiVersion,
	tools: Arc<Vec<Arc<dyn MetricTool>>>,
}

impl fmt::Debug for ToolRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ToolRegistry")
			.field("version", &self.version)
			.field("tool_count", &self.tools.len())
			.finish()
	}
}

impl ToolRegistry {
	pub fn new(client: Arc<TrustwiseClient>, version: ApiVersion) -> Self {
		let tools = match version {
			ApiVersion::V3 => crate::tools::v3::tools(),
			ApiVersion::V4 => crate::tools::v4::tools(),
		};
		Self {
			client,
			version,
			tools: Arc::new(tools),
		}
	}

	pub fn version(&self) -> ApiVersion {
		self.version
	}

	pub fn tools(&self) -> &[Arc<dyn MetricTool>] {
		&self.tools
	}

	pub fn get(&self, name: &str) -> Option<&Arc<dyn MetricTool>> {
		self.tools.iter().find(|t| t.name() == name)
	}

	/// Runs `name` with `arguments`. Errors from the tool are returned as is.
	pub async fn call(&self, name: &str, arguments: JsonObject) -> Result<Value> {
		let tool = self
			.get(name)
			.ok_or_else(|| TrustwiseError::UnknownTool(name.to_string()))?;
		debug!(tool = name, version = %self.version, "calling tool");
		tool.call(&self.client, arguments).await
	}
}
