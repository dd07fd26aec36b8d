//! Fixed tool lists, one per API version.

pub mod v3;
pub mod v4;

use std::sync::Arc;

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::Serialize;
use trustwise_types::Validate;

use crate::config::ApiVersion;
use crate::registry::{EndpointFn, ForwardingTool, MetricTool};

fn forward<Req, Resp>(
	name: &'static str,
	version: ApiVersion,
	description: &'static str,
	endpoint: EndpointFn<Req, Resp>,
) -> Arc<dyn MetricTool>
where
	Req: JsonSchema + DeserializeOwned + Serialize + Validate + Send + Sync + 'static,
	Resp: DeserializeOwned + Send + Sync + 'static,
{
	Arc::new(ForwardingTool::new(name, version, description, endpoint))
}

// Descriptions of tools whose parameters are the same in v3 and v4.

const PII: &str = "\
Trustwise metric (PII): detect personally identifiable information in a text. \
Allowlisted entries are never reported; blocklisted entries always are.

Example arguments:
{\"text\": \"My email is john.doe@example.com\", \"allowlist\": [\"EMAIL\"], \"blocklist\": [\"PHONE\"]}";

const FORMALITY: &str = "\
Trustwise metric (formality): score how formal a response is, overall and per sentence.

Example arguments:
{\"response\": \"The capital of France is Paris.\"}";

const SIMPLICITY: &str = "\
Trustwise metric (simplicity): score how simple a response is to read.

Example arguments:
{\"response\": \"Paris is the capital of France.\"}";

const TONE: &str = "\
Trustwise metric (tone): classify the tone of a response. Returns labels with scores.

Example arguments:
{\"response\": \"The capital of France is Paris.\"}";

const TOXICITY: &str = "\
Trustwise metric (toxicity): score a response for toxic content. Returns labels with scores.

Example arguments:
{\"response\": \"The capital of France is Paris.\"}";

const CARBON: &str = "\
Trustwise metric (carbon): estimate the carbon footprint of serving a response. \
average_latency is in milliseconds.

Example arguments:
{\"processor_name\": \"AMD A12-9800\", \"provider_name\": \"aws\", \"provider_region\": \"us-east-2\", \
\"instance_type\": \"a1.medium\", \"average_latency\": 1112}";

const COST: &str = "\
Trustwise metric (cost): estimate the cost of running a model. model_type must be \"LLM\" or \"Reranker\"; \
counts must be greater than 0. total_tokens, instance_type and average_latency (ms) are optional.

Example arguments:
{\"model_name\": \"gpt-3.5-turbo\", \"model_type\": \"LLM\", \"model_provider\": \"OpenAI\", \
\"number_of_queries\": 5, \"total_prompt_tokens\": 950, \"total_completion_tokens\": 50}";
