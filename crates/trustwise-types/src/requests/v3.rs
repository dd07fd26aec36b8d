//! Request shapes of the unversioned (v3) metrics API.
//!
//! Every metric lives under a single `metrics` namespace. Newer shapes that
//! differ from these are in [`super::v4`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::context::Context;
use crate::validate::{self, non_empty, non_empty_opt, positive, ValidationError, Validate};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FaithfulnessRequest {
	/// The input query string.
	pub query: String,
	/// The response to evaluate.
	pub response: String,
	/// The context information (list of context nodes).
	pub context: Context,
}

impl Validate for FaithfulnessRequest {
	fn validate(&self) -> Result<(), ValidationError> {
		non_empty("query", &self.query)?;
		non_empty("response", &self.response)?;
		validate::context("context", &self.context)
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnswerRelevancyRequest {
	/// The input query string.
	pub query: String,
	/// The response to evaluate.
	pub response: String,
}

impl Validate for AnswerRelevancyRequest {
	fn validate(&self) -> Result<(), ValidationError> {
		non_empty("query", &self.query)?;
		non_empty("response", &self.response)
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ContextRelevancyRequest {
	/// The input query string.
	pub query: String,
	/// The context information (list of context nodes).
	pub context: Context,
}

impl Validate for ContextRelevancyRequest {
	fn validate(&self) -> Result<(), ValidationError> {
		non_empty("query", &self.query)?;
		validate::context("context", &self.context)
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PiiRequest {
	/// The text to scan for personally identifiable information.
	pub text: String,
	/// PII categories or literal strings that are allowed.
	pub allowlist: Vec<String>,
	/// PII categories or literal strings that are always flagged.
	pub blocklist: Vec<String>,
}

impl Validate for PiiRequest {
	fn validate(&self) -> Result<(), ValidationError> {
		non_empty("text", &self.text)
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PromptInjectionRequest {
	/// The input query string.
	pub query: String,
}

impl Validate for PromptInjectionRequest {
	fn validate(&self) -> Result<(), ValidationError> {
		non_empty("query", &self.query)
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SummarizationRequest {
	/// The summary to evaluate.
	pub response: String,
	/// The source material being summarized (list of context nodes).
	pub context: Context,
}

impl Validate for SummarizationRequest {
	fn validate(&self) -> Result<(), ValidationError> {
		non_empty("response", &self.response)?;
		validate::context("context", &self.context)
	}
}

/// Shared by every metric that scores a lone response: clarity, formality,
/// helpfulness, simplicity, tone and toxicity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ResponseRequest {
	/// The response to evaluate.
	pub response: String,
}

impl Validate for ResponseRequest {
	fn validate(&self) -> Result<(), ValidationError> {
		non_empty("response", &self.response)
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SensitivityRequest {
	/// The response to evaluate.
	pub response: String,
	/// Topics to check the response against.
	pub topics: Vec<String>,
}

impl Validate for SensitivityRequest {
	fn validate(&self) -> Result<(), ValidationError> {
		non_empty("response", &self.response)?;
		if self.topics.is_empty() {
			return Err(ValidationError::new("topics", "must contain at least one topic"));
		}
		Ok(())
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CarbonRequest {
	/// Name of the processor, e.g. "AMD A12-9800".
	pub processor_name: String,
	/// Name of the cloud provider, e.g. "aws".
	pub provider_name: String,
	/// Region of the provider, e.g. "us-east-2".
	pub provider_region: String,
	/// Instance type, e.g. "a1.medium".
	pub instance_type: String,
	/// Average latency in milliseconds.
	pub average_latency: u64,
}

impl Validate for CarbonRequest {
	fn validate(&self) -> Result<(), ValidationError> {
		non_empty("processor_name", &self.processor_name)?;
		non_empty("provider_name", &self.provider_name)?;
		non_empty("provider_region", &self.provider_region)?;
		non_empty("instance_type", &self.instance_type)?;
		positive("average_latency", self.average_latency)
	}
}

/// Kind of model a cost estimate is computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum ModelType {
	#[serde(rename = "LLM")]
	Llm,
	Reranker,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CostRequest {
	/// Name of the model (non-empty).
	pub model_name: String,
	/// Type of the model: "LLM" or "Reranker".
	pub model_type: ModelType,
	/// Provider of the model (non-empty).
	pub model_provider: String,
	/// Number of queries to estimate cost for (> 0).
	pub number_of_queries: u64,
	/// Total prompt tokens (> 0).
	pub total_prompt_tokens: u64,
	/// Total completion tokens (> 0).
	pub total_completion_tokens: u64,
	/// Total tokens (> 0 if provided).
	pub total_tokens: Option<u64>,
	/// Instance type, for self-hosted models.
	pub instance_type: Option<String>,
	/// Average latency in milliseconds (> 0 if provided).
	pub average_latency: Option<f64>,
}

impl Validate for CostRequest {
	fn validate(&self) -> Result<(), ValidationError> {
		non_empty("model_name", &self.model_name)?;
		non_empty("model_provider", &self.model_provider)?;
		positive("number_of_queries", self.number_of_queries)?;
		positive("total_prompt_tokens", self.total_prompt_tokens)?;
		positive("total_completion_tokens", self.total_completion_tokens)?;
		if let Some(total) = self.total_tokens {
			positive("total_tokens", total)?;
		}
		non_empty_opt("instance_type", self.instance_type.as_deref())?;
		if let Some(latency) = self.average_latency {
			validate::positive_f64("average_latency", latency)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn cost() -> CostRequest {
		serde_json::from_value(json!({
			"model_name": "gpt-3.5-turbo",
			"model_type": "LLM",
			"model_provider": "OpenAI",
			"number_of_queries": 5,
			"total_prompt_tokens": 950,
			"total_completion_tokens": 50
		}))
		.unwrap()
	}

	#[test]
	fn test_cost_optional_fields_default_to_none() {
		let req = cost();
		assert_eq!(req.model_type, ModelType::Llm);
		assert!(req.total_tokens.is_none());
		assert!(req.instance_type.is_none());
		assert!(req.average_latency.is_none());
		assert!(req.validate().is_ok());

		let body = serde_json::to_value(&req).unwrap();
		assert_eq!(body["total_tokens"], serde_json::Value::Null);
		assert_eq!(body["model_type"], "LLM");
	}

	#[test]
	fn test_cost_rejects_unknown_model_type() {
		let err = serde_json::from_value::<CostRequest>(json!({
			"model_name": "gpt-3.5-turbo",
			"model_type": "Chatbot",
			"model_provider": "OpenAI",
			"number_of_queries": 5,
			"total_prompt_tokens": 950,
			"total_completion_tokens": 50
		}))
		.unwrap_err();
		assert!(err.to_string().contains("Chatbot"));
	}

	#[test]
	fn test_cost_rejects_zero_counts() {
		let mut req = cost();
		req.number_of_queries = 0;
		assert_eq!(req.validate().unwrap_err().field, "number_of_queries");

		let mut req = cost();
		req.total_tokens = Some(0);
		assert_eq!(req.validate().unwrap_err().field, "total_tokens");

		let mut req = cost();
		req.average_latency = Some(-3.0);
		assert_eq!(req.validate().unwrap_err().field, "average_latency");
	}

	#[test]
	fn test_missing_required_field_fails_decoding() {
		let err = serde_json::from_value::<FaithfulnessRequest>(json!({
			"query": "What is the capital of France?",
			"response": "The capital of France is Paris."
		}))
		.unwrap_err();
		assert!(err.to_string().contains("context"));
	}

	#[test]
	fn test_sensitivity_requires_topics() {
		let req = SensitivityRequest {
			response: "This is a sensitive topic.".into(),
			topics: vec![],
		};
		assert_eq!(req.validate().unwrap_err().field, "topics");
	}
}
