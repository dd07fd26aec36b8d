//! Substitute transport for exercising clients and registries without a
//! network.
//!
//! # Example
//! ```ignore
//! let transport = Arc::new(RecordingTransport::with_sample_responses());
//! let client = Arc::new(TrustwiseClient::with_transport(transport.clone()));
//! let registry = ToolRegistry::new(client, ApiVersion::V3);
//!
//! registry.call("tone_metric", args).await?;
//! assert_eq!(transport.call_count().await, 1);
//! ```

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::Mutex;

use crate::error::{Result, TrustwiseError};
use crate::transport::{Route, Transport};

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
	pub route: Route,
	pub body: Value,
}

#[derive(Debug, Clone)]
enum Canned {
	Ok(Value),
	Fail { status: u16, body: String },
}

/// Records every request and answers from canned responses keyed by metric
/// name. Metrics without a canned response answer HTTP 404.
#[derive(Debug, Default)]
pub struct RecordingTransport {
	responses: HashMap<String, Canned>,
	calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingTransport {
	pub fn new() -> Self {
		Self::default()
	}

	/// A transport answering every metric with [`sample_response`].
	pub fn with_sample_responses() -> Self {
		METRICS
			.iter()
			.fold(Self::new(), |t, metric| t.respond(metric, sample_response(metric)))
	}

	pub fn respond(mut self, metric: &str, response: Value) -> Self {
		self.responses.insert(metric.to_string(), Canned::Ok(response));
		self
	}

	pub fn fail(mut self, metric: &str, status: u16, body: impl Into<String>) -> Self {
		self.responses.insert(
			metric.to_string(),
			Canned::Fail {
				status,
				body: body.into(),
			},
		);
		self
	}

	pub async fn calls(&self) -> Vec<RecordedCall> {
		self.calls.lock().await.clone()
	}

	pub async fn call_count(&self) -> usize {
		self.calls.lock().await.len()
	}
}

#[async_trait]
impl Transport for RecordingTransport {
	async fn post(&self, route: &Route, body: Value) -> Result<Value> {
		self.calls.lock().await.push(RecordedCall { route: *route, body });
		match self.responses.get(route.metric) {
			Some(Canned::Ok(v)) => Ok(v.clone()),
			Some(Canned::Fail { status, body }) => Err(TrustwiseError::Api {
				status: *status,
				body: body.clone(),
			}),
			None => Err(TrustwiseError::Api {
				status: 404,
				body: format!("no canned response for {route}"),
			}),
		}
	}
}

const METRICS: &[&str] = &[
	"faithfulness",
	"answer_relevancy",
	"context_relevancy",
	"pii",
	"prompt_injection",
	"summarization",
	"clarity",
	"formality",
	"helpfulness",
	"sensitivity",
	"simplicity",
	"tone",
	"toxicity",
	"carbon",
	"cost",
];

/// A plausible service response for `metric`, shaped like the real one.
pub fn sample_response(metric: &str) -> Value {
	match metric {
		"faithfulness" => json!({
			"score": 99.87,
			"facts": [{
				"statement": "The capital of France is Paris.",
				"label": "Safe",
				"prob": 0.99,
				"sentence_span": [0, 31]
			}]
		}),
		"answer_relevancy" => json!({
			"score": 96.2,
			"generated_question": "What is the capital city of France?"
		}),
		"context_relevancy" => json!({
			"score": 88.4,
			"topics": ["geography"],
			"scores": [88.4]
		}),
		"pii" => json!({
			"identified_pii": [{
				"interval": [12, 32],
				"string": "john.doe@example.com",
				"category": "EMAIL"
			}]
		}),
		"formality" => json!({
			"score": 71.5,
			"sentences": ["The capital of France is Paris."],
			"scores": [71.5]
		}),
		"sensitivity" => json!({ "scores": { "politics": 12.5, "religion": 3.25 } }),
		"tone" => json!({ "labels": ["neutral", "confident"], "scores": [81.5, 11.25] }),
		"toxicity" => json!({ "labels": ["toxic", "insult"], "scores": [0.5, 0.25] }),
		"carbon" => json!({
			"carbon_emitted": 0.0032,
			"sci_per_api_call": 0.0021,
			"sci_per_10k_calls": 21.5
		}),
		"cost" => json!({
			"cost_estimate_per_run": 0.0125,
			"total_project_cost_estimate": 0.0625
		}),
		_ => json!({ "score": 75.5 }),
	}
}
