//! Typed results returned by the remote metric service.
//!
//! These are a shape check: the registry hands callers the service's own
//! JSON, not a re-encoding of these structs. Fields the service may omit are
//! `Option`; unmodelled fields are kept in `extra`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fact {
	pub statement: String,
	pub label: String,
	pub prob: f64,
	pub sentence_span: Option<Vec<u64>>,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaithfulnessResponse {
	pub score: f64,
	pub facts: Option<Vec<Fact>>,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRelevancyResponse {
	pub score: f64,
	pub generated_question: Option<String>,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextRelevancyResponse {
	pub score: f64,
	pub topics: Option<Vec<String>>,
	pub scores: Option<Vec<f64>>,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PiiEntity {
	/// Character offsets `[start, end]` of the match.
	pub interval: Vec<u64>,
	pub string: String,
	pub category: String,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PiiResponse {
	pub identified_pii: Option<Vec<PiiEntity>>,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// Result of every metric that reports a single score and nothing else
/// the client relies on: prompt injection, summarization, clarity,
/// helpfulness and simplicity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResponse {
	pub score: f64,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

pub type PromptInjectionResponse = ScoreResponse;
pub type SummarizationResponse = ScoreResponse;
pub type ClarityResponse = ScoreResponse;
pub type HelpfulnessResponse = ScoreResponse;
pub type SimplicityResponse = ScoreResponse;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormalityResponse {
	pub score: f64,
	pub sentences: Option<Vec<String>>,
	pub scores: Option<Vec<f64>>,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityResponse {
	/// Score per requested topic.
	pub scores: BTreeMap<String, f64>,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// Label/score pairs, used by tone and toxicity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelScoresResponse {
	pub labels: Vec<String>,
	pub scores: Vec<f64>,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

pub type ToneResponse = LabelScoresResponse;
pub type ToxicityResponse = LabelScoresResponse;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarbonResponse {
	pub carbon_emitted: f64,
	pub sci_per_api_call: f64,
	pub sci_per_10k_calls: f64,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostResponse {
	pub cost_estimate_per_run: f64,
	pub total_project_cost_estimate: f64,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_unknown_fields_survive() {
		let raw = json!({
			"score": 92.5,
			"facts": [{
				"statement": "Paris is the capital of France.",
				"label": "Safe",
				"prob": 0.98,
				"sentence_span": [0, 31],
				"source": "node-1"
			}],
			"model_version": "2024-10"
		});
		let parsed: FaithfulnessResponse = serde_json::from_value(raw.clone()).unwrap();
		assert_eq!(parsed.facts.as_ref().map(Vec::len), Some(1));
		assert_eq!(parsed.extra["model_version"], "2024-10");
		assert_eq!(serde_json::to_value(&parsed).unwrap(), raw);
	}

	#[test]
	fn test_explicit_null_survives() {
		let raw = json!({ "score": 1.5, "generated_question": null });
		let parsed: AnswerRelevancyResponse = serde_json::from_value(raw.clone()).unwrap();
		assert!(parsed.generated_question.is_none());
		assert_eq!(serde_json::to_value(&parsed).unwrap(), raw);
	}

	#[test]
	fn test_optional_fields_not_padded() {
		let parsed: PiiResponse = serde_json::from_value(json!({})).unwrap();
		assert!(parsed.identified_pii.is_none());
	}

	#[test]
	fn test_missing_score_is_rejected() {
		assert!(serde_json::from_value::<ScoreResponse>(json!({ "detail": "oops" })).is_err());
	}
}
