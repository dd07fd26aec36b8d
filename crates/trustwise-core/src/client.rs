use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use trustwise_types::requests::{v3, v4};
use trustwise_types::responses::*;
use trustwise_types::Validate;

use crate::config::{ApiVersion, TrustwiseConfig};
use crate::error::Result;
use crate::transport::{HttpTransport, Route, Transport};

/// Entry point to the metrics API. Cheap to clone; clones share the transport.
#[derive(Clone)]
pub struct TrustwiseClient {
	transport: Arc<dyn Transport>,
}

impl fmt::Debug for TrustwiseClient {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TrustwiseClient").finish_non_exhaustive()
	}
}

impl TrustwiseClient {
	/// Builds an HTTP-backed client. Fails when no API key is configured
	/// or the base URL does not parse.
	pub fn new(config: &TrustwiseConfig) -> Result<Self> {
		let transport = HttpTransport::new(config)?;
		Ok(Self::with_transport(Arc::new(transport)))
	}

	pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
		Self { transport }
	}

	/// Unversioned (v3) surface.
	pub fn metrics(&self) -> Metrics<'_> {
		Metrics { client: self }
	}

	pub fn safety(&self) -> Safety<'_> {
		Safety { client: self }
	}

	pub fn alignment(&self) -> Alignment<'_> {
		Alignment { client: self }
	}

	pub fn performance(&self) -> Performance<'_> {
		Performance { client: self }
	}
}

/// One metric on one API version, bound to a client.
pub struct MetricEndpoint<'c, Req, Resp> {
	client: &'c TrustwiseClient,
	route: Route,
	_shape: PhantomData<fn(Req) -> Resp>,
}

impl<'c, Req, Resp> MetricEndpoint<'c, Req, Resp>
where
	Req: Serialize + Validate,
	Resp: DeserializeOwned,
{
	fn new(client: &'c TrustwiseClient, route: Route) -> Self {
		Self {
			client,
			route,
			_shape: PhantomData,
		}
	}

	pub fn route(&self) -> Route {
		self.route
	}

	/// Checks the request locally, then makes exactly one call to the service.
	pub async fn evaluate(&self, request: Req) -> Result<Resp> {
		let (typed, _) = self.evaluate_raw(request).await?;
		Ok(typed)
	}

	/// Like [`evaluate`](Self::evaluate), but also returns the service's JSON
	/// exactly as received. The typed value only confirms its shape.
	pub async fn evaluate_raw(&self, request: Req) -> Result<(Resp, Value)> {
		request.validate()?;
		let body = serde_json::to_value(&request)?;
		debug!(route = %self.route, "evaluating metric");
		let raw = self.client.transport.post(&self.route, body).await?;
		let typed = Resp::deserialize(&raw)?;
		Ok((typed, raw))
	}
}

macro_rules! namespace {
	(
		$(#[$attr:meta])*
		$name:ident => ($version:expr, $ns:literal) {
			$($metric:ident: $req:ty => $resp:ty,)*
		}
	) => {
		$(#[$attr])*
		#[derive(Debug, Clone, Copy)]
		pub struct $name<'c> {
			client: &'c TrustwiseClient,
		}

		impl<'c> $name<'c> {
			$(
				pub fn $metric(&self) -> MetricEndpoint<'c, $req, $resp> {
					MetricEndpoint::new(self.client, Route::new($version, $ns, stringify!($metric)))
				}
			)*
		}
	};
}

namespace! {
	/// Every metric of the unversioned API.
	Metrics => (ApiVersion::V3, "metrics") {
		faithfulness: v3::FaithfulnessRequest => FaithfulnessResponse,
		answer_relevancy: v3::AnswerRelevancyRequest => AnswerRelevancyResponse,
		context_relevancy: v3::ContextRelevancyRequest => ContextRelevancyResponse,
		pii: v3::PiiRequest => PiiResponse,
		prompt_injection: v3::PromptInjectionRequest => PromptInjectionResponse,
		summarization: v3::SummarizationRequest => SummarizationResponse,
		clarity: v3::ResponseRequest => ClarityResponse,
		formality: v3::ResponseRequest => FormalityResponse,
		helpfulness: v3::ResponseRequest => HelpfulnessResponse,
		sensitivity: v3::SensitivityRequest => SensitivityResponse,
		simplicity: v3::ResponseRequest => SimplicityResponse,
		tone: v3::ResponseRequest => ToneResponse,
		toxicity: v3::ResponseRequest => ToxicityResponse,
		carbon: v3::CarbonRequest => CarbonResponse,
		cost: v3::CostRequest => CostResponse,
	}
}

namespace! {
	/// Grounding and risk metrics of the v4 API.
	Safety => (ApiVersion::V4, "safety") {
		faithfulness: v4::FaithfulnessRequest => FaithfulnessResponse,
		answer_relevancy: v4::AnswerRelevancyRequest => AnswerRelevancyResponse,
		context_relevancy: v4::ContextRelevancyRequest => ContextRelevancyResponse,
		pii: v4::PiiRequest => PiiResponse,
		prompt_injection: v4::PromptInjectionRequest => PromptInjectionResponse,
		summarization: v4::SummarizationRequest => SummarizationResponse,
	}
}

namespace! {
	/// Style and tone metrics of the v4 API.
	Alignment => (ApiVersion::V4, "alignment") {
		clarity: v4::QueryResponseRequest => ClarityResponse,
		formality: v4::ResponseRequest => FormalityResponse,
		helpfulness: v4::QueryResponseRequest => HelpfulnessResponse,
		sensitivity: v4::SensitivityRequest => SensitivityResponse,
		simplicity: v4::ResponseRequest => SimplicityResponse,
		tone: v4::ResponseRequest => ToneResponse,
		toxicity: v4::ResponseRequest => ToxicityResponse,
	}
}

namespace! {
	/// Carbon and cost estimates of the v4 API.
	Performance => (ApiVersion::V4, "performance") {
		carbon: v4::CarbonRequest => CarbonResponse,
		cost: v4::CostRequest => CostResponse,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::TrustwiseError;
	use crate::testing::RecordingTransport;
	use serde_json::json;
	use trustwise_types::ContextNode;

	fn faithfulness_request() -> v3::FaithfulnessRequest {
		v3::FaithfulnessRequest {
			query: "What is the capital of France?".into(),
			response: "The capital of France is Paris.".into(),
			context: vec![ContextNode::new("1", 1.0, "Paris is the capital of France.")],
		}
	}

	#[tokio::test]
	async fn test_evaluate_forwards_body_and_decodes() {
		let transport = Arc::new(RecordingTransport::with_sample_responses());
		let client = TrustwiseClient::with_transport(transport.clone());

		let resp = client.metrics().faithfulness().evaluate(faithfulness_request()).await.unwrap();
		assert_eq!(resp.score, 99.87);

		let calls = transport.calls().await;
		assert_eq!(calls.len(), 1);
		assert_eq!(calls[0].route, Route::new(ApiVersion::V3, "metrics", "faithfulness"));
		assert_eq!(
			calls[0].body,
			json!({
				"query": "What is the capital of France?",
				"response": "The capital of France is Paris.",
				"context": [{"node_id": "1", "node_score": 1.0, "node_text": "Paris is the capital of France."}]
			})
		);
	}

	#[tokio::test]
	async fn test_invalid_request_never_reaches_transport() {
		let transport = Arc::new(RecordingTransport::with_sample_responses());
		let client = TrustwiseClient::with_transport(transport.clone());

		let mut req = faithfulness_request();
		req.context.clear();
		let err = client.metrics().faithfulness().evaluate(req).await.unwrap_err();
		assert!(err.is_validation());
		assert_eq!(transport.call_count().await, 0);
	}

	#[tokio::test]
	async fn test_api_error_surfaces_unchanged() {
		let transport = Arc::new(RecordingTransport::new().fail("toxicity", 401, "invalid api key"));
		let client = TrustwiseClient::with_transport(transport.clone());

		let err = client
			.alignment()
			.toxicity()
			.evaluate(v4::ResponseRequest { response: "You are great.".into() })
			.await
			.unwrap_err();
		match err {
			TrustwiseError::Api { status, body } => {
				assert_eq!(status, 401);
				assert_eq!(body, "invalid api key");
			}
			other => panic!("unexpected error: {other:?}"),
		}
		assert_eq!(transport.call_count().await, 1);
	}

	#[tokio::test]
	async fn test_identical_calls_are_independent() {
		let transport = Arc::new(RecordingTransport::with_sample_responses());
		let client = TrustwiseClient::with_transport(transport.clone());
		let endpoint = client.metrics().faithfulness();

		let (a, b) = futures::join!(
			endpoint.evaluate(faithfulness_request()),
			endpoint.evaluate(faithfulness_request())
		);
		assert_eq!(a.unwrap(), b.unwrap());

		let calls = transport.calls().await;
		assert_eq!(calls.len(), 2);
		assert_eq!(calls[0], calls[1]);
	}

	#[test]
	fn test_namespaces_route_to_v4() {
		let client = TrustwiseClient::with_transport(Arc::new(RecordingTransport::new()));
		assert_eq!(client.safety().context_relevancy().route().path(), "metrics/v4/safety/context_relevancy");
		assert_eq!(client.alignment().clarity().route().path(), "metrics/v4/alignment/clarity");
		assert_eq!(client.performance().cost().route().path(), "metrics/v4/performance/cost");
		assert_eq!(client.metrics().cost().route().path(), "metrics/v3/cost");
	}

	#[test]
	fn test_new_without_key_fails() {
		let err = TrustwiseClient::new(&TrustwiseConfig::default()).unwrap_err();
		assert!(matches!(err, TrustwiseError::MissingApiKey));
	}
}
