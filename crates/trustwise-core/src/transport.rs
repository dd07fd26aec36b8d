use std::fmt;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::config::{ApiVersion, TrustwiseConfig};
use crate::error::{Result, TrustwiseError};

/// Where a metric lives on the remote service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Route {
	pub version: ApiVersion,
	pub namespace: &'static str,
	pub metric: &'static str,
}

impl Route {
	pub fn new(version: ApiVersion, namespace: &'static str, metric: &'static str) -> Self {
		Self {
			version,
			namespace,
			metric,
		}
	}

	/// Path relative to the configured base URL.
	pub fn path(&self) -> String {
		match self.version {
			ApiVersion::V3 => format!("metrics/v3/{}", self.metric),
			ApiVersion::V4 => format!("metrics/v4/{}/{}", self.namespace, self.metric),
		}
	}
}

impl fmt::Display for Route {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}.{}.{}", self.version, self.namespace, self.metric)
	}
}

/// Carries one serialized metric request to the service.
#[async_trait]
pub trait Transport: Send + Sync {
	async fn post(&self, route: &Route, body: Value) -> Result<Value>;
}

pub struct HttpTransport {
	http: reqwest::Client,
	endpoint: Url,
}

impl fmt::Debug for HttpTransport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("HttpTransport")
			.field("endpoint", &self.endpoint.as_str())
			.finish()
	}
}

impl HttpTransport {
	pub fn new(config: &TrustwiseConfig) -> Result<Self> {
		Self::with_builder(config, reqwest::Client::builder())
	}

	fn with_builder(config: &TrustwiseConfig, builder: reqwest::ClientBuilder) -> Result<Self> {
		let api_key = config.require_api_key()?;
		let endpoint = config.endpoint()?;

		let mut auth = HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|_| {
			TrustwiseError::InvalidConfig("API key contains characters not allowed in a header".into())
		})?;
		auth.set_sensitive(true);
		let mut headers = HeaderMap::new();
		headers.insert(AUTHORIZATION, auth);

		let http = builder
			.default_headers(headers)
			.user_agent(concat!("trustwise-mcp/", env!("CARGO_PKG_VERSION")))
			.build()?;

		Ok(Self { http, endpoint })
	}

	pub fn endpoint(&self) -> &Url {
		&self.endpoint
	}
}

#[async_trait]
impl Transport for HttpTransport {
	async fn post(&self, route: &Route, body: Value) -> Result<Value> {
		let url = self
			.endpoint
			.join(&route.path())
			.map_err(|e| TrustwiseError::InvalidConfig(e.to_string()))?;
		debug!(route = %route, url = %url, "forwarding metric request");

		let resp = self.http.post(url).json(&body).send().await?;
		let status = resp.status();
		if !status.is_success() {
			let body = resp.text().await?;
			return Err(TrustwiseError::Api {
				status: status.as_u16(),
				body,
			});
		}
		Ok(resp.json::<Value>().await?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;
	use tokio::io::{AsyncReadExt, AsyncWriteExt};
	use tokio::net::TcpListener;
	use tokio::task::JoinHandle;

	/// Accepts one connection, captures the request, then writes `response`
	/// verbatim and closes.
	async fn serve_once(response: String) -> (String, JoinHandle<String>) {
		let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
		let addr = listener.local_addr().unwrap();
		let handle = tokio::spawn(async move {
			let (mut socket, _) = listener.accept().await.unwrap();
			let mut buf = Vec::new();
			let mut chunk = [0u8; 4096];
			loop {
				let n = socket.read(&mut chunk).await.unwrap();
				if n == 0 {
					break;
				}
				buf.extend_from_slice(&chunk[..n]);
				let text = String::from_utf8_lossy(&buf).to_string();
				if let Some(end) = text.find("\r\n\r\n") {
					let length = text[..end]
						.lines()
						.find_map(|l| {
							let (name, value) = l.split_once(':')?;
							name.eq_ignore_ascii_case("content-length")
								.then(|| value.trim().parse::<usize>().ok())
								.flatten()
						})
						.unwrap_or(0);
					if buf.len() >= end + 4 + length {
						break;
					}
				}
			}
			socket.write_all(response.as_bytes()).await.unwrap();
			socket.shutdown().await.ok();
			String::from_utf8_lossy(&buf).to_string()
		});
		(format!("http://{addr}/api"), handle)
	}

	fn reply(status: &str, body: &str) -> String {
		format!(
			"HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
			body.len()
		)
	}

	fn transport(base_url: &str) -> HttpTransport {
		let cfg = TrustwiseConfig::new("tw-test-key").base_url(base_url);
		HttpTransport::with_builder(&cfg, reqwest::Client::builder().no_proxy()).unwrap()
	}

	#[test]
	fn test_route_paths() {
		let v3 = Route::new(ApiVersion::V3, "metrics", "faithfulness");
		assert_eq!(v3.path(), "metrics/v3/faithfulness");
		let v4 = Route::new(ApiVersion::V4, "performance", "cost");
		assert_eq!(v4.path(), "metrics/v4/performance/cost");
		assert_eq!(v4.to_string(), "v4.performance.cost");
	}

	#[test]
	fn test_http_transport_requires_key() {
		let err = HttpTransport::new(&TrustwiseConfig::default()).unwrap_err();
		assert!(matches!(err, TrustwiseError::MissingApiKey));
	}

	#[test]
	fn test_http_transport_uses_override() {
		let cfg = TrustwiseConfig::new("key").base_url("http://127.0.0.1:9000");
		let transport = HttpTransport::new(&cfg).unwrap();
		assert_eq!(transport.endpoint().as_str(), "http://127.0.0.1:9000/");
	}

	#[tokio::test]
	async fn test_post_sends_bearer_and_decodes_body() {
		let (base, server) = serve_once(reply("200 OK", r#"{"score":100,"labels":["calm"]}"#)).await;
		let route = Route::new(ApiVersion::V3, "metrics", "tone");

		let out = transport(&base)
			.post(&route, json!({"response": "You are great."}))
			.await
			.unwrap();
		assert_eq!(out, json!({"score": 100, "labels": ["calm"]}));

		let request = server.await.unwrap();
		assert!(request.starts_with("POST /api/metrics/v3/tone HTTP/1.1\r\n"), "{request}");
		let lower = request.to_ascii_lowercase();
		assert!(lower.contains("\r\nauthorization: bearer tw-test-key\r\n"), "{request}");
		assert!(lower.contains("\r\ncontent-type: application/json\r\n"), "{request}");
		assert!(request.ends_with(r#"{"response":"You are great."}"#), "{request}");
	}

	#[tokio::test]
	async fn test_post_maps_error_status_to_api_error() {
		let (base, server) = serve_once(reply("401 Unauthorized", r#"{"detail":"invalid key"}"#)).await;
		let route = Route::new(ApiVersion::V4, "performance", "cost");

		let err = transport(&base).post(&route, json!({})).await.unwrap_err();
		match err {
			TrustwiseError::Api { status, body } => {
				assert_eq!(status, 401);
				assert_eq!(body, r#"{"detail":"invalid key"}"#);
			}
			other => panic!("expected Api error, got {other}"),
		}

		let request = server.await.unwrap();
		assert!(request.starts_with("POST /api/metrics/v4/performance/cost HTTP/1.1\r\n"), "{request}");
	}

	#[tokio::test]
	async fn test_unreadable_error_body_is_reported() {
		// Promises more bytes than it sends, so reading the body fails.
		let truncated = "HTTP/1.1 502 Bad Gateway\r\nContent-Length: 64\r\nConnection: close\r\n\r\nupstream".to_string();
		let (base, server) = serve_once(truncated).await;
		let route = Route::new(ApiVersion::V3, "metrics", "clarity");

		let err = transport(&base).post(&route, json!({})).await.unwrap_err();
		assert!(matches!(err, TrustwiseError::Http(_)), "{err}");
		server.await.unwrap();
	}
}
