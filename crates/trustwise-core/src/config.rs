use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Result, TrustwiseError};

pub const DEFAULT_BASE_URL: &str = "https://api.trustwise.ai";

/// Which shape of the metrics API the tools are registered against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiVersion {
	/// Unversioned surface: every metric under `metrics`.
	#[default]
	V3,
	/// Namespaced surface: `safety`, `alignment` and `performance`.
	V4,
}

impl ApiVersion {
	pub fn as_str(&self) -> &'static str {
		match self {
			ApiVersion::V3 => "v3",
			ApiVersion::V4 => "v4",
		}
	}
}

impl fmt::Display for ApiVersion {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for ApiVersion {
	type Err = TrustwiseError;

	fn from_str(s: &str) -> Result<Self> {
		match s.trim().to_lowercase().as_str() {
			"v3" | "3" => Ok(ApiVersion::V3),
			"v4" | "4" => Ok(ApiVersion::V4),
			other => Err(TrustwiseError::InvalidConfig(format!(
				"unsupported API version '{other}' (expected v3 or v4)"
			))),
		}
	}
}

/// Settings the client is built from. Nothing is checked until
/// [`crate::TrustwiseClient::new`] runs.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct TrustwiseConfig {
	#[serde(default)]
	pub api_key: Option<String>,
	#[serde(default)]
	pub base_url: Option<String>,
	#[serde(default)]
	pub api_version: ApiVersion,
}

impl fmt::Debug for TrustwiseConfig {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TrustwiseConfig")
			.field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
			.field("base_url", &self.base_url)
			.field("api_version", &self.api_version)
			.finish()
	}
}

impl TrustwiseConfig {
	pub fn new(api_key: impl Into<String>) -> Self {
		Self {
			api_key: Some(api_key.into()),
			..Self::default()
		}
	}

	pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = Some(base_url.into());
		self
	}

	pub fn api_version(mut self, version: ApiVersion) -> Self {
		self.api_version = version;
		self
	}

	pub fn require_api_key(&self) -> Result<&str> {
		self.api_key
			.as_deref()
			.filter(|k| !k.trim().is_empty())
			.ok_or(TrustwiseError::MissingApiKey)
	}

	/// The endpoint to send requests to. An empty override counts as unset.
	/// The returned URL always ends in `/` so routes join beneath it.
	pub fn endpoint(&self) -> Result<Url> {
		let raw = self
			.base_url
			.as_deref()
			.map(str::trim)
			.filter(|u| !u.is_empty())
			.unwrap_or(DEFAULT_BASE_URL);
		let mut url = Url::parse(raw)
			.map_err(|e| TrustwiseError::InvalidConfig(format!("invalid base URL '{raw}': {e}")))?;
		if url.cannot_be_a_base() {
			return Err(TrustwiseError::InvalidConfig(format!(
				"base URL '{raw}' cannot have paths appended"
			)));
		}
		if !url.path().ends_with('/') {
			let path = format!("{}/", url.path());
			url.set_path(&path);
		}
		Ok(url)
	}
}
