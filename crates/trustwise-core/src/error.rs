use thiserror::Error;
use trustwise_types::ValidationError;

#[derive(Debug, Error)]
pub enum TrustwiseError {
	#[error("missing API key: set TW_API_KEY")]
	MissingApiKey,

	#[error("invalid configuration: {0}")]
	InvalidConfig(String),

	#[error(transparent)]
	Validation(#[from] ValidationError),

	#[error("request to Trustwise failed: {0}")]
	Http(#[from] reqwest::Error),

	#[error("Trustwise API returned HTTP {status}: {body}")]
	Api { status: u16, body: String },

	#[error("failed to decode Trustwise response: {0}")]
	Decode(#[from] serde_json::Error),

	#[error("unknown tool: {0}")]
	UnknownTool(String),
}

impl TrustwiseError {
	pub fn is_validation(&self) -> bool {
		matches!(self, TrustwiseError::Validation(_))
	}
}

pub type Result<T> = std::result::Result<T, TrustwiseError>;
