use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::validate::{non_empty, ValidationError, Validate};

/// A retrieved-evidence fragment supplied alongside a query/response pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ContextNode {
	/// Identifier of the retrieved node.
	pub node_id: String,
	/// Retrieval relevance score of the node.
	pub node_score: f64,
	/// Text content of the node.
	pub node_text: String,
}

impl ContextNode {
	pub fn new(node_id: impl Into<String>, node_score: f64, node_text: impl Into<String>) -> Self {
		Self {
			node_id: node_id.into(),
			node_score,
			node_text: node_text.into(),
		}
	}
}

impl Validate for ContextNode {
	fn validate(&self) -> Result<(), ValidationError> {
		non_empty("node_id", &self.node_id)?;
		non_empty("node_text", &self.node_text)?;
		if !self.node_score.is_finite() {
			return Err(ValidationError::new("node_score", "must be a finite number"));
		}
		Ok(())
	}
}

pub type Context = Vec<ContextNode>;
