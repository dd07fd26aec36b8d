use crate::context::ContextNode;

/// A request that failed local checks before reaching the remote service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("validation error on `{field}`: {message}")]
pub struct ValidationError {
	pub field: String,
	pub message: String,
}

impl ValidationError {
	pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
		Self {
			field: field.into(),
			message: message.into(),
		}
	}

	/// Wraps a decoding failure of caller-supplied tool arguments.
	pub fn arguments(err: serde_json::Error) -> Self {
		Self::new("arguments", err.to_string())
	}
}

pub trait Validate {
	fn validate(&self) -> Result<(), ValidationError>;
}

pub(crate) fn non_empty(field: &str, value: &str) -> Result<(), ValidationError> {
	if value.trim().is_empty() {
		return Err(ValidationError::new(field, "must be a non-empty string"));
	}
	Ok(())
}

pub(crate) fn non_empty_opt(field: &str, value: Option<&str>) -> Result<(), ValidationError> {
	match value {
		Some(v) => non_empty(field, v),
		None => Ok(()),
	}
}

pub(crate) fn positive(field: &str, value: u64) -> Result<(), ValidationError> {
	if value == 0 {
		return Err(ValidationError::new(field, "must be greater than 0"));
	}
	Ok(())
}

pub(crate) fn positive_f64(field: &str, value: f64) -> Result<(), ValidationError> {
	if !value.is_finite() || value <= 0.0 {
		return Err(ValidationError::new(field, "must be a finite number greater than 0"));
	}
	Ok(())
}

pub(crate) fn context(field: &str, nodes: &[ContextNode]) -> Result<(), ValidationError> {
	if nodes.is_empty() {
		return Err(ValidationError::new(field, "must contain at least one context node"));
	}
	for (idx, node) in nodes.iter().enumerate() {
		node.validate()
			.map_err(|e| ValidationError::new(format!("{field}[{idx}].{}", e.field), e.message))?;
	}
	Ok(())
}

pub(crate) fn context_opt(field: &str, nodes: Option<&[ContextNode]>) -> Result<(), ValidationError> {
	match nodes {
		Some(nodes) => context(field, nodes),
		None => Ok(()),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_non_empty_rejects_whitespace() {
		let err = non_empty("query", "   ").unwrap_err();
		assert_eq!(err.field, "query");
	}

	#[test]
	fn test_positive_f64_rejects_nan() {
		assert!(positive_f64("average_latency", f64::NAN).is_err());
		assert!(positive_f64("average_latency", 0.0).is_err());
		assert!(positive_f64("average_latency", 12.5).is_ok());
	}

	#[test]
	fn test_context_reports_node_index() {
		let nodes = vec![
			ContextNode::new("1", 1.0, "Paris is the capital of France."),
			ContextNode::new("2", 0.5, ""),
		];
		let err = context("context", &nodes).unwrap_err();
		assert_eq!(err.field, "context[1].node_text");
	}

	#[test]
	fn test_empty_context_rejected() {
		assert!(context("context", &[]).is_err());
		assert!(context_opt("context", None).is_ok());
	}
}
