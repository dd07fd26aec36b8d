//! trustwise-types: request and response shapes shared by the Trustwise
//! metrics client and the MCP tool registry.

pub mod context;
pub mod responses;
pub mod validate;

pub mod requests {
	pub mod v3;
	pub mod v4;
}

pub use context::{Context, ContextNode};
pub use requests::v3::ModelType;
pub use responses::*;
pub use validate::{Validate, ValidationError};
