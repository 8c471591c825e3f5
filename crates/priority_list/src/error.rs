//! Error types for priority handling.

use std::convert::Infallible;

use thiserror::Error;

/// Errors raised at the priority list's insert boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PriorityError {
	/// The supplied priority is not representable as a signed 64-bit integer.
	#[error("priority argument must be an integer (got {input})")]
	InvalidArgument {
		/// Rendering of the rejected input.
		input: String,
	},
}

impl PriorityError {
	pub(crate) fn invalid(input: impl ToString) -> Self {
		Self::InvalidArgument { input: input.to_string() }
	}
}

impl From<Infallible> for PriorityError {
	fn from(never: Infallible) -> Self {
		match never {}
	}
}

/// Result type for priority list operations.
pub type Result<T> = std::result::Result<T, PriorityError>;
