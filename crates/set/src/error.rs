use thiserror::Error;

/// Errors raised by set operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetError {
	/// The element is not a member of the set.
	#[error("element does not exist")]
	KeyError,
}

/// Result type for set operations.
pub type Result<T> = std::result::Result<T, SetError>;
