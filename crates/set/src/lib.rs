//! Insertion-ordered sets keyed by value equality.
//!
//! [`Set`] is a thin wrapper over an ordered hash set. [`HistorySet`] adds
//! change logs of what was added and removed since the last
//! [`reset`](HistorySet::reset).

/// Error type for set operations.
pub mod error;
/// Set with added/removed change logs.
pub mod history;
/// Plain insertion-ordered set.
pub mod set;

pub use error::{Result, SetError};
pub use history::{HistorySet, ResetScope};
pub use set::Set;
