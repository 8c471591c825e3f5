//! Ordered multi-bucket priority collection.
//!
//! [`PriorityList`] groups values by a signed integer priority and walks them
//! highest priority first, oldest first within a priority. Unlike a priority
//! queue, visiting a value does not remove it, and the traversal can be
//! restarted at any time with [`PriorityList::rewind`].
//!
//! The list is not internally synchronized. Sharing one across threads
//! requires an external exclusive lock around every call, cursor calls
//! included.

/// Arena-style storage for one priority tier.
mod bucket;
/// Error type for priority conversions.
pub mod error;
/// The priority list, its cursor and iterators.
pub mod list;
/// Read-time projection of traversal items.
pub mod mode;
/// Integer priority newtype and its fallible conversions.
pub mod priority;

pub use error::{PriorityError, Result};
pub use list::{CursorKey, Entries, Iter, PriorityList};
pub use mode::{DisplayMode, Extracted};
pub use priority::Priority;
