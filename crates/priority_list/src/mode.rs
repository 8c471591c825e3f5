use strum::{Display, EnumIter, EnumString};

/// Selects what one traversal step yields.
///
/// Purely a read-time projection: storage and ordering are unaffected. Parses
/// from and displays as `data`, `priority` or `both`.
#[derive(Debug, Default, Display, EnumString, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(rename_all = "snake_case"))]
pub enum DisplayMode {
	/// Yield the stored value alone.
	#[default]
	Data,
	/// Yield the priority alone, once per stored value.
	Priority,
	/// Yield the value paired with its priority.
	Both,
}

impl DisplayMode {
	/// Projects one `(value, priority)` pair according to this mode.
	pub fn project<T>(self, data: &T, priority: i64) -> Extracted<'_, T> {
		match self {
			Self::Data => Extracted::Data(data),
			Self::Priority => Extracted::Priority(priority),
			Self::Both => Extracted::Both { data, priority },
		}
	}
}

/// A traversal item shaped by a [`DisplayMode`].
#[derive(Debug, PartialEq, Eq)]
pub enum Extracted<'a, T> {
	/// The value alone.
	Data(&'a T),
	/// The priority alone.
	Priority(i64),
	/// The value and its priority.
	Both {
		/// The stored value.
		data: &'a T,
		/// The value's priority.
		priority: i64,
	},
}

impl<T> Clone for Extracted<'_, T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T> Copy for Extracted<'_, T> {}

impl<'a, T> Extracted<'a, T> {
	/// Returns the value, unless this item carries only a priority.
	pub fn data(self) -> Option<&'a T> {
		match self {
			Self::Data(data) | Self::Both { data, .. } => Some(data),
			Self::Priority(_) => None,
		}
	}

	/// Returns the priority, unless this item carries only a value.
	pub fn priority(self) -> Option<i64> {
		match self {
			Self::Priority(priority) | Self::Both { priority, .. } => Some(priority),
			Self::Data(_) => None,
		}
	}
}
