use std::fmt;
use std::str::FromStr;

use crate::error::PriorityError;


/// A bucket key: any signed 64-bit integer, negative values included.
///
/// Lossless integer types convert infallibly. Wider integers, floats and text
/// go through `TryFrom`/`FromStr` and fail with
/// [`PriorityError::InvalidArgument`] when the input is not an integer in
/// range.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct Priority(i64);

impl Priority {
	/// Wraps a raw priority.
	pub const fn new(priority: i64) -> Self {
		Self(priority)
	}

	/// Returns the raw priority.
	pub const fn get(self) -> i64 {
		self.0
	}
}

impl fmt::Display for Priority {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.0.fmt(f)
	}
}

impl From<Priority> for i64 {
	fn from(priority: Priority) -> Self {
		priority.0
	}
}

macro_rules! lossless_from {
	($($ty:ty),* $(,)?) => {
		$(
			impl From<$ty> for Priority {
				fn from(priority: $ty) -> Self {
					Self(i64::from(priority))
				}
			}
		)*
	};
}

macro_rules! checked_try_from {
	($($ty:ty),* $(,)?) => {
		$(
			impl TryFrom<$ty> for Priority {
				type Error = PriorityError;

				fn try_from(priority: $ty) -> Result<Self, Self::Error> {
					i64::try_from(priority)
						.map(Self)
						.map_err(|_| PriorityError::invalid(priority))
				}
			}
		)*
	};
}

lossless_from!(i8, i16, i32, i64, u8, u16, u32);
checked_try_from!(u64, usize, isize, i128, u128);

impl TryFrom<f64> for Priority {
	type Error = PriorityError;

	/// Accepts only finite, integral values inside the `i64` range.
	fn try_from(priority: f64) -> Result<Self, Self::Error> {
		// i64::MAX as f64 rounds up to 2^63, which is itself out of range.
		const UPPER: f64 = 9_223_372_036_854_775_808.0;
		const LOWER: f64 = -9_223_372_036_854_775_808.0;

		if priority.is_finite() && priority.fract() == 0.0 && (LOWER..UPPER).contains(&priority) {
			Ok(Self(priority as i64))
		} else {
			Err(PriorityError::invalid(priority))
		}
	}
}

impl TryFrom<f32> for Priority {
	type Error = PriorityError;

	fn try_from(priority: f32) -> Result<Self, Self::Error> {
		Self::try_from(f64::from(priority))
	}
}

impl FromStr for Priority {
	type Err = PriorityError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		s.trim().parse::<i64>().map(Self).map_err(|_| PriorityError::invalid(s))
	}
}

impl TryFrom<&str> for Priority {
	type Error = PriorityError;

	fn try_from(priority: &str) -> Result<Self, Self::Error> {
		priority.parse()
	}
}
