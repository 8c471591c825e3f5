use std::iter::FusedIterator;
use std::slice;

use rustc_hash::FxHashMap;

use super::PriorityList;
use crate::bucket::{Bucket, Values};
use crate::mode::{DisplayMode, Extracted};

/// Borrowing traversal of a [`PriorityList`], independent of its cursor.
///
/// Yields `(priority, value)` pairs highest priority first, oldest first
/// within a priority.
#[derive(Debug)]
pub struct Iter<'a, T> {
	buckets: &'a FxHashMap<i64, Bucket<T>>,
	priorities: slice::Iter<'a, i64>,
	tier: Option<(i64, Values<'a, T>)>,
	remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
	type Item = (i64, &'a T);

	fn next(&mut self) -> Option<Self::Item> {
		loop {
			if let Some((priority, values)) = &mut self.tier
				&& let Some(value) = values.next()
			{
				self.remaining -= 1;
				return Some((*priority, value));
			}
			let &priority = self.priorities.next()?;
			self.tier = self.buckets.get(&priority).map(|bucket| (priority, bucket.values()));
		}
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.remaining, Some(self.remaining))
	}
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Traversal items projected through the list's [`DisplayMode`].
#[derive(Debug)]
pub struct Entries<'a, T> {
	inner: Iter<'a, T>,
	mode: DisplayMode,
}

impl<'a, T> Iterator for Entries<'a, T> {
	type Item = Extracted<'a, T>;

	fn next(&mut self) -> Option<Self::Item> {
		let (priority, data) = self.inner.next()?;
		Some(self.mode.project(data, priority))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}
}

impl<T> ExactSizeIterator for Entries<'_, T> {}

impl<T> FusedIterator for Entries<'_, T> {}

impl<T> PriorityList<T> {
	/// Iterates `(priority, value)` pairs in traversal order without moving the cursor.
	pub fn iter(&self) -> Iter<'_, T> {
		Iter {
			buckets: &self.buckets,
			priorities: self.priorities.iter(),
			tier: None,
			remaining: self.len,
		}
	}

	/// Iterates items shaped by the display mode, in traversal order.
	pub fn entries(&self) -> Entries<'_, T> {
		Entries {
			inner: self.iter(),
			mode: self.mode,
		}
	}
}

impl<'a, T> IntoIterator for &'a PriorityList<T> {
	type Item = (i64, &'a T);
	type IntoIter = Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
