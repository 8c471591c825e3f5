use rustc_hash::FxHashMap;

use crate::bucket::Bucket;
use crate::error::{PriorityError, Result};
use crate::mode::DisplayMode;
use crate::priority::Priority;

mod cursor;
mod iter;

pub use cursor::CursorKey;
use cursor::Cursor;
pub use iter::{Entries, Iter};


const TARGET: &str = "ordo_priority_list";

/// Values grouped by integer priority, traversed highest priority first.
///
/// Within a priority, values keep their insertion order. Traversal is
/// non-destructive: either borrow with [`iter`](Self::iter), or drive the
/// stateful cursor with [`rewind`](Self::rewind), [`advance`](Self::advance),
/// [`valid`](Self::valid), [`current`](Self::current) and
/// [`key`](Self::key).
///
/// Inserting or removing between cursor steps is allowed. The cursor never
/// addresses a vacated slot once [`valid`](Self::valid) has said yes; whether
/// values inserted or removed mid-pass are visited in that pass is
/// unspecified.
#[derive(Debug, Clone)]
pub struct PriorityList<T> {
	/// One bucket per occupied priority. A bucket exists iff it holds a value.
	buckets: FxHashMap<i64, Bucket<T>>,
	/// Occupied priorities, strictly descending. Rebuilt only when the key set changes.
	priorities: Vec<i64>,
	cursor: Cursor,
	/// Live values across all buckets.
	len: usize,
	/// Sequence number for the next insert.
	next_seq: u64,
	mode: DisplayMode,
	#[cfg(test)]
	rebuilds: usize,
}

impl<T> Default for PriorityList<T> {
	fn default() -> Self {
		Self::new(DisplayMode::default())
	}
}

impl<T> PriorityList<T> {
	/// Creates an empty list whose traversal yields items shaped by `mode`.
	pub fn new(mode: DisplayMode) -> Self {
		Self {
			buckets: FxHashMap::default(),
			priorities: Vec::new(),
			cursor: Cursor::Exhausted,
			len: 0,
			next_seq: 0,
			mode,
			#[cfg(test)]
			rebuilds: 0,
		}
	}

	pub fn display_mode(&self) -> DisplayMode {
		self.mode
	}

	pub fn set_display_mode(&mut self, mode: DisplayMode) {
		self.mode = mode;
	}

	/// Appends `value` to the bucket for `priority`, creating the bucket if needed.
	pub fn insert(&mut self, value: T, priority: i64) {
		let created = !self.buckets.contains_key(&priority);
		let seq = self.next_seq;
		let slot = self.buckets.entry(priority).or_default().push(value, seq);
		self.next_seq += 1;
		self.len += 1;

		if created {
			tracing::trace!(target: TARGET, priority, "bucket created");
			self.rebuild_index();
		} else {
			tracing::trace!(target: TARGET, priority, slot, "value appended");
		}
	}

	/// Inserts after converting `priority`, leaving the list untouched on failure.
	///
	/// # Errors
	///
	/// Returns [`PriorityError::InvalidArgument`] if `priority` is not an
	/// integer representable as `i64`.
	pub fn try_insert<P>(&mut self, value: T, priority: P) -> Result<()>
	where
		P: TryInto<Priority>,
		PriorityError: From<P::Error>,
	{
		let priority = priority.try_into().map_err(|err| {
			let err = PriorityError::from(err);
			tracing::debug!(target: TARGET, %err, "rejected priority");
			err
		})?;
		self.insert(value, priority.get());
		Ok(())
	}

	/// Removes the first value equal to `value`.
	///
	/// With `priority` given, only that bucket is searched. Otherwise buckets
	/// are searched highest priority first, oldest value first. Returns
	/// whether a value was removed.
	pub fn remove(&mut self, value: &T, priority: Option<i64>) -> bool
	where
		T: PartialEq,
	{
		let Some((priority, slot)) = self.find(value, priority) else {
			return false;
		};
		let cursor_slot = self.cursor.slot_in(priority);
		let Some(bucket) = self.buckets.get_mut(&priority) else {
			return false;
		};

		bucket.take(slot);
		self.len -= 1;

		if bucket.is_empty() {
			self.buckets.remove(&priority);
			tracing::trace!(target: TARGET, priority, "bucket dropped");
			self.rebuild_index();
		} else if bucket.is_sparse() {
			let remapped = bucket.compact(cursor_slot);
			if let (Cursor::Positioned(position), Some(slot)) = (&mut self.cursor, remapped) {
				position.slot = slot;
			}
			tracing::trace!(target: TARGET, priority, cursor_slot = ?remapped, "bucket compacted");
		}
		true
	}

	/// Whether any bucket holds a value equal to `value`.
	pub fn contains(&self, value: &T) -> bool
	where
		T: PartialEq,
	{
		self.find(value, None).is_some()
	}

	/// Number of values, overall or at one priority.
	///
	/// The overall count is maintained. A per-priority count is recomputed by
	/// counting occupied slots, and is 0 for an unknown priority.
	pub fn count(&self, priority: Option<i64>) -> usize {
		match priority {
			None => self.len,
			Some(priority) => self.count_at(priority),
		}
	}

	pub fn count_at(&self, priority: i64) -> usize {
		self.buckets.get(&priority).map_or(0, Bucket::live)
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Occupied priorities in traversal order.
	pub fn priorities(&self) -> &[i64] {
		&self.priorities
	}

	/// Drops every value. The cursor becomes exhausted.
	pub fn clear(&mut self) {
		self.buckets.clear();
		self.priorities.clear();
		self.cursor = Cursor::Exhausted;
		self.len = 0;
	}

	/// Locates the first match in search order.
	fn find(&self, value: &T, priority: Option<i64>) -> Option<(i64, usize)>
	where
		T: PartialEq,
	{
		let find_in = |priority: i64| {
			let slot = self.buckets.get(&priority)?.position(value)?;
			Some((priority, slot))
		};
		match priority {
			Some(priority) => find_in(priority),
			None => self.priorities.iter().find_map(|&priority| find_in(priority)),
		}
	}

	/// Rebuilds the descending priority index from the bucket keys.
	///
	/// A positioned cursor is re-resolved by its priority value, never by its
	/// old rank, so it stays on the same tier when tiers appear or vanish
	/// around it.
	fn rebuild_index(&mut self) {
		self.priorities.clear();
		self.priorities.extend(self.buckets.keys().copied());
		self.priorities.sort_unstable_by(|a, b| b.cmp(a));
		#[cfg(test)]
		{
			self.rebuilds += 1;
		}

		if let Cursor::Positioned(position) = &mut self.cursor {
			position.rank = rank_of(&self.priorities, position.priority);
		}

		tracing::trace!(
			target: TARGET,
			occupied = self.priorities.len(),
			cursor_rank = ?self.cursor.rank(),
			"priority index rebuilt"
		);
	}
}

/// Rank of `priority` in a strictly descending index.
fn rank_of(priorities: &[i64], priority: i64) -> Option<usize> {
	priorities.binary_search_by(|occupied| priority.cmp(occupied)).ok()
}

impl<T> FromIterator<(T, i64)> for PriorityList<T> {
	fn from_iter<I: IntoIterator<Item = (T, i64)>>(iter: I) -> Self {
		let mut list = Self::default();
		list.extend(iter);
		list
	}
}

impl<T> Extend<(T, i64)> for PriorityList<T> {
	fn extend<I: IntoIterator<Item = (T, i64)>>(&mut self, iter: I) {
		for (value, priority) in iter {
			self.insert(value, priority);
		}
	}
}
