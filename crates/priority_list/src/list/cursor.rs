use std::fmt;

use super::{PriorityList, TARGET};
use crate::mode::Extracted;

/// Iteration state of a [`PriorityList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Cursor {
	Exhausted,
	Positioned(Position),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Position {
	/// Index into the priority index; `None` once the bucket for `priority` is gone.
	pub(super) rank: Option<usize>,
	/// The resolved tier. Survives index rebuilds, unlike `rank`.
	pub(super) priority: i64,
	/// Slot within the tier's bucket. Remapped when that bucket is compacted.
	pub(super) slot: usize,
}

impl Cursor {
	/// The cursor's slot, if it sits in the bucket for `priority`.
	pub(super) fn slot_in(&self, priority: i64) -> Option<usize> {
		match self {
			Self::Positioned(position) if position.priority == priority => Some(position.slot),
			_ => None,
		}
	}

	pub(super) fn rank(&self) -> Option<usize> {
		match self {
			Self::Positioned(position) => position.rank,
			Self::Exhausted => None,
		}
	}
}

/// Identifies the value under the cursor within one traversal pass.
///
/// Displays as `{priority}-{sequence}`, where the sequence number is assigned
/// per insert and never reused by the list. Carries no meaning beyond being
/// unique within a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CursorKey {
	/// Priority of the addressed value.
	pub priority: i64,
	/// Insertion sequence number of the addressed value.
	pub sequence: u64,
}

impl fmt::Display for CursorKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}-{}", self.priority, self.sequence)
	}
}

impl<T> PriorityList<T> {
	/// Restarts traversal at the oldest value of the highest priority.
	///
	/// Recomputes the priority index first. Exhausts the cursor when the list
	/// is empty.
	pub fn rewind(&mut self) {
		self.cursor = Cursor::Exhausted;
		self.rebuild_index();
		self.cursor = self.seek_from(0);
	}

	/// Steps to the next live value.
	///
	/// Moves forward within the current priority, skipping holes, then on to
	/// the next lower priority. Past the last value the cursor is exhausted
	/// and stays so until [`rewind`](Self::rewind).
	pub fn advance(&mut self) {
		let Cursor::Positioned(position) = self.cursor else {
			return;
		};

		let next_slot = self
			.buckets
			.get(&position.priority)
			.and_then(|bucket| bucket.next_occupied(Some(position.slot)));
		if let Some(slot) = next_slot {
			self.cursor = Cursor::Positioned(Position { slot, ..position });
			return;
		}

		let next_rank = match position.rank {
			Some(rank) => rank + 1,
			None => self.priorities.partition_point(|&priority| priority > position.priority),
		};
		self.cursor = self.seek_from(next_rank);

		if self.cursor == Cursor::Exhausted {
			tracing::trace!(target: TARGET, "cursor exhausted");
		}
	}

	/// Whether the cursor addresses a live value.
	pub fn valid(&self) -> bool {
		self.position().is_some()
	}

	/// The addressed value, projected through the display mode.
	///
	/// `None` while exhausted or while the addressed value has been removed.
	pub fn current(&self) -> Option<Extracted<'_, T>> {
		let position = self.position()?;
		let data = self.buckets.get(&position.priority)?.get(position.slot)?;
		Some(self.mode.project(data, position.priority))
	}

	/// Key of the addressed value, if [`valid`](Self::valid).
	pub fn key(&self) -> Option<CursorKey> {
		let position = self.position()?;
		let sequence = self.buckets.get(&position.priority)?.seq(position.slot)?;
		Some(CursorKey {
			priority: position.priority,
			sequence,
		})
	}

	/// The cursor position, if it addresses an occupied slot.
	fn position(&self) -> Option<Position> {
		let Cursor::Positioned(position) = self.cursor else {
			return None;
		};
		self.buckets
			.get(&position.priority)
			.is_some_and(|bucket| bucket.is_occupied(position.slot))
			.then_some(position)
	}

	/// First live value at or after `rank` in the priority index.
	fn seek_from(&self, rank: usize) -> Cursor {
		self.priorities
			.iter()
			.enumerate()
			.skip(rank)
			.find_map(|(rank, &priority)| {
				let slot = self.buckets.get(&priority)?.first_occupied()?;
				Some(Cursor::Positioned(Position {
					rank: Some(rank),
					priority,
					slot,
				}))
			})
			.unwrap_or(Cursor::Exhausted)
	}
}
