use std::iter::FilterMap;
use std::slice;

/// Live values of one bucket, oldest first.
pub(crate) type Values<'a, T> = FilterMap<slice::Iter<'a, Option<Entry<T>>>, LiveValue<T>>;

type LiveValue<T> = fn(&Option<Entry<T>>) -> Option<&T>;

/// A stored value and the list-wide sequence number it was inserted with.
///
/// The sequence number is stable across compaction, unlike the slot.
#[derive(Debug, Clone)]
pub(crate) struct Entry<T> {
	seq: u64,
	value: T,
}

/// Values inserted at a single priority, in insertion order.
///
/// Removal vacates a slot instead of shifting its successors, so a slot index
/// held by the cursor keeps addressing the same value across removals
/// elsewhere in the bucket. Lookups skip the holes until the bucket is
/// compacted.
#[derive(Debug, Clone)]
pub(crate) struct Bucket<T> {
	slots: Vec<Option<Entry<T>>>,
}

impl<T> Default for Bucket<T> {
	fn default() -> Self {
		Self { slots: Vec::new() }
	}
}

impl<T> Bucket<T> {
	/// Appends `value` and returns its slot.
	pub(crate) fn push(&mut self, value: T, seq: u64) -> usize {
		self.slots.push(Some(Entry { seq, value }));
		self.slots.len() - 1
	}

	fn entry(&self, slot: usize) -> Option<&Entry<T>> {
		self.slots.get(slot).and_then(Option::as_ref)
	}

	pub(crate) fn get(&self, slot: usize) -> Option<&T> {
		self.entry(slot).map(|entry| &entry.value)
	}

	pub(crate) fn seq(&self, slot: usize) -> Option<u64> {
		self.entry(slot).map(|entry| entry.seq)
	}

	pub(crate) fn is_occupied(&self, slot: usize) -> bool {
		self.entry(slot).is_some()
	}

	/// Finds the first occupied slot after `after`, or from the start when `after` is `None`.
	pub(crate) fn next_occupied(&self, after: Option<usize>) -> Option<usize> {
		let start = after.map_or(0, |slot| slot.saturating_add(1));
		self.slots
			.iter()
			.enumerate()
			.skip(start)
			.find_map(|(slot, entry)| entry.as_ref().map(|_| slot))
	}

	pub(crate) fn first_occupied(&self) -> Option<usize> {
		self.next_occupied(None)
	}

	/// Slot of the oldest live value equal to `value`.
	pub(crate) fn position(&self, value: &T) -> Option<usize>
	where
		T: PartialEq,
	{
		self.slots
			.iter()
			.position(|slot| slot.as_ref().is_some_and(|entry| entry.value == *value))
	}

	/// Vacates `slot`, leaving a hole.
	pub(crate) fn take(&mut self, slot: usize) -> Option<T> {
		self.slots.get_mut(slot)?.take().map(|entry| entry.value)
	}

	/// Occupied slots, counted on demand.
	pub(crate) fn live(&self) -> usize {
		self.slots.iter().filter(|slot| slot.is_some()).count()
	}

	pub(crate) fn is_empty(&self) -> bool {
		self.slots.iter().all(Option::is_none)
	}

	/// Whether holes outnumber live values.
	pub(crate) fn is_sparse(&self) -> bool {
		let live = self.live();
		self.slots.len() - live > live
	}

	/// Drops every hole except `keep`, renumbering what remains.
	///
	/// Returns the new index of `keep`: the number of live slots before it.
	/// A kept hole stays between its live neighbours, so a cursor parked on
	/// it still advances to the value that followed it.
	pub(crate) fn compact(&mut self, keep: Option<usize>) -> Option<usize> {
		let remapped = keep.map(|keep| self.slots.iter().take(keep).filter(|slot| slot.is_some()).count());
		let mut index = 0;
		self.slots.retain(|slot| {
			let retain = slot.is_some() || Some(index) == keep;
			index += 1;
			retain
		});
		remapped
	}

	pub(crate) fn values(&self) -> Values<'_, T> {
		self.slots.iter().filter_map(live_value as LiveValue<T>)
	}

	#[cfg(test)]
	pub(crate) fn slot_count(&self) -> usize {
		self.slots.len()
	}
}

fn live_value<T>(slot: &Option<Entry<T>>) -> Option<&T> {
	slot.as_ref().map(|entry| &entry.value)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn bucket(values: &[u32]) -> Bucket<u32> {
		let mut bucket = Bucket::default();
		for (seq, &value) in (0..).zip(values) {
			bucket.push(value, seq);
		}
		bucket
	}

	#[test]
	fn next_occupied_skips_holes() {
		let mut b = bucket(&[10, 20, 30, 40]);
		b.take(1);
		b.take(2);
		assert_eq!(b.first_occupied(), Some(0));
		assert_eq!(b.next_occupied(Some(0)), Some(3));
		assert_eq!(b.next_occupied(Some(3)), None);
		assert_eq!(b.next_occupied(Some(usize::MAX)), None);
	}

	#[test]
	fn take_keeps_positions() {
		let mut b = bucket(&[1, 2, 3]);
		assert_eq!(b.take(0), Some(1));
		assert_eq!(b.take(0), None);
		assert_eq!(b.get(2), Some(&3));
		assert_eq!(b.seq(2), Some(2));
		assert_eq!(b.position(&3), Some(2));
		assert_eq!(b.live(), 2);
		assert!(!b.is_empty());
	}

	#[test]
	fn compact_when_sparse() {
		let mut b = bucket(&[1, 2, 3]);
		b.take(0);
		assert!(!b.is_sparse());
		b.take(1);
		assert!(b.is_sparse());
		assert_eq!(b.compact(None), None);
		assert_eq!(b.get(0), Some(&3));
		assert_eq!(b.seq(0), Some(2), "sequence survives compaction");
		assert_eq!(b.values().copied().collect::<Vec<_>>(), vec![3]);
	}

	#[test]
	fn compact_remaps_kept_live_slot() {
		let mut b = bucket(&[1, 2, 3, 4]);
		b.take(0);
		b.take(2);
		assert_eq!(b.compact(Some(3)), Some(1));
		assert_eq!(b.get(1), Some(&4));
		assert_eq!(b.slot_count(), 2);
	}

	#[test]
	fn compact_keeps_parked_hole() {
		let mut b = bucket(&[1, 2, 3, 4, 5]);
		b.take(0);
		b.take(2);
		b.take(3);
		assert_eq!(b.compact(Some(2)), Some(1));
		assert_eq!(b.slot_count(), 3);
		assert!(!b.is_occupied(1));
		assert_eq!(b.next_occupied(Some(1)).and_then(|slot| b.get(slot)), Some(&5));
	}

	#[test]
	fn empty_after_all_taken() {
		let mut b = bucket(&[1, 2]);
		b.take(1);
		b.take(0);
		assert!(b.is_empty());
		assert_eq!(b.first_occupied(), None);
	}
}
