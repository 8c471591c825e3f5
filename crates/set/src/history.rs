use std::hash::Hash;

use indexmap::IndexSet;

use crate::error::{Result, SetError};
use crate::set::{Set, TARGET};


/// Which change logs [`HistorySet::reset`] clears.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ResetScope {
	/// Clear both logs.
	#[default]
	All,
	/// Clear only the added log.
	Added,
	/// Clear only the removed log.
	Removed,
}

/// A [`Set`] that records which elements were added and removed.
///
/// Elements passed to the constructor are the baseline and are not logged.
/// By default an add followed by a remove of the same element (or the
/// reverse) cancels out. An eidetic set logs both sides instead.
#[derive(Debug, Clone)]
pub struct HistorySet<T> {
	set: Set<T>,
	added: IndexSet<T>,
	removed: IndexSet<T>,
	eidetic: bool,
}

impl<T> Default for HistorySet<T> {
	fn default() -> Self {
		Self {
			set: Set::default(),
			added: IndexSet::new(),
			removed: IndexSet::new(),
			eidetic: false,
		}
	}
}

impl<T: Hash + Eq> HistorySet<T> {
	/// Creates a set seeded with `elements`, cancelling opposite changes.
	pub fn new(elements: impl IntoIterator<Item = T>) -> Self {
		Self::with_memory(elements, false)
	}

	/// Creates a set seeded with `elements` that logs every add and remove.
	pub fn eidetic(elements: impl IntoIterator<Item = T>) -> Self {
		Self::with_memory(elements, true)
	}

	fn with_memory(elements: impl IntoIterator<Item = T>, eidetic: bool) -> Self {
		Self {
			set: elements.into_iter().collect(),
			eidetic,
			..Self::default()
		}
	}

	pub fn is_eidetic(&self) -> bool {
		self.eidetic
	}

	/// Adds `element` and logs the addition if it was absent.
	pub fn add(&mut self, element: T) -> &mut Self
	where
		T: Clone,
	{
		if self.set.contains(&element) {
			return self;
		}

		let cancelled = !self.eidetic && self.removed.shift_remove(&element);
		if !cancelled {
			self.added.insert(element.clone());
		}
		tracing::trace!(target: TARGET, cancelled, "history add");
		self.set.add(element);
		self
	}

	/// Removes `element` and logs the removal.
	///
	/// # Errors
	///
	/// Returns [`SetError::KeyError`] if `element` is not in the set.
	pub fn remove(&mut self, element: &T) -> Result<&mut Self> {
		let Some(element) = self.set.take(element) else {
			tracing::trace!(target: TARGET, "history remove of absent element");
			return Err(SetError::KeyError);
		};

		let cancelled = !self.eidetic && self.added.shift_remove(&element);
		if !cancelled {
			self.removed.insert(element);
		}
		tracing::trace!(target: TARGET, cancelled, "history remove");
		Ok(self)
	}

	/// Removes `element` if present, logging as [`remove`](Self::remove) does.
	pub fn discard(&mut self, element: &T) -> &mut Self {
		if let Err(SetError::KeyError) = self.remove(element) {
			tracing::trace!(target: TARGET, "discard of absent element");
		}
		self
	}

	/// Empties the set, logging every element not already logged as removed.
	pub fn clear(&mut self) -> &mut Self {
		self.removed.extend(self.set.drain());
		self
	}

	/// Clears change logs according to `scope`. Set contents are untouched.
	pub fn reset(&mut self, scope: ResetScope) -> &mut Self {
		if scope != ResetScope::Removed {
			self.added.clear();
		}
		if scope != ResetScope::Added {
			self.removed.clear();
		}
		self
	}

	/// Elements logged as added, oldest first.
	pub fn added(&self) -> impl Iterator<Item = &T> {
		self.added.iter()
	}

	/// Elements logged as removed, oldest first.
	pub fn removed(&self) -> impl Iterator<Item = &T> {
		self.removed.iter()
	}

	pub fn contains(&self, element: &T) -> bool {
		self.set.contains(element)
	}

	pub fn values(&self) -> Vec<&T> {
		self.set.values()
	}

	pub fn count(&self) -> usize {
		self.set.count()
	}

	pub fn is_empty(&self) -> bool {
		self.set.is_empty()
	}

	/// The current contents as a plain set.
	pub fn as_set(&self) -> &Set<T> {
		&self.set
	}
}
