use std::hash::Hash;

use indexmap::IndexSet;
use indexmap::set::{IntoIter, Iter};

use crate::error::{Result, SetError};


pub(crate) const TARGET: &str = "ordo_set";

/// A set that iterates in insertion order.
///
/// Membership is decided by `Hash` + `Eq` on the element itself. Adding an
/// element that is already present keeps its original position.
#[derive(Debug, Clone)]
pub struct Set<T> {
	data: IndexSet<T>,
}

impl<T> Default for Set<T> {
	fn default() -> Self {
		Self { data: IndexSet::new() }
	}
}

impl<T: Hash + Eq> Set<T> {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds `element` unless an equal one is present.
	pub fn add(&mut self, element: T) -> &mut Self {
		self.data.insert(element);
		self
	}

	/// Removes all elements.
	pub fn clear(&mut self) -> &mut Self {
		self.data.clear();
		self
	}

	pub fn contains(&self, element: &T) -> bool {
		self.data.contains(element)
	}

	pub fn count(&self) -> usize {
		self.data.len()
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	/// Removes `element` if present. Never fails.
	pub fn discard(&mut self, element: &T) -> &mut Self {
		self.data.shift_remove(element);
		self
	}

	/// Removes `element`.
	///
	/// # Errors
	///
	/// Returns [`SetError::KeyError`] if `element` is not in the set.
	pub fn remove(&mut self, element: &T) -> Result<&mut Self> {
		self.take(element).ok_or_else(|| {
			tracing::trace!(target: TARGET, "remove of absent element");
			SetError::KeyError
		})?;
		Ok(self)
	}

	/// Elements in insertion order.
	pub fn values(&self) -> Vec<&T> {
		self.data.iter().collect()
	}

	pub fn iter(&self) -> Iter<'_, T> {
		self.data.iter()
	}

	/// Removes and returns the stored element equal to `element`, keeping the order of the rest.
	pub(crate) fn take(&mut self, element: &T) -> Option<T> {
		self.data.shift_take(element)
	}

	/// Empties the set, yielding its elements in insertion order.
	pub(crate) fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
		self.data.drain(..)
	}
}

impl<T: Hash + Eq> FromIterator<T> for Set<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		Self {
			data: iter.into_iter().collect(),
		}
	}
}

impl<T: Hash + Eq> Extend<T> for Set<T> {
	fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
		self.data.extend(iter);
	}
}

impl<T> IntoIterator for Set<T> {
	type Item = T;
	type IntoIter = IntoIter<T>;

	fn into_iter(self) -> Self::IntoIter {
		self.data.into_iter()
	}
}

impl<'a, T> IntoIterator for &'a Set<T> {
	type Item = &'a T;
	type IntoIter = Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.data.iter()
	}
}
