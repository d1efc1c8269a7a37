//! The sequence value type.
//!
//! A [`Sequence`] owns its elements exclusively. Whether it is bounded or
//! cyclic is fixed when it is constructed; slicing never changes the mode of
//! the receiver, and the result of a slice read is always bounded.

use crate::error::{Result, SequenceError};
use crate::index::{element_index, insert_index};

mod slice;


/// An ordered, resizable buffer of elements in bounded or cyclic mode.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sequence<T> {
	elements: Vec<T>,
	cyclic: bool,
}

impl<T> Sequence<T> {
	/// Creates an empty sequence in the given mode.
	pub fn new(cyclic: bool) -> Self {
		Self {
			elements: Vec::new(),
			cyclic,
		}
	}

	/// Creates an empty bounded sequence.
	pub fn bounded() -> Self {
		Self::new(false)
	}

	/// Creates an empty cyclic sequence.
	pub fn cyclic() -> Self {
		Self::new(true)
	}

	/// Wraps existing element data.
	pub fn from_vec(elements: Vec<T>, cyclic: bool) -> Self {
		Self { elements, cyclic }
	}

	/// Creates a sequence of `len` copies of `fill`.
	pub fn with_len(len: usize, fill: T, cyclic: bool) -> Self
	where
		T: Clone,
	{
		Self::from_vec(vec![fill; len], cyclic)
	}

	/// Returns the number of elements.
	#[inline]
	pub fn len(&self) -> usize {
		self.elements.len()
	}

	/// Returns true if the sequence holds no elements.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.elements.is_empty()
	}

	/// Returns true if indices wrap modulo the length.
	#[inline]
	pub fn is_cyclic(&self) -> bool {
		self.cyclic
	}

	pub fn as_slice(&self) -> &[T] {
		&self.elements
	}

	pub fn iter(&self) -> std::slice::Iter<'_, T> {
		self.elements.iter()
	}

	pub fn into_vec(self) -> Vec<T> {
		self.elements
	}

	/// Returns the element at a logical index.
	///
	/// Cyclic sequences accept any index on a non-empty buffer. Bounded
	/// sequences accept `[-len, len)`, with negative indices counting from
	/// the end.
	pub fn get(&self, index: i64) -> Result<&T> {
		let pos = self.position(index)?;
		Ok(&self.elements[pos])
	}

	/// Mutable counterpart of [`Sequence::get`].
	pub fn get_mut(&mut self, index: i64) -> Result<&mut T> {
		let pos = self.position(index)?;
		Ok(&mut self.elements[pos])
	}

	/// Replaces the element at a logical index.
	pub fn set(&mut self, index: i64, value: T) -> Result<()> {
		*self.get_mut(index)? = value;
		Ok(())
	}

	pub fn push(&mut self, value: T) {
		self.elements.push(value);
	}

	/// Removes and returns the last element of the buffer.
	pub fn pop(&mut self) -> Option<T> {
		self.elements.pop()
	}

	/// Appends clones of `items` to the end of the buffer.
	pub fn append(&mut self, items: &[T])
	where
		T: Clone,
	{
		self.elements.extend_from_slice(items);
	}

	/// Inserts `items` before the logical position `index`.
	///
	/// Bounded sequences accept `[-len, len]`; cyclic sequences wrap the
	/// position, and an empty cyclic sequence inserts at its start.
	pub fn insert(&mut self, index: i64, items: &[T]) -> Result<()>
	where
		T: Clone,
	{
		let len = self.len();
		let at = insert_index(index, len, self.cyclic).ok_or(SequenceError::IndexOutOfBounds { index, len })?;
		self.elements.splice(at..at, items.iter().cloned());
		Ok(())
	}

	/// Deletes the inclusive logical range `[first, last]`.
	///
	/// For a cyclic sequence whose wrapped `first` lies after its wrapped
	/// `last`, the range bridges the end of the buffer: `[first, len)` and
	/// `[0, last]` are both removed.
	pub fn delete(&mut self, first: i64, last: i64) -> Result<()> {
		let len = self.len();
		let start = self.position(first)?;
		let end = self.position(last)?;

		if start <= end {
			self.elements.drain(start..=end);
		} else if self.cyclic {
			self.elements.truncate(start);
			self.elements.drain(..=end);
		} else {
			return Err(SequenceError::InvalidRange { first, last, len });
		}
		Ok(())
	}

	pub fn clear(&mut self) {
		self.elements.clear();
	}

	fn position(&self, index: i64) -> Result<usize> {
		element_index(index, self.len(), self.cyclic).ok_or(SequenceError::IndexOutOfBounds { index, len: self.len() })
	}
}

impl<T> Default for Sequence<T> {
	fn default() -> Self {
		Self::bounded()
	}
}

impl<T> From<Vec<T>> for Sequence<T> {
	fn from(elements: Vec<T>) -> Self {
		Self::from_vec(elements, false)
	}
}

impl<T> FromIterator<T> for Sequence<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		Self::from_vec(iter.into_iter().collect(), false)
	}
}

impl<T> IntoIterator for Sequence<T> {
	type Item = T;
	type IntoIter = std::vec::IntoIter<T>;

	fn into_iter(self) -> Self::IntoIter {
		self.elements.into_iter()
	}
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
	type Item = &'a T;
	type IntoIter = std::slice::Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.elements.iter()
	}
}
