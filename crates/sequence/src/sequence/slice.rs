//! Slice reads and slice assignment.
//!
//! Reads always produce a fresh bounded sequence. Writes are classified
//! first and validated in full before any element of the receiver changes:
//! a non-bridging target `[start, end)` is replaced by the whole source and
//! may grow or shrink the receiver, while a bridging target (a cyclic range
//! that crosses the end of the buffer) must be filled exactly.

use super::Sequence;
use crate::error::{Result, SequenceError};
use crate::index::{clamp_index, wrap_index};

/// Physical target of a slice assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SliceTarget {
	/// Contiguous `[start, end)`; the source replaces it whatever its size.
	NonBridging { start: usize, end: usize },
	/// `[start, len)` followed by `[0, end)`; the source must fill both.
	Bridging { start: usize, end: usize },
}

/// Number of logical positions in `[left, right)`, given `left < right`.
#[inline]
fn span(left: i64, right: i64) -> usize {
	usize::try_from(i128::from(right) - i128::from(left)).unwrap_or(usize::MAX)
}

impl<T> Sequence<T> {
	/// Copies the logical range `[left, right)` into a new bounded sequence.
	///
	/// Bounded receivers clamp both bounds with [`clamp_index`]. Cyclic
	/// receivers take exactly `right - left` elements starting at
	/// `left mod len`, wrapping as often as needed; a raw `right <= left`
	/// yields an empty result.
	///
	/// # Panics
	///
	/// Panics if a cyclic span exceeds the allocator's capacity for `T`.
	/// Hosts bound the request with [`Sequence::slice_len`] first.
	pub fn slice(&self, left: i64, right: i64) -> Sequence<T>
	where
		T: Clone,
	{
		let len = self.len();
		if len == 0 {
			return Sequence::bounded();
		}

		if self.cyclic {
			if right <= left {
				return Sequence::bounded();
			}
			let start = wrap_index(left, len);
			return self.elements.iter().cycle().skip(start).take(span(left, right)).cloned().collect();
		}

		let start = clamp_index(left, len);
		let end = clamp_index(right, len);
		if end <= start {
			return Sequence::bounded();
		}
		Sequence::from(self.elements[start..end].to_vec())
	}

	/// Length of the sequence [`Sequence::slice`] would return for the same
	/// bounds, computed without copying.
	pub fn slice_len(&self, left: i64, right: i64) -> usize {
		let len = self.len();
		if len == 0 {
			return 0;
		}
		if self.cyclic {
			return if right <= left { 0 } else { span(left, right) };
		}
		clamp_index(right, len).saturating_sub(clamp_index(left, len))
	}

	/// Length the receiver would have after [`Sequence::set_slice`] with a
	/// source of `source_len` elements, computed without writing.
	///
	/// # Errors
	///
	/// Returns the same errors `set_slice` would.
	pub fn len_after_set_slice(&self, left: i64, right: i64, source_len: usize) -> Result<usize> {
		Ok(match self.slice_target(left, right, source_len)? {
			SliceTarget::NonBridging { start, end } => self.len() - (end - start) + source_len,
			SliceTarget::Bridging { .. } => self.len(),
		})
	}

	/// Replaces the logical range `[left, right)` with the elements of
	/// `source`.
	///
	/// # Errors
	///
	/// On a cyclic receiver, returns [`SequenceError::CyclicOverWrap`] if
	/// the range covers more than one full cycle, and
	/// [`SequenceError::CyclicBridgeSize`] if the range crosses the end of
	/// the buffer and `source` does not fill it exactly. The receiver is
	/// untouched when an error is returned.
	pub fn set_slice(&mut self, left: i64, right: i64, source: &[T]) -> Result<()>
	where
		T: Clone,
	{
		let target = self.slice_target(left, right, source.len()).inspect_err(|err| {
			tracing::debug!(left, right, len = self.len(), source_len = source.len(), %err, "sequence.set_slice.rejected");
		})?;

		match target {
			SliceTarget::NonBridging { start, end } => {
				tracing::trace!(start, end, source_len = source.len(), "sequence.set_slice.non_bridging");
				self.set_non_bridging(start, end, source);
			}
			SliceTarget::Bridging { start, end } => {
				tracing::trace!(start, end, source_len = source.len(), "sequence.set_slice.bridging");
				self.set_bridging(start, end, source);
			}
		}
		Ok(())
	}

	/// Assigns a sequence's own elements into its range `[left, right)`.
	///
	/// The source is snapshotted before the write begins, so the result is
	/// the same as assigning from an independent copy.
	pub fn set_slice_self(&mut self, left: i64, right: i64) -> Result<()>
	where
		T: Clone,
	{
		tracing::trace!(left, right, len = self.len(), "sequence.set_slice.alias_snapshot");
		let snapshot = self.elements.clone();
		self.set_slice(left, right, &snapshot)
	}

	fn slice_target(&self, left: i64, right: i64, source_len: usize) -> Result<SliceTarget> {
		let len = self.len();

		if !self.cyclic {
			let start = clamp_index(left, len);
			let end = clamp_index(right, len).max(start);
			return Ok(SliceTarget::NonBridging { start, end });
		}

		let right = right.max(left);
		if right == left {
			// An empty range at the logical end is the same as one at the start.
			let at = if len == 0 { 0 } else { wrap_index(left, len) };
			return Ok(SliceTarget::NonBridging { start: at, end: at });
		}

		if i128::from(left) + (len as i128) < i128::from(right) {
			return Err(SequenceError::CyclicOverWrap { left, right, len });
		}

		let start = wrap_index(left, len);
		// A range ending exactly at the logical end reaches the tail, not the head.
		let end = match wrap_index(right, len) {
			0 => len,
			end => end,
		};

		if start < end {
			return Ok(SliceTarget::NonBridging { start, end });
		}

		let expected = end + len - start;
		if source_len != expected {
			return Err(SequenceError::CyclicBridgeSize {
				expected,
				actual: source_len,
			});
		}
		Ok(SliceTarget::Bridging { start, end })
	}

	fn set_non_bridging(&mut self, start: usize, end: usize, source: &[T])
	where
		T: Clone,
	{
		debug_assert!(start <= end && end <= self.len());

		if source.len() == end - start {
			self.elements[start..end].clone_from_slice(source);
		} else {
			self.elements.splice(start..end, source.iter().cloned());
		}
	}

	fn set_bridging(&mut self, start: usize, end: usize, source: &[T])
	where
		T: Clone,
	{
		let len = self.len();
		debug_assert!(end <= start && end + len - start == source.len());

		let (tail, head) = source.split_at(len - start);
		self.elements[start..].clone_from_slice(tail);
		self.elements[..end].clone_from_slice(head);
	}
}
