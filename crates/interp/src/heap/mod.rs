//! Handle-indexed sequence storage.

use cyclo_sequence::Sequence;
use slab::Slab;

use crate::error::{InterpError, Result};
use crate::value::{SeqId, Value};

#[cfg(test)]
mod tests;

/// Owns every sequence a program can reach.
///
/// Handles stay valid until [`Heap::release`]; a released slot may be
/// reused by a later allocation.
#[derive(Debug, Default)]
pub struct Heap {
	slots: Slab<Sequence<Value>>,
}

impl Heap {
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of live sequences.
	pub fn len(&self) -> usize {
		self.slots.len()
	}

	pub fn is_empty(&self) -> bool {
		self.slots.is_empty()
	}

	pub fn alloc(&mut self, seq: Sequence<Value>) -> SeqId {
		SeqId(self.slots.insert(seq))
	}

	pub fn get(&self, id: SeqId) -> Result<&Sequence<Value>> {
		self.slots.get(id.0).ok_or(InterpError::DanglingSequence(id))
	}

	pub fn get_mut(&mut self, id: SeqId) -> Result<&mut Sequence<Value>> {
		self.slots.get_mut(id.0).ok_or(InterpError::DanglingSequence(id))
	}

	/// Removes a sequence and returns it.
	pub fn release(&mut self, id: SeqId) -> Result<Sequence<Value>> {
		self.slots.try_remove(id.0).ok_or(InterpError::DanglingSequence(id))
	}

	/// Assigns the elements of `src` to `dst[left:right]`.
	///
	/// When both handles name the same sequence the write goes through
	/// [`Sequence::set_slice_self`], which reads from a snapshot.
	pub fn set_slice(&mut self, dst: SeqId, left: i64, right: i64, src: SeqId) -> Result<()> {
		if dst == src {
			return Ok(self.get_mut(dst)?.set_slice_self(left, right)?);
		}

		self.get(src)?;
		let (target, source) = self.slots.get2_mut(dst.0, src.0).ok_or(InterpError::DanglingSequence(dst))?;
		target.set_slice(left, right, source.as_slice())?;
		Ok(())
	}
}
