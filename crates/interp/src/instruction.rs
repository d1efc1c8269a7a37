use std::fmt;

use smallvec::SmallVec;

/// Index into the register file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegId(pub u32);

impl fmt::Display for RegId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "%{}", self.0)
	}
}

/// A single interpreter instruction.
///
/// Operands that name sequences expect a register holding
/// [`crate::Value::Seq`]; index and bound operands expect
/// [`crate::Value::Int`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
	/// Load an integer literal.
	LoadInt { dst: RegId, val: i64 },
	/// Load a string literal.
	LoadStr { dst: RegId, val: String },
	/// Allocate a sequence of `len` nothing values.
	NewSeq { dst: RegId, len: usize, cyclic: bool },
	/// Allocate a sequence from the values of `srcs`, in order.
	Collect {
		dst: RegId,
		srcs: SmallVec<[RegId; 4]>,
		cyclic: bool,
	},
	/// Store the length of `seq` as an integer.
	Len { dst: RegId, seq: RegId },
	/// Read `seq[index]`.
	Index { dst: RegId, seq: RegId, index: RegId },
	/// Write `seq[index] = src`.
	SetIndex { seq: RegId, index: RegId, src: RegId },
	/// Read `seq[left:right]` into a newly allocated bounded sequence.
	Slice {
		dst: RegId,
		seq: RegId,
		left: RegId,
		right: RegId,
	},
	/// Assign `seq[left:right] = src`, where `src` holds a sequence.
	SetSlice {
		seq: RegId,
		left: RegId,
		right: RegId,
		src: RegId,
	},
	/// Append the value of `src` to `seq`.
	Push { seq: RegId, src: RegId },
	/// Free the sequence named by `seq`.
	Release { seq: RegId },
	/// Stop and yield the value of `src`.
	Return { src: RegId },
}
