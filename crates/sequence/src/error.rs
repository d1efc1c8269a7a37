//! Error types for sequence operations.

use thiserror::Error;

/// Errors raised by sequence access and slice assignment.
///
/// Every variant is a deterministic validation failure detected before the
/// receiver is modified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
	/// A cyclic slice assignment spans more than one full cycle.
	#[error("assigning to cyclic slice with repeated entries ([{left}:{right}] on length {len})")]
	CyclicOverWrap {
		/// Requested left bound.
		left: i64,
		/// Requested right bound.
		right: i64,
		/// Length of the receiver.
		len: usize,
	},

	/// A bridging cyclic slice assignment would resize the receiver.
	#[error("assignment to cyclic slice is not well defined (expected {expected} elements, got {actual})")]
	CyclicBridgeSize {
		/// Combined size of the tail and head segments.
		expected: usize,
		/// Length of the source.
		actual: usize,
	},

	/// A single-element position lies outside the sequence.
	#[error("sequence index {index} is out of bounds for length {len}")]
	IndexOutOfBounds {
		/// Requested logical index.
		index: i64,
		/// Length of the receiver.
		len: usize,
	},

	/// A bounded delete range whose first position follows its last.
	#[error("cannot delete [{first}:{last}] from sequence of length {len}")]
	InvalidRange {
		/// Requested first position (inclusive).
		first: i64,
		/// Requested last position (inclusive).
		last: i64,
		/// Length of the receiver.
		len: usize,
	},
}

/// Result type for sequence operations.
pub type Result<T> = std::result::Result<T, SequenceError>;
