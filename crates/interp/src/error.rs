//! Interpreter error types.

use cyclo_sequence::SequenceError;
use thiserror::Error;

use crate::instruction::RegId;
use crate::value::SeqId;

/// Errors that abort a running program.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterpError {
	/// A sequence operation rejected its operands.
	#[error(transparent)]
	Sequence(#[from] SequenceError),

	/// An operand register held a value of the wrong type.
	#[error("type mismatch: expected {expected}, found {found}")]
	TypeMismatch {
		/// Name of the expected value type.
		expected: &'static str,
		/// Name of the value type actually found.
		found: &'static str,
	},

	/// An instruction named a register past the end of the register file.
	#[error("unknown register {0}")]
	UnknownRegister(RegId),

	/// A handle referred to a sequence that has been released.
	#[error("sequence {0} has been released")]
	DanglingSequence(SeqId),

	/// An operation would produce a sequence above the configured maximum.
	#[error("sequence length {len} exceeds the configured maximum of {max}")]
	LengthLimit {
		/// Length the operation would produce.
		len: usize,
		/// Configured `limits.max_sequence_len`.
		max: usize,
	},

	/// Execution ran off the end of the program without returning.
	#[error("program counter out of range (pc={pc}, len={len})")]
	ProgramCounterOutOfRange {
		/// Program counter at exit.
		pc: usize,
		/// Number of instructions in the program.
		len: usize,
	},
}

/// Result type for interpreter operations.
pub type Result<T> = std::result::Result<T, InterpError>;
