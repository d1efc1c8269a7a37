//! A small register machine that hosts [`cyclo_sequence::Sequence`] values.
//!
//! Sequences live in a [`Heap`] and are referenced from registers through
//! [`SeqId`] handles, so two registers may name the same sequence. Slice
//! assignment checks handle identity before writing and snapshots the
//! source when it is the destination.

/// Runtime configuration loaded from TOML.
pub mod config;
/// Interpreter error types.
pub mod error;
/// The instruction evaluation loop.
pub mod eval;
/// Handle-indexed sequence storage.
pub mod heap;
/// Instruction set.
pub mod instruction;
/// Register values.
pub mod value;

pub use config::{ConfigError, InterpConfig, Limits, MAX_SEQUENCE_LEN};
pub use error::{InterpError, Result};
pub use eval::Interpreter;
pub use heap::Heap;
pub use instruction::{Instruction, RegId};
pub use value::{SeqId, Value};
