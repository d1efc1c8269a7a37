//! Runtime configuration.
//!
//! Configuration is read from TOML. Every field has a default, so an empty
//! document yields [`InterpConfig::default`].
//!
//! ```toml
//! registers = 16
//! trace_instructions = false
//!
//! [limits]
//! max_sequence_len = 1048576
//! ```

use serde::Deserialize;
use thiserror::Error;

use crate::error::InterpError;
use crate::value::Value;


const DEFAULT_REGISTERS: usize = 16;

/// Largest sequence a `Vec<Value>` can hold; applies even when
/// `max_sequence_len` is unset.
pub const MAX_SEQUENCE_LEN: usize = isize::MAX as usize / std::mem::size_of::<Value>();

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// The document is not valid TOML or does not match the schema.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// The register file must hold at least one register.
	#[error("registers must be at least 1")]
	NoRegisters,
}

/// Interpreter configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InterpConfig {
	/// Number of registers available to a program.
	pub registers: usize,
	/// Emit a trace event for every executed instruction.
	pub trace_instructions: bool,
	/// Size limits applied where sequences are allocated or grown.
	pub limits: Limits,
}

impl Default for InterpConfig {
	fn default() -> Self {
		Self {
			registers: DEFAULT_REGISTERS,
			trace_instructions: false,
			limits: Limits::default(),
		}
	}
}

impl InterpConfig {
	/// Parses and validates a TOML configuration document.
	pub fn from_toml(src: &str) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(src)?;
		if config.registers == 0 {
			return Err(ConfigError::NoRegisters);
		}
		Ok(config)
	}
}

/// Size limits for heap sequences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Limits {
	/// Largest sequence an instruction may produce. `None` leaves only the
	/// [`MAX_SEQUENCE_LEN`] capacity ceiling.
	pub max_sequence_len: Option<usize>,
}

impl Limits {
	/// Rejects a sequence length above `max_sequence_len` or above
	/// [`MAX_SEQUENCE_LEN`].
	pub fn check_len(&self, len: usize) -> Result<(), InterpError> {
		let max = self.max_sequence_len.map_or(MAX_SEQUENCE_LEN, |max| max.min(MAX_SEQUENCE_LEN));
		if len > max {
			tracing::warn!(len, max, "sequence length limit exceeded");
			return Err(InterpError::LengthLimit { len, max });
		}
		Ok(())
	}
}
