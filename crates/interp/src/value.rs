use std::fmt;

/// Handle to a sequence stored in a [`crate::Heap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SeqId(pub(crate) usize);

impl SeqId {
	pub fn index(self) -> usize {
		self.0
	}
}

impl fmt::Display for SeqId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// A value held in a register or stored as a sequence element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Value {
	#[default]
	Nothing,
	Int(i64),
	Str(String),
	/// Reference to a heap sequence. Copying the value copies the handle.
	Seq(SeqId),
}

impl Value {
	pub fn type_name(&self) -> &'static str {
		match self {
			Self::Nothing => "nothing",
			Self::Int(_) => "int",
			Self::Str(_) => "string",
			Self::Seq(_) => "sequence",
		}
	}

	pub fn as_int(&self) -> Option<i64> {
		match self {
			Self::Int(val) => Some(*val),
			_ => None,
		}
	}

	pub fn as_seq(&self) -> Option<SeqId> {
		match self {
			Self::Seq(id) => Some(*id),
			_ => None,
		}
	}
}

impl From<i64> for Value {
	fn from(val: i64) -> Self {
		Self::Int(val)
	}
}

impl From<&str> for Value {
	fn from(val: &str) -> Self {
		Self::Str(val.to_owned())
	}
}
