//! The instruction evaluation loop.

use cyclo_sequence::Sequence;

use crate::config::InterpConfig;
use crate::error::{InterpError, Result};
use crate::heap::Heap;
use crate::instruction::{Instruction, RegId};
use crate::value::{SeqId, Value};


/// What should happen after an instruction completes.
#[derive(Debug)]
enum InstructionResult {
	Continue,
	Return(RegId),
}

/// Executes instruction sequences against a register file and a heap.
///
/// The heap persists across [`Interpreter::run`] calls; the register file is
/// cleared at the start of each run.
#[derive(Debug)]
pub struct Interpreter {
	config: InterpConfig,
	registers: Vec<Value>,
	heap: Heap,
}

impl Interpreter {
	pub fn new(config: InterpConfig) -> Self {
		let registers = vec![Value::Nothing; config.registers];
		Self {
			config,
			registers,
			heap: Heap::new(),
		}
	}

	pub fn config(&self) -> &InterpConfig {
		&self.config
	}

	pub fn heap(&self) -> &Heap {
		&self.heap
	}

	pub fn heap_mut(&mut self) -> &mut Heap {
		&mut self.heap
	}

	/// Runs `program` from its first instruction until a `Return`.
	pub fn run(&mut self, program: &[Instruction]) -> Result<Value> {
		self.registers.fill(Value::Nothing);

		let mut pc = 0;
		while pc < program.len() {
			let instruction = &program[pc];
			if self.config.trace_instructions {
				tracing::trace!(pc, ?instruction, "interp.step");
			}

			let result = self.eval_instruction(instruction).inspect_err(|err| {
				tracing::debug!(pc, %err, "interp.instruction_failed");
			})?;

			match result {
				InstructionResult::Continue => pc += 1,
				InstructionResult::Return(src) => return Ok(std::mem::take(self.reg_mut(src)?)),
			}
		}

		Err(InterpError::ProgramCounterOutOfRange { pc, len: program.len() })
	}

	fn eval_instruction(&mut self, instruction: &Instruction) -> Result<InstructionResult> {
		use self::InstructionResult::*;

		match instruction {
			Instruction::LoadInt { dst, val } => {
				self.put_reg(*dst, Value::Int(*val))?;
			}
			Instruction::LoadStr { dst, val } => {
				self.put_reg(*dst, Value::Str(val.clone()))?;
			}
			Instruction::NewSeq { dst, len, cyclic } => {
				self.config.limits.check_len(*len)?;
				let id = self.heap.alloc(Sequence::with_len(*len, Value::Nothing, *cyclic));
				self.put_reg(*dst, Value::Seq(id))?;
			}
			Instruction::Collect { dst, srcs, cyclic } => {
				self.config.limits.check_len(srcs.len())?;
				let elements = srcs.iter().map(|src| self.reg(*src).cloned()).collect::<Result<Vec<_>>>()?;
				let id = self.heap.alloc(Sequence::from_vec(elements, *cyclic));
				self.put_reg(*dst, Value::Seq(id))?;
			}
			Instruction::Len { dst, seq } => {
				let len = self.heap.get(self.seq_reg(*seq)?)?.len();
				self.put_reg(*dst, Value::Int(i64::try_from(len).unwrap_or(i64::MAX)))?;
			}
			Instruction::Index { dst, seq, index } => {
				let index = self.int_reg(*index)?;
				let val = self.heap.get(self.seq_reg(*seq)?)?.get(index)?.clone();
				self.put_reg(*dst, val)?;
			}
			Instruction::SetIndex { seq, index, src } => {
				let index = self.int_reg(*index)?;
				let val = self.reg(*src)?.clone();
				let id = self.seq_reg(*seq)?;
				self.heap.get_mut(id)?.set(index, val)?;
			}
			Instruction::Slice { dst, seq, left, right } => {
				let (left, right) = (self.int_reg(*left)?, self.int_reg(*right)?);
				let source = self.heap.get(self.seq_reg(*seq)?)?;
				self.config.limits.check_len(source.slice_len(left, right))?;
				let slice = source.slice(left, right);
				let id = self.heap.alloc(slice);
				self.put_reg(*dst, Value::Seq(id))?;
			}
			Instruction::SetSlice { seq, left, right, src } => {
				let (left, right) = (self.int_reg(*left)?, self.int_reg(*right)?);
				let (dst, src) = (self.seq_reg(*seq)?, self.seq_reg(*src)?);
				let source_len = self.heap.get(src)?.len();
				let new_len = self.heap.get(dst)?.len_after_set_slice(left, right, source_len)?;
				self.config.limits.check_len(new_len)?;
				self.heap.set_slice(dst, left, right, src)?;
			}
			Instruction::Push { seq, src } => {
				let val = self.reg(*src)?.clone();
				let id = self.seq_reg(*seq)?;
				let target = self.heap.get_mut(id)?;
				self.config.limits.check_len(target.len() + 1)?;
				target.push(val);
			}
			Instruction::Release { seq } => {
				let id = self.seq_reg(*seq)?;
				self.heap.release(id)?;
			}
			Instruction::Return { src } => return Ok(Return(*src)),
		}
		Ok(Continue)
	}

	fn reg(&self, reg: RegId) -> Result<&Value> {
		self.registers.get(reg.0 as usize).ok_or(InterpError::UnknownRegister(reg))
	}

	fn reg_mut(&mut self, reg: RegId) -> Result<&mut Value> {
		self.registers.get_mut(reg.0 as usize).ok_or(InterpError::UnknownRegister(reg))
	}

	fn put_reg(&mut self, reg: RegId, val: Value) -> Result<()> {
		*self.reg_mut(reg)? = val;
		Ok(())
	}

	fn int_reg(&self, reg: RegId) -> Result<i64> {
		let val = self.reg(reg)?;
		val.as_int().ok_or(InterpError::TypeMismatch {
			expected: "int",
			found: val.type_name(),
		})
	}

	fn seq_reg(&self, reg: RegId) -> Result<SeqId> {
		let val = self.reg(reg)?;
		val.as_seq().ok_or(InterpError::TypeMismatch {
			expected: "sequence",
			found: val.type_name(),
		})
	}
}
