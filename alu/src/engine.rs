//! The ALU proper.
//!
//! The unit is a combinational circuit, so it has no registers and
//! no state changes between calls.  The only thing built when an
//! [`Alu`] is created is its dispatch table, which maps each
//! operation code to the handler implementing it.  The table is
//! never modified afterwards, so an `Alu` can be shared freely
//! between threads.
//!
//! Every handler has the same two-operand signature, including the
//! handler for NOT, which ignores operand B.  Callers therefore
//! select an operation purely by its code.
use std::fmt::{self, Debug, Display, Formatter};

use serde::Serialize;
use tracing::{event, Level};

use base::prelude::*;

use crate::error::{AluError, Operand};
use crate::opcode::Opcode;


/// The carry/borrow output of the ALU.  ADD sets it on carry out of
/// the top bit, SUB sets it on borrow (that is, when A < B).  The
/// other operations always leave it clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(into = "u8")]
pub enum Flag {
    #[default]
    Clear,
    Set,
}

impl Flag {
    #[must_use]
    pub const fn is_set(self) -> bool {
        matches!(self, Flag::Set)
    }
}

impl From<bool> for Flag {
    fn from(b: bool) -> Flag {
        if b {
            Flag::Set
        } else {
            Flag::Clear
        }
    }
}

impl From<Flag> for u8 {
    fn from(flag: Flag) -> u8 {
        match flag {
            Flag::Clear => 0,
            Flag::Set => 1,
        }
    }
}

impl Display for Flag {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", u8::from(*self))
    }
}

/// The outputs of the ALU for a single operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AluOutput {
    pub result: Unsigned2Bit,
    pub flag: Flag,
}

impl AluOutput {
    const fn new(result: Unsigned2Bit, flag: Flag) -> AluOutput {
        AluOutput { result, flag }
    }

    /// The outputs as plain integers, `(result, flag)`.
    #[must_use]
    pub fn as_pair(&self) -> (u8, u8) {
        (u8::from(self.result), u8::from(self.flag))
    }
}

type Handler = fn(Unsigned2Bit, Unsigned2Bit) -> AluOutput;

/// A 2-bit ALU.
pub struct Alu {
    dispatch: [Handler; Opcode::COUNT],
}

impl Alu {
    #[must_use]
    pub fn new() -> Alu {
        let dispatch: [Handler; Opcode::COUNT] = Opcode::ALL.map(handler_for);
        event!(
            Level::DEBUG,
            "ALU dispatch table built with {} entries",
            dispatch.len()
        );
        Alu { dispatch }
    }

    /// Performs operation `op_code` on operands `a` and `b`.
    ///
    /// Both operands are range-checked before the operation code is
    /// examined, and operand B is checked even for NOT (which does
    /// not use it).  Nothing is computed unless all three inputs are
    /// valid.
    pub fn execute(&self, op_code: u8, a: u8, b: u8) -> Result<AluOutput, AluError> {
        let a = operand(Operand::A, a)?;
        let b = operand(Operand::B, b)?;
        let op = Opcode::try_from(op_code)?;
        Ok(self.evaluate(op, a, b))
    }

    /// Performs `op` on operands whose types already guarantee they
    /// are in range, so this cannot fail.
    #[must_use]
    pub fn evaluate(&self, op: Opcode, a: Unsigned2Bit, b: Unsigned2Bit) -> AluOutput {
        let handler = self.dispatch[usize::from(op.code())];
        handler(a, b)
    }
}

impl Default for Alu {
    fn default() -> Alu {
        Alu::new()
    }
}

impl Debug for Alu {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Alu")
            .field("operations", &Opcode::ALL)
            .finish()
    }
}

fn operand(which: Operand, value: u8) -> Result<Unsigned2Bit, AluError> {
    Unsigned2Bit::try_from(value).map_err(|_| AluError::InvalidOperand {
        operand: which,
        value,
    })
}

fn handler_for(op: Opcode) -> Handler {
    match op {
        Opcode::And => op_and,
        Opcode::Or => op_or,
        Opcode::Xor => op_xor,
        Opcode::Add => op_add,
        Opcode::Sub => op_sub,
        Opcode::Not => op_not,
    }
}

fn op_and(a: Unsigned2Bit, b: Unsigned2Bit) -> AluOutput {
    AluOutput::new(a & b, Flag::Clear)
}

fn op_or(a: Unsigned2Bit, b: Unsigned2Bit) -> AluOutput {
    AluOutput::new(a | b, Flag::Clear)
}

fn op_xor(a: Unsigned2Bit, b: Unsigned2Bit) -> AluOutput {
    AluOutput::new(a ^ b, Flag::Clear)
}

fn op_add(a: Unsigned2Bit, b: Unsigned2Bit) -> AluOutput {
    let (sum, carry) = a.overflowing_add(b);
    AluOutput::new(sum, Flag::from(carry))
}

/// Two's complement negation: invert, then add one.  Zero negates to
/// zero (the carry out of the increment is discarded).
fn twos_complement(n: Unsigned2Bit) -> Unsigned2Bit {
    (!n).wrapping_add(Unsigned2Bit::ONE)
}

/// Subtraction is performed the way the circuit does it, by adding
/// the two's complement of B to A.  The carry out of that adder is
/// not the borrow (it is the inverse of the borrow except when B is
/// zero), so the borrow is computed by comparing the operands.
fn op_sub(a: Unsigned2Bit, b: Unsigned2Bit) -> AluOutput {
    let (difference, _adder_carry) = a.overflowing_add(twos_complement(b));
    AluOutput::new(difference, Flag::from(a < b))
}

fn op_not(a: Unsigned2Bit, _b: Unsigned2Bit) -> AluOutput {
    AluOutput::new(!a, Flag::Clear)
}
