//! The operations the ALU can perform, and the values of the
//! operation select lines which choose them.
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::Serialize;
#[cfg(test)]
use test_strategy::Arbitrary;

use base::prelude::*;

use crate::error::{AluError, UnknownMnemonic};

/// An ALU operation.  The discriminant is the value of the 3-bit
/// operation selector.  Selector values 0b110 and 0b111 are unused.
#[cfg_attr(test, derive(Arbitrary))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum Opcode {
    And = 0b000,
    Or = 0b001,
    Xor = 0b010,
    Add = 0b011,
    Sub = 0b100,
    /// NOT is unary; it ignores operand B.
    Not = 0b101,
}

impl Opcode {
    /// The number of distinct operations.
    pub const COUNT: usize = 6;

    /// Every operation, ordered by operation code.
    pub const ALL: [Opcode; Opcode::COUNT] = [
        Opcode::And,
        Opcode::Or,
        Opcode::Xor,
        Opcode::Add,
        Opcode::Sub,
        Opcode::Not,
    ];

    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// The operation code as it appears on the select lines.
    #[must_use]
    pub const fn selector(self) -> Unsigned3Bit {
        Unsigned3Bit::truncate(self as u8)
    }

    #[must_use]
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Opcode::And => "AND",
            Opcode::Or => "OR",
            Opcode::Xor => "XOR",
            Opcode::Add => "ADD",
            Opcode::Sub => "SUB",
            Opcode::Not => "NOT",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Opcode::And => "A AND B - Bitwise AND operation",
            Opcode::Or => "A OR B - Bitwise OR operation",
            Opcode::Xor => "A XOR B - Bitwise XOR operation",
            Opcode::Add => "A + B - Addition with carry",
            Opcode::Sub => "A - B - Subtraction (two's complement) with borrow",
            Opcode::Not => "NOT A - Bitwise complement of A (B is ignored)",
        }
    }

    /// Returns true for operations which read only operand A.
    #[must_use]
    pub const fn is_unary(self) -> bool {
        matches!(self, Opcode::Not)
    }

    /// Returns true for operations whose flag output can be set.
    #[must_use]
    pub const fn sets_flag(self) -> bool {
        matches!(self, Opcode::Add | Opcode::Sub)
    }
}

impl Display for Opcode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        f.write_str(self.mnemonic())
    }
}

impl TryFrom<u8> for Opcode {
    type Error = AluError;
    fn try_from(code: u8) -> Result<Opcode, AluError> {
        use Opcode::*;
        match code {
            0b000 => Ok(And),
            0b001 => Ok(Or),
            0b010 => Ok(Xor),
            0b011 => Ok(Add),
            0b100 => Ok(Sub),
            0b101 => Ok(Not),
            _ => Err(AluError::InvalidOperationCode(code)),
        }
    }
}

impl TryFrom<Unsigned3Bit> for Opcode {
    type Error = AluError;
    fn try_from(selector: Unsigned3Bit) -> Result<Opcode, AluError> {
        Opcode::try_from(u8::from(selector))
    }
}

impl FromStr for Opcode {
    type Err = UnknownMnemonic;

    /// Accepts a mnemonic such as "add" or "XOR", ignoring case.
    fn from_str(s: &str) -> Result<Opcode, UnknownMnemonic> {
        Opcode::ALL
            .into_iter()
            .find(|op| op.mnemonic().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownMnemonic(s.to_string()))
    }
}
