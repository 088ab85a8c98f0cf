//! Errors reported by the ALU.
use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// Identifies one of the ALU's two data inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    A,
    B,
}

impl Display for Operand {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        f.write_str(match self {
            Operand::A => "A",
            Operand::B => "B",
        })
    }
}

/// Describes why [`crate::Alu::execute`] refused its inputs.  Both
/// kinds are detected before any computation takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluError {
    /// An operand was outside the range 0..=3.
    InvalidOperand { operand: Operand, value: u8 },
    /// The selector does not name one of the six operations.
    InvalidOperationCode(u8),
}

impl Display for AluError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            AluError::InvalidOperand { operand, value } => {
                write!(
                    f,
                    "operand {operand} has value {value}, but inputs must be 2-bit values (0-3)"
                )
            }
            AluError::InvalidOperationCode(code) => {
                write!(f, "invalid operation code: {code} ({code:#b})")
            }
        }
    }
}

impl Error for AluError {}

/// Signals that a string does not name any operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMnemonic(pub String);

impl Display for UnknownMnemonic {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "unknown operation name '{}'", self.0)
    }
}

impl Error for UnknownMnemonic {}

#[test]
fn test_error_messages() {
    assert_eq!(
        AluError::InvalidOperand {
            operand: Operand::B,
            value: 4
        }
        .to_string(),
        "operand B has value 4, but inputs must be 2-bit values (0-3)"
    );
    assert_eq!(
        AluError::InvalidOperationCode(6).to_string(),
        "invalid operation code: 6 (0b110)"
    );
    assert_eq!(
        UnknownMnemonic("NAND".to_string()).to_string(),
        "unknown operation name 'NAND'"
    );
}
