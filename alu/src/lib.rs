//! This crate emulates a 2-bit arithmetic logic unit.  Given a 3-bit
//! operation selector and two 2-bit operands it produces a 2-bit
//! result plus a single carry/borrow flag, just as the combinational
//! circuit does.

mod engine;
mod error;
mod opcode;
mod table;

pub use engine::{Alu, AluOutput, Flag};
pub use error::{AluError, Operand, UnknownMnemonic};
pub use opcode::Opcode;
pub use table::{truth_table, TruthTableRow};
