//! Truth tables: the ALU's outputs for every combination of operands.
use serde::Serialize;

use base::prelude::*;

use crate::engine::{Alu, AluOutput};
use crate::opcode::Opcode;

/// One line of a truth table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TruthTableRow {
    pub a: Unsigned2Bit,
    pub b: Unsigned2Bit,
    pub output: AluOutput,
}

/// Evaluates `op` for all 16 operand combinations.  Rows are ordered
/// by A, then by B.
pub fn truth_table(alu: &Alu, op: Opcode) -> Vec<TruthTableRow> {
    Unsigned2Bit::all()
        .flat_map(|a| Unsigned2Bit::all().map(move |b| (a, b)))
        .map(|(a, b)| TruthTableRow {
            a,
            b,
            output: alu.evaluate(op, a, b),
        })
        .collect()
}
