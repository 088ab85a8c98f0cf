//! Text and JSON rendering of ALU truth tables and results.
use std::io::Write;

use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, WriteColor};

use alu::{truth_table, Alu, AluOutput, Flag, Opcode, TruthTableRow};
use base::prelude::*;

use crate::fail::Fail;

const RULE_WIDTH: usize = 40;

pub fn get_colour_choice(no_color: bool) -> ColorChoice {
    if !no_color && atty::is(atty::Stream::Stdout) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Accepts either an operation mnemonic ("add") or a numeric
/// operation code ("3").
pub fn parse_operation(s: &str) -> Result<Opcode, Fail> {
    match s.trim().parse::<u8>() {
        Ok(code) => Ok(Opcode::try_from(code)?),
        Err(_) => Ok(s.parse::<Opcode>()?),
    }
}

fn operand_bits(n: Unsigned2Bit) -> Result<String, Fail> {
    Ok(format_binary(u64::from(n), Unsigned2Bit::BITS)?)
}

fn opcode_bits(op: Opcode) -> Result<String, Fail> {
    Ok(format_binary(u64::from(op.code()), Unsigned3Bit::BITS)?)
}

fn write_flag<W: WriteColor>(out: &mut W, flag: Flag) -> Result<(), Fail> {
    if flag.is_set() {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true))?;
        write!(out, "{flag}")?;
        out.reset()?;
    } else {
        write!(out, "{flag}")?;
    }
    Ok(())
}

pub fn write_banner<W: WriteColor>(out: &mut W) -> Result<(), Fail> {
    writeln!(out, "2-BIT ALU SIMULATOR")?;
    writeln!(out, "===================")?;
    Ok(())
}

pub fn write_truth_table<W: WriteColor>(
    out: &mut W,
    op: Opcode,
    rows: &[TruthTableRow],
) -> Result<(), Fail> {
    let rule = "-".repeat(RULE_WIDTH);
    writeln!(out)?;
    writeln!(out, "Operation: {} (Code: {})", op, opcode_bits(op)?)?;
    writeln!(out, "{rule}")?;
    writeln!(out, "  A  |  B  | Result | Carry/Borrow")?;
    writeln!(out, "{rule}")?;
    for row in rows {
        write!(
            out,
            " {} | {} |   {}   |     ",
            operand_bits(row.a)?,
            operand_bits(row.b)?,
            operand_bits(row.output.result)?
        )?;
        write_flag(out, row.output.flag)?;
        writeln!(out)?;
    }
    Ok(())
}

pub fn write_truth_tables<W: WriteColor>(
    out: &mut W,
    alu: &Alu,
    ops: &[Opcode],
) -> Result<(), Fail> {
    for op in ops {
        write_truth_table(out, *op, &truth_table(alu, *op))?;
    }
    Ok(())
}

pub fn write_result<W: WriteColor>(out: &mut W, output: &AluOutput) -> Result<(), Fail> {
    write!(out, "Result: {} (Carry/Borrow: ", operand_bits(output.result)?)?;
    write_flag(out, output.flag)?;
    writeln!(out, ")")?;
    Ok(())
}

#[derive(Serialize)]
struct OperationTable {
    operation: Opcode,
    code: u8,
    description: &'static str,
    unary: bool,
    sets_flag: bool,
    rows: Vec<TruthTableRow>,
}

pub fn write_json<W: Write>(out: &mut W, alu: &Alu, ops: &[Opcode]) -> Result<(), Fail> {
    let tables: Vec<OperationTable> = ops
        .iter()
        .map(|op| OperationTable {
            operation: *op,
            code: op.code(),
            description: op.description(),
            unary: op.is_unary(),
            sets_flag: op.sets_flag(),
            rows: truth_table(alu, *op),
        })
        .collect();
    serde_json::to_writer_pretty(&mut *out, &tables)?;
    writeln!(out)?;
    Ok(())
}
