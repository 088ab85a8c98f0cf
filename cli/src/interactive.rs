//! Interactive mode: the user picks an operation from a menu, then
//! enters the two operands, and we print the ALU's outputs.  This
//! repeats until the user quits or input runs out.
use std::io::{BufRead, Write};

use termcolor::WriteColor;
use tracing::{event, Level};

use alu::{Alu, Opcode};
use base::prelude::*;

use crate::fail::Fail;
use crate::report::write_result;

/// Prints `prompt` and reads one line of input.  Returns `None` at
/// end of input.
fn ask<R: BufRead, W: WriteColor>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<Option<String>, Fail> {
    write!(out, "{prompt}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        Ok(None)
    } else {
        Ok(Some(line.trim().to_string()))
    }
}

fn write_menu<W: WriteColor>(out: &mut W) -> Result<(), Fail> {
    writeln!(out)?;
    writeln!(out, "Select operation:")?;
    for (i, op) in Opcode::ALL.iter().enumerate() {
        writeln!(out, "{i}. {op}")?;
    }
    writeln!(out, "q. Quit")?;
    Ok(())
}

enum Step {
    Continue,
    Quit,
    EndOfInput,
}

/// Runs one round of the menu.
fn step<R: BufRead, W: WriteColor>(alu: &Alu, input: &mut R, out: &mut W) -> Result<Step, Fail> {
    write_menu(out)?;
    let choice = match ask(input, out, "Choice: ")? {
        None => return Ok(Step::EndOfInput),
        Some(choice) => choice.to_lowercase(),
    };
    if choice == "q" {
        return Ok(Step::Quit);
    }
    let op: Opcode = match choice.parse::<i64>() {
        Err(e) => {
            event!(Level::WARN, "menu choice {choice:?} is not a number");
            writeln!(out, "Error: invalid choice '{choice}': {e}")?;
            return Ok(Step::Continue);
        }
        Ok(n) => match usize::try_from(n).ok().and_then(|i| Opcode::ALL.get(i)) {
            Some(op) => *op,
            None => {
                event!(Level::WARN, "menu choice {n} is not an operation");
                writeln!(out, "Invalid choice")?;
                return Ok(Step::Continue);
            }
        },
    };

    let mut operands: Vec<i64> = Vec::with_capacity(2);
    for prompt in ["Enter A (0-3): ", "Enter B (0-3): "] {
        let text = match ask(input, out, prompt)? {
            None => return Ok(Step::EndOfInput),
            Some(text) => text,
        };
        match text.parse::<i64>() {
            Ok(n) => operands.push(n),
            Err(e) => {
                event!(Level::WARN, "operand {text:?} is not a number");
                writeln!(out, "Error: invalid number '{text}': {e}")?;
                return Ok(Step::Continue);
            }
        }
    }

    match (
        Unsigned2Bit::try_from(operands[0]),
        Unsigned2Bit::try_from(operands[1]),
    ) {
        (Ok(a), Ok(b)) => {
            let output = alu.evaluate(op, a, b);
            event!(
                Level::DEBUG,
                "{op} {a} {b} -> result {} flag {}",
                output.result,
                output.flag
            );
            write_result(out, &output)?;
        }
        _ => {
            event!(
                Level::WARN,
                "operands {} and {} are not both 2-bit values",
                operands[0],
                operands[1]
            );
            writeln!(out, "Inputs must be 2-bit values (0-3)")?;
        }
    }
    Ok(Step::Continue)
}

pub fn run_interactive<R: BufRead, W: WriteColor>(
    alu: &Alu,
    input: &mut R,
    out: &mut W,
) -> Result<(), Fail> {
    writeln!(out)?;
    writeln!(out, "Interactive Mode:")?;
    loop {
        match step(alu, input, out)? {
            Step::Continue => (),
            Step::Quit => return Ok(()),
            // Input was closed rather than the user choosing to quit.
            Step::EndOfInput => {
                writeln!(out)?;
                writeln!(out, "Exiting...")?;
                return Ok(());
            }
        }
    }
}
