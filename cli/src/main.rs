use std::io::{self, Write};

use clap::ArgAction::{Append, SetTrue};
use clap::{Parser, Subcommand};
use termcolor::{ColorChoice, StandardStream};
use tracing::{event, span, Level};
use tracing_subscriber::prelude::*;

use alu::{Alu, Opcode};

mod fail;
mod interactive;
mod report;

use fail::Fail;
use interactive::run_interactive;
use report::{
    get_colour_choice, parse_operation, write_banner, write_json, write_result,
    write_truth_tables,
};

/// Simulator for a 2-bit arithmetic logic unit
#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Cli {
    /// Never colour the output, even on a terminal.
    #[clap(action = SetTrue, long)]
    no_color: bool,

    /// What to do.  With no command, print every truth table and
    /// then enter interactive mode.
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the truth table of one or more operations.
    Table {
        /// Operation to include (a name such as ADD, or a code such
        /// as 3).  May be repeated.  All operations are included
        /// if none is specified.
        #[clap(action = Append, long = "op")]
        ops: Vec<String>,

        /// Print the tables as JSON instead of text.
        #[clap(action = SetTrue, long)]
        json: bool,
    },
    /// Perform a single operation.
    Eval {
        /// The operation (a name such as SUB, or a code such as 4).
        op: String,
        /// Operand A (0-3).
        a: u8,
        /// Operand B (0-3).  Ignored by NOT, but still required.
        b: u8,
    },
    /// Choose operations and operands from a menu.
    Interactive,
}

fn selected_operations(names: &[String]) -> Result<Vec<Opcode>, Fail> {
    if names.is_empty() {
        Ok(Opcode::ALL.to_vec())
    } else {
        names.iter().map(|name| parse_operation(name)).collect()
    }
}

fn interact(alu: &Alu, out: &mut StandardStream) -> Result<(), Fail> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    run_interactive(alu, &mut input, out)
}

fn run_command(cli: Cli) -> Result<(), Fail> {
    let colour: ColorChoice = get_colour_choice(cli.no_color);
    let mut out = StandardStream::stdout(colour);
    let alu = Alu::new();

    match cli.command {
        None => {
            let span = span!(Level::INFO, "default");
            let _enter = span.enter();
            write_banner(&mut out)?;
            write_truth_tables(&mut out, &alu, &Opcode::ALL)?;
            interact(&alu, &mut out)
        }
        Some(Command::Table { ops, json }) => {
            let span = span!(Level::INFO, "table", ?ops, json);
            let _enter = span.enter();
            let ops = selected_operations(&ops)?;
            if json {
                write_json(&mut out, &alu, &ops)
            } else {
                write_banner(&mut out)?;
                write_truth_tables(&mut out, &alu, &ops)
            }
        }
        Some(Command::Eval { op, a, b }) => {
            let span = span!(Level::INFO, "eval", %op, a, b);
            let _enter = span.enter();
            let op = parse_operation(&op)?;
            if op.is_unary() && b != 0 {
                event!(Level::INFO, "{op} ignores operand B ({b})");
            }
            let output = alu.execute(op.code(), a, b)?;
            event!(Level::DEBUG, "{op} produced {:?}", output);
            write_result(&mut out, &output)
        }
        Some(Command::Interactive) => {
            let span = span!(Level::INFO, "interactive");
            let _enter = span.enter();
            interact(&alu, &mut out)
        }
    }?;
    out.flush()?;
    Ok(())
}

fn run_simulator() -> Result<(), Fail> {
    let cli = Cli::parse();

    // See
    // https://docs.rs/tracing-subscriber/0.2.19/tracing_subscriber/fmt/index.html#filtering-events-with-environment-variables
    // for instructions on how to select which trace messages get
    // printed.  Log output goes to stderr so that it does not mix
    // with the tables on stdout.
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(io::stderr);
    let filter_layer = match tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("info"))
    {
        Err(e) => {
            return Err(Fail::InitialisationFailure(format!(
                "failed to initialise tracing filter (perhaps there is a problem with environment variables): {e}"
            )));
        }
        Ok(layer) => layer,
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();

    let result = run_command(cli);
    if let Err(e) = &result {
        event!(Level::ERROR, "failed: {}", e);
    }
    result
}

fn main() {
    match run_simulator() {
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
        Ok(()) => {
            std::process::exit(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_table_ops() {
        let cli = Cli::try_parse_from(["alusim", "table", "--op", "add", "--op", "4", "--json"])
            .expect("arguments should parse");
        match cli.command {
            Some(Command::Table { ops, json }) => {
                assert!(json);
                let ops = selected_operations(&ops).expect("operations should be valid");
                assert_eq!(ops, vec![Opcode::Add, Opcode::Sub]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_default_is_all_operations() {
        let ops = selected_operations(&[]).expect("no operations is valid");
        assert_eq!(ops, Opcode::ALL.to_vec());
    }

    #[test]
    fn test_parse_eval() {
        let cli = Cli::try_parse_from(["alusim", "--no-color", "eval", "NOT", "2", "0"])
            .expect("arguments should parse");
        assert!(cli.no_color);
        assert!(matches!(
            cli.command,
            Some(Command::Eval { ref op, a: 2, b: 0 }) if op == "NOT"
        ));
    }

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["alusim"]).expect("arguments should parse");
        assert!(cli.command.is_none());
    }
}
