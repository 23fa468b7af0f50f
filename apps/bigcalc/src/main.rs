use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use bigcalc::{evaluate, menu, parse_operand, Operation};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bigcalc")]
#[command(about = "Arithmetic on non-negative decimal integers of up to 1024 digits")]
struct Cli {
    /// Log debug information to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Add two big integers
    Add { a: String, b: String },
    /// Subtract B from A (A must not be smaller than B)
    Sub { a: String, b: String },
    /// Multiply two big integers
    Mul { a: String, b: String },
    /// Quotient and remainder of A divided by B
    Div { a: String, b: String },
    /// Remainder of A divided by B
    Mod { a: String, b: String },
    /// Floor square root of a big integer
    Sqrt { a: String },
    /// Raise a big integer to a power
    Pow { a: String, exponent: u32 },
    /// Convert a simple integer to a big integer
    Convert { n: u64 },
    /// Factorial of a big integer
    Factorial { a: String },
    /// Run the interactive menu (the default)
    Menu,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn operation(command: Command) -> Result<Option<Operation>> {
    let operation = match command {
        Command::Add { a, b } => Operation::Add(parse_operand(&a)?, parse_operand(&b)?),
        Command::Sub { a, b } => Operation::Sub(parse_operand(&a)?, parse_operand(&b)?),
        Command::Mul { a, b } => Operation::Mul(parse_operand(&a)?, parse_operand(&b)?),
        Command::Div { a, b } => Operation::Div(parse_operand(&a)?, parse_operand(&b)?),
        Command::Mod { a, b } => Operation::Mod(parse_operand(&a)?, parse_operand(&b)?),
        Command::Sqrt { a } => Operation::Sqrt(parse_operand(&a)?),
        Command::Pow { a, exponent } => Operation::Pow(parse_operand(&a)?, exponent),
        Command::Convert { n } => Operation::Convert(n),
        Command::Factorial { a } => Operation::Factorial(parse_operand(&a)?),
        Command::Menu => return Ok(None),
    };
    Ok(Some(operation))
}

fn run(command: Command) -> Result<()> {
    match operation(command)? {
        Some(operation) => {
            let answer = evaluate(&operation).context("operation failed")?;
            println!("{}", answer);
        }
        None => menu::run(io::stdin().lock(), io::stdout().lock())?,
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command.unwrap_or(Command::Menu)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
