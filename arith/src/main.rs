//! Command-line front end for the arithmetic operations.
//!
//! Runs exactly one operation on two operands per invocation and prints the
//! result on stdout. Diagnostics go to stderr through `tracing`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use arith::io::config::{DEFAULT_CONFIG_FILE, init_config, load_config};
use arith::{ArithError, Number, Operation, exit_codes, logging};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

#[derive(Parser)]
#[command(
    name = "arith",
    version,
    about = "Basic arithmetic operations with diagnostic logging"
)]
struct Cli {
    /// Path to the TOML config file (missing file means defaults).
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Print a JSON object instead of the bare result.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the default config file if missing.
    Init {
        /// Overwrite an existing config file.
        #[arg(short, long)]
        force: bool,
    },
    /// Print A + B.
    Add(Operands),
    /// Print A - B.
    #[command(visible_alias = "sub")]
    Subtract(Operands),
    /// Print A * B.
    #[command(visible_alias = "mul")]
    Multiply(Operands),
    /// Print A / B as a float. Fails when B is zero.
    #[command(visible_alias = "div")]
    Divide(Operands),
    /// Print A raised to B as a float. Fails when the result is not real.
    #[command(visible_alias = "pow")]
    Power(Operands),
}

#[derive(Args)]
struct Operands {
    #[arg(allow_negative_numbers = true)]
    a: Number,
    #[arg(allow_negative_numbers = true)]
    b: Number,
}

#[derive(Serialize)]
struct Report {
    operation: Operation,
    a: Number,
    b: Number,
    result: Number,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        let code = if err.downcast_ref::<ArithError>().is_some() {
            exit_codes::INVALID_ARGUMENT
        } else {
            exit_codes::INVALID
        };
        std::process::exit(code);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let (op, operands) = match cli.command {
        Command::Init { force } => return cmd_init(&cli.config, force),
        Command::Add(operands) => (Operation::Add, operands),
        Command::Subtract(operands) => (Operation::Subtract, operands),
        Command::Multiply(operands) => (Operation::Multiply, operands),
        Command::Divide(operands) => (Operation::Divide, operands),
        Command::Power(operands) => (Operation::Power, operands),
    };
    cmd_apply(&cli.config, cli.json, op, operands)
}

fn cmd_init(config_path: &Path, force: bool) -> Result<()> {
    if init_config(config_path, force)? {
        println!("wrote {}", config_path.display());
    } else {
        println!("kept {} (use --force to overwrite)", config_path.display());
    }
    Ok(())
}

fn cmd_apply(config_path: &Path, json: bool, op: Operation, operands: Operands) -> Result<()> {
    let cfg = load_config(config_path)?;
    logging::init(&cfg.log_level);

    let Operands { a, b } = operands;
    let result = cfg
        .calculator()
        .apply(op, a, b)
        .with_context(|| format!("{op} {a} {b}"))?;

    if json {
        let report = Report {
            operation: op,
            a,
            b,
            result,
        };
        println!(
            "{}",
            serde_json::to_string(&report).context("serialize report")?
        );
    } else {
        println!("{result}");
    }
    Ok(())
}
