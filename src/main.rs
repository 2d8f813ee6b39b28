use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use serde::Serialize;

use validated_ops::{cube, logging, triple_join, OpsError};

#[derive(Parser)]
#[command(name = "vops")]
#[command(version = "0.1.0")]
#[command(about = "Validated operations - cube and triple-join with input checking", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, help = "Enable verbose output", global = true)]
    verbose: bool,

    #[arg(long, help = "Emit a machine-readable JSON report", global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Cube an integer (zero is rejected)")]
    Cube {
        #[arg(help = "Value to cube", allow_hyphen_values = true)]
        value: i32,
    },

    #[command(about = "Join a string with itself three times (blank input is rejected)")]
    Join {
        #[arg(help = "Text to join; omit to exercise the missing-input path")]
        text: Option<String>,
    },
}

/// One invocation's outcome, shaped for a test-runner harness.
#[derive(Serialize)]
struct OpReport {
    op: &'static str,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.verbose)?;

    match cli.command {
        Commands::Cube { value } => match cube(value) {
            Ok(result) => {
                logging::log_operation("cube", true);
                if cli.json {
                    print_report(OpReport {
                        op: "cube",
                        ok: true,
                        result: Some(result.into()),
                        error: None,
                    })?;
                } else {
                    println!(
                        "{} {} = {}",
                        "✓".green(),
                        format!("cube({value})").cyan(),
                        result.to_string().bold()
                    );
                }
                Ok(())
            }
            Err(err) => fail("cube", err, cli.json),
        },
        Commands::Join { text } => match triple_join(text.as_deref()) {
            Ok(result) => {
                logging::log_operation("join", true);
                if cli.json {
                    print_report(OpReport {
                        op: "join",
                        ok: true,
                        result: Some(result.into()),
                        error: None,
                    })?;
                } else {
                    println!("{} {}", "✓".green(), result.bold());
                }
                Ok(())
            }
            Err(err) => fail("join", err, cli.json),
        },
    }
}

fn fail(op: &'static str, err: OpsError, json: bool) -> Result<()> {
    logging::log_operation(op, false);
    if json {
        print_report(OpReport {
            op,
            ok: false,
            result: None,
            error: Some(err.message().to_string()),
        })?;
        // The report already carries the failure; exit non-zero without the
        // anyhow error trailer duplicating it on stderr.
        std::process::exit(1);
    }
    Err(err.into())
}

fn print_report(report: OpReport) -> Result<()> {
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
