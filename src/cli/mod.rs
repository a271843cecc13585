use std::fs::File;
use std::io::{stdout, Write};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use crate::application::BankService;
use crate::domain::format_cents;
use crate::io::{replay, Exporter};

/// Teller - in-memory retail bank ledger
#[derive(Parser)]
#[command(name = "teller")]
#[command(about = "An in-memory retail banking ledger, driven by operation scripts")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the canonical walkthrough session
    Demo,

    /// Replay an operations script and print the resulting balances
    Run {
        /// Path to the CSV script (columns: op, customer, amount)
        script: String,

        /// Output format: csv, json
        #[arg(short, long, default_value = "csv")]
        format: String,

        /// Also print each account's transaction history (csv format only)
        #[arg(long)]
        history: bool,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Demo => run_demo(),
            Commands::Run {
                script,
                format,
                history,
            } => run_script(&script, &format, history, self.verbose),
        }
    }
}

fn run_demo() -> Result<()> {
    let mut service = BankService::new();

    let account_id = service.open_account("John Doe");
    println!("Account created. Account number: {}", account_id);

    service.deposit(account_id, 100_000)?;
    println!(
        "Balance after deposit: {}",
        format_cents(service.balance(account_id)?)
    );

    service.withdraw(account_id, 50_000)?;
    println!(
        "Balance after withdrawal: {}",
        format_cents(service.balance(account_id)?)
    );

    println!("Transaction history:");
    for transaction in service.history(account_id)? {
        println!(
            "  {} {} {}",
            transaction.timestamp.to_rfc3339(),
            transaction.kind,
            format_cents(transaction.amount_cents)
        );
    }

    Ok(())
}

fn run_script(path: &str, format: &str, include_history: bool, verbose: bool) -> Result<()> {
    let file =
        File::open(path).with_context(|| format!("Cannot open script file '{}'", path))?;

    let mut service = BankService::new();
    let outcome = replay(&mut service, file)?;

    if verbose {
        eprintln!("[Replay] Applied {} operation(s)", outcome.applied);
    }
    for error in &outcome.errors {
        eprintln!("[Replay] Line {}: {}", error.line, error.error);
    }

    // Stored balances must agree with the log before anything is printed.
    let report = service.check();
    if !report.is_clean() {
        for mismatch in &report.mismatches {
            eprintln!(
                "[Audit] Account {} holds {} but the log replays to {}",
                mismatch.account_id,
                format_cents(mismatch.stored_cents),
                format_cents(mismatch.replayed_cents)
            );
        }
        bail!(
            "Ledger audit failed: {} account(s) disagree with the log",
            report.mismatches.len()
        );
    }

    let exporter = Exporter::new(&service);
    match format {
        "csv" => {
            exporter.export_balances_csv(stdout())?;
            if include_history {
                for customer in service.customers() {
                    println!();
                    println!("# {}", customer.name);
                    exporter.export_history_csv(customer.account.id, stdout())?;
                }
            }
        }
        "json" => {
            exporter.export_full_json(stdout())?;
            let mut out = stdout();
            out.write_all(b"\n")?;
            out.flush()?;
        }
        other => bail!("Unknown format '{}'. Use 'csv' or 'json'", other),
    }

    Ok(())
}
