use std::collections::HashMap;
use std::io::Read;

use anyhow::Result;
use serde::Deserialize;

use crate::application::BankService;
use crate::domain::{parse_cents, AccountId};

/// One row of an operations script.
///
/// |op        |customer  |amount  |
/// |----------|----------|--------|
/// |open      |John Doe  |        |
/// |deposit   |John Doe  |1000    |
/// |withdraw  |John Doe  |500     |
///
/// `open` ignores the amount column. Customer names are only meaningful
/// to the script: they are resolved to account ids here, and the service
/// never sees them as keys.
#[derive(Debug, Deserialize)]
struct ScriptRow {
    op: ScriptOp,
    customer: String,
    amount: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ScriptOp {
    Open,
    Deposit,
    Withdraw,
}

/// A row that could not be applied.
#[derive(Debug, Clone)]
pub struct ScriptError {
    pub line: usize,
    pub error: String,
}

/// Outcome of replaying a script. Row failures don't stop the replay;
/// they are collected and reported.
#[derive(Debug, Clone, Default)]
pub struct ScriptOutcome {
    pub applied: usize,
    pub errors: Vec<ScriptError>,
}

/// Replay a CSV operations script against the given service.
pub fn replay<R: Read>(service: &mut BankService, reader: R) -> Result<ScriptOutcome> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut accounts: HashMap<String, AccountId> = HashMap::new();
    let mut outcome = ScriptOutcome::default();

    for (index, row) in csv_reader.deserialize::<ScriptRow>().enumerate() {
        let line = index + 2; // header occupies line 1

        let row = match row {
            Ok(row) => row,
            Err(e) => {
                outcome.errors.push(ScriptError {
                    line,
                    error: format!("CSV parse error: {}", e),
                });
                continue;
            }
        };

        match apply_row(service, &mut accounts, &row) {
            Ok(()) => outcome.applied += 1,
            Err(error) => outcome.errors.push(ScriptError { line, error }),
        }
    }

    Ok(outcome)
}

fn apply_row(
    service: &mut BankService,
    accounts: &mut HashMap<String, AccountId>,
    row: &ScriptRow,
) -> Result<(), String> {
    match row.op {
        ScriptOp::Open => {
            if accounts.contains_key(&row.customer) {
                return Err(format!("Customer already open: {}", row.customer));
            }
            let account_id = service.open_account(row.customer.clone());
            accounts.insert(row.customer.clone(), account_id);
            Ok(())
        }
        ScriptOp::Deposit | ScriptOp::Withdraw => {
            let account_id = *accounts
                .get(&row.customer)
                .ok_or_else(|| format!("Unknown customer: {}", row.customer))?;

            let raw = row
                .amount
                .as_deref()
                .filter(|s| !s.is_empty())
                .ok_or_else(|| "Missing amount".to_string())?;
            let amount_cents =
                parse_cents(raw).map_err(|e| format!("Invalid amount '{}': {}", raw, e))?;

            let result = match row.op {
                ScriptOp::Deposit => service.deposit(account_id, amount_cents),
                ScriptOp::Withdraw => service.withdraw(account_id, amount_cents),
                ScriptOp::Open => unreachable!(),
            };

            result.map(|_| ()).map_err(|e| e.to_string())
        }
    }
}
