mod common;

use anyhow::Result;
use teller::domain::AccountId;
use teller::io::{replay, Exporter, LedgerSnapshot};

use common::test_service;

fn account_of(service: &teller::application::BankService, name: &str) -> AccountId {
    service
        .customers()
        .into_iter()
        .find(|c| c.name == name)
        .map(|c| c.account.id)
        .expect("customer should exist after replay")
}

#[test]
fn test_replay_applies_operations_in_order() -> Result<()> {
    let script = "\
op,customer,amount
open,John Doe,
deposit,John Doe,1000
withdraw,John Doe,500
";

    let mut service = test_service();
    let outcome = replay(&mut service, script.as_bytes())?;

    assert_eq!(outcome.applied, 3);
    assert!(outcome.errors.is_empty());

    let account_id = account_of(&service, "John Doe");
    assert_eq!(service.balance(account_id)?, 50_000);
    assert_eq!(service.history(account_id)?.len(), 2);
    Ok(())
}

#[test]
fn test_replay_collects_row_failures_and_keeps_going() -> Result<()> {
    let script = "\
op,customer,amount
open,John Doe,
deposit,John Doe,abc
deposit,Jane Roe,100
withdraw,John Doe,1
open,John Doe,
deposit,John Doe,20
";

    let mut service = test_service();
    let outcome = replay(&mut service, script.as_bytes())?;

    // Only the open and the final deposit applied.
    assert_eq!(outcome.applied, 2);
    assert_eq!(outcome.errors.len(), 4);
    assert_eq!(
        outcome.errors.iter().map(|e| e.line).collect::<Vec<_>>(),
        vec![3, 4, 5, 6]
    );

    let account_id = account_of(&service, "John Doe");
    assert_eq!(service.balance(account_id)?, 2_000);
    assert_eq!(service.customers().len(), 1);
    Ok(())
}

#[test]
fn test_replay_rejects_missing_amount() -> Result<()> {
    let script = "\
op,customer,amount
open,John Doe,
deposit,John Doe,
";

    let mut service = test_service();
    let outcome = replay(&mut service, script.as_bytes())?;

    assert_eq!(outcome.applied, 1);
    assert_eq!(outcome.errors.len(), 1);
    assert!(outcome.errors[0].error.contains("Missing amount"));
    Ok(())
}

#[test]
fn test_balances_csv_export() -> Result<()> {
    let script = "\
op,customer,amount
open,John Doe,
open,Jane Roe,
deposit,John Doe,1000
withdraw,John Doe,500
deposit,Jane Roe,12.34
";

    let mut service = test_service();
    replay(&mut service, script.as_bytes())?;

    let mut buffer = Vec::new();
    let count = Exporter::new(&service).export_balances_csv(&mut buffer)?;
    assert_eq!(count, 2);

    let jane = account_of(&service, "Jane Roe");
    let john = account_of(&service, "John Doe");
    let expected = format!(
        "customer,account,balance\nJane Roe,{},12.34\nJohn Doe,{},500.00\n",
        jane, john
    );
    assert_eq!(String::from_utf8(buffer)?, expected);
    Ok(())
}

#[test]
fn test_history_csv_export_row_count() -> Result<()> {
    let mut service = test_service();
    let account_id = service.open_account("John Doe");
    service.deposit(account_id, 100_000)?;
    service.withdraw(account_id, 50_000)?;

    let mut buffer = Vec::new();
    let count = Exporter::new(&service).export_history_csv(account_id, &mut buffer)?;
    assert_eq!(count, 2);

    let text = String::from_utf8(buffer)?;
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3); // header + two records
    assert!(lines[1].contains("deposit"));
    assert!(lines[2].contains("withdrawal"));
    Ok(())
}

#[test]
fn test_full_json_snapshot_round_trips() -> Result<()> {
    let mut service = test_service();
    let account_id = service.open_account("John Doe");
    service.deposit(account_id, 100_000)?;
    service.withdraw(account_id, 50_000)?;

    let mut buffer = Vec::new();
    let snapshot = Exporter::new(&service).export_full_json(&mut buffer)?;
    assert_eq!(snapshot.customers.len(), 1);
    assert_eq!(snapshot.transactions.len(), 2);

    let parsed: LedgerSnapshot = serde_json::from_slice(&buffer)?;
    assert_eq!(parsed.version, env!("CARGO_PKG_VERSION"));
    assert_eq!(parsed.customers.len(), 1);
    assert_eq!(parsed.customers[0].name, "John Doe");
    assert_eq!(parsed.customers[0].account.balance_cents(), 50_000);
    assert_eq!(parsed.transactions.len(), 2);
    Ok(())
}
