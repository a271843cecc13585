use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::BankService;
use crate::domain::{format_cents, AccountId, Customer, Transaction};

/// Full ledger state for JSON export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub version: String,
    pub exported_at: DateTime<Utc>,
    pub customers: Vec<Customer>,
    pub transactions: Vec<Transaction>,
}

/// Exporter for writing ledger state to CSV or JSON.
pub struct Exporter<'a> {
    service: &'a BankService,
}

impl<'a> Exporter<'a> {
    pub fn new(service: &'a BankService) -> Self {
        Self { service }
    }

    /// Export per-customer balances as CSV, sorted by customer name for
    /// stable output. Returns the row count.
    pub fn export_balances_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["customer", "account", "balance"])?;

        let mut customers = self.service.customers();
        customers.sort_by(|a, b| a.name.cmp(&b.name));

        let mut count = 0;
        for customer in customers {
            csv_writer.write_record(&[
                customer.name.clone(),
                customer.account.id.to_string(),
                format_cents(customer.account.balance_cents()),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export one account's transaction history as CSV, in recorded order.
    pub fn export_history_csv<W: Write>(&self, account_id: AccountId, writer: W) -> Result<usize> {
        let history = self.service.history(account_id)?;
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["id", "account", "kind", "amount", "timestamp"])?;

        for transaction in &history {
            csv_writer.write_record(&[
                transaction.id.to_string(),
                transaction.account_id.to_string(),
                transaction.kind.to_string(),
                format_cents(transaction.amount_cents),
                transaction.timestamp.to_rfc3339(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(history.len())
    }

    /// Export the full ledger as a pretty JSON snapshot.
    pub fn export_full_json<W: Write>(&self, mut writer: W) -> Result<LedgerSnapshot> {
        let mut customers: Vec<Customer> =
            self.service.customers().into_iter().cloned().collect();
        customers.sort_by(|a, b| a.name.cmp(&b.name));

        let snapshot = LedgerSnapshot {
            version: env!("CARGO_PKG_VERSION").to_string(),
            exported_at: Utc::now(),
            customers,
            transactions: self.service.transactions().to_vec(),
        };

        let json = serde_json::to_string_pretty(&snapshot)?;
        writer.write_all(json.as_bytes())?;
        writer.flush()?;

        Ok(snapshot)
    }
}
