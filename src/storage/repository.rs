use std::collections::HashMap;

use crate::domain::{AccountId, Customer, Transaction};

/// In-memory store backing the ledger: the customer mapping keyed by
/// account id, plus the append-only transaction log shared by all
/// accounts. Created empty; contents are dropped with the process.
///
/// Customers and transactions are never deleted.
#[derive(Debug, Default)]
pub struct Repository {
    customers: HashMap<AccountId, Customer>,
    transactions: Vec<Transaction>,
}

impl Repository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new customer under its account id. An id collision means
    /// the id source is broken, which is unrecoverable.
    pub fn insert_customer(&mut self, customer: Customer) {
        let previous = self.customers.insert(customer.account_id(), customer);
        assert!(previous.is_none(), "account id collision");
    }

    pub fn customer(&self, account_id: AccountId) -> Option<&Customer> {
        self.customers.get(&account_id)
    }

    pub fn customer_mut(&mut self, account_id: AccountId) -> Option<&mut Customer> {
        self.customers.get_mut(&account_id)
    }

    pub fn customers(&self) -> Vec<&Customer> {
        self.customers.values().collect()
    }

    pub fn customer_count(&self) -> usize {
        self.customers.len()
    }

    /// Append a record to the log. Insertion order is the only ordering
    /// the ledger keeps.
    pub fn append_transaction(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Records affecting one account, in insertion order.
    pub fn transactions_for_account(&self, account_id: AccountId) -> Vec<Transaction> {
        self.transactions
            .iter()
            .filter(|t| t.account_id == account_id)
            .cloned()
            .collect()
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }
}
