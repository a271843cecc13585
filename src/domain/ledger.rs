use std::collections::HashMap;

use super::{AccountId, Cents, Transaction};

/// Recompute the balance of a single account by replaying the transaction
/// log. Balance = sum of deposits - sum of withdrawals, starting from zero.
pub fn replay_balance(account_id: AccountId, transactions: &[Transaction]) -> Cents {
    transactions
        .iter()
        .filter(|t| t.account_id == account_id)
        .map(Transaction::signed_amount)
        .sum()
}

/// Recompute balances for every account that appears in the log.
pub fn replay_all_balances(transactions: &[Transaction]) -> HashMap<AccountId, Cents> {
    let mut balances: HashMap<AccountId, Cents> = HashMap::new();

    for transaction in transactions {
        *balances.entry(transaction.account_id).or_insert(0) += transaction.signed_amount();
    }

    balances
}

/// One account whose stored balance disagrees with the replayed log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceMismatch {
    pub account_id: AccountId,
    pub stored_cents: Cents,
    pub replayed_cents: Cents,
}

/// Outcome of auditing the ledger: every stored balance checked against a
/// replay of the append-only log.
#[derive(Debug, Clone, Default)]
pub struct AuditReport {
    pub account_count: usize,
    pub transaction_count: usize,
    pub mismatches: Vec<BalanceMismatch>,
}

impl AuditReport {
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Audit stored balances against the transaction log.
pub fn audit_balances(stored: &[(AccountId, Cents)], transactions: &[Transaction]) -> AuditReport {
    let replayed = replay_all_balances(transactions);

    let mismatches = stored
        .iter()
        .filter_map(|&(account_id, stored_cents)| {
            let replayed_cents = replayed.get(&account_id).copied().unwrap_or(0);
            if stored_cents != replayed_cents {
                Some(BalanceMismatch {
                    account_id,
                    stored_cents,
                    replayed_cents,
                })
            } else {
                None
            }
        })
        .collect();

    AuditReport {
        account_count: stored.len(),
        transaction_count: transactions.len(),
        mismatches,
    }
}
