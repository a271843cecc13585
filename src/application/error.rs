use thiserror::Error;

use crate::domain::{AccountId, Cents};

/// Failures the bank's operations can report. All are terminal for the
/// single operation that raised them: the customer mapping and the
/// transaction log are left exactly as they were before the call.
#[derive(Error, Debug)]
pub enum BankError {
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    #[error("Invalid amount: {0} cents, amounts must be positive")]
    InvalidAmount(Cents),

    #[error(
        "Insufficient balance in account {account_id}: balance {balance_cents}, requested {requested_cents}"
    )]
    InsufficientBalance {
        account_id: AccountId,
        balance_cents: Cents,
        requested_cents: Cents,
    },
}
