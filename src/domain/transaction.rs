use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AccountId, Cents};

pub type TransactionId = Uuid;

/// The two movements an account supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdrawal => "withdrawal",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An immutable, timestamped record of a single deposit or withdrawal.
/// Records are only ever appended to the ledger, never updated or removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    /// The account this record affects.
    pub account_id: AccountId,
    pub kind: TransactionKind,
    /// Always positive; the kind decides the direction.
    pub amount_cents: Cents,
    /// When the record was created.
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    pub fn new(
        id: TransactionId,
        account_id: AccountId,
        kind: TransactionKind,
        amount_cents: Cents,
        timestamp: DateTime<Utc>,
    ) -> Self {
        assert!(amount_cents > 0, "Transaction amount must be positive");
        Self {
            id,
            account_id,
            kind,
            amount_cents,
            timestamp,
        }
    }

    /// Signed effect of this record on its account's balance.
    pub fn signed_amount(&self) -> Cents {
        match self.kind {
            TransactionKind::Deposit => self.amount_cents,
            TransactionKind::Withdrawal => -self.amount_cents,
        }
    }
}
