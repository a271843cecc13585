use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Cents;

pub type AccountId = Uuid;

/// A single customer account holding a non-negative balance.
///
/// The balance field is private: it only changes through `credit` and
/// `debit`, and the service layer rejects any operation that would drive
/// it negative before calling either.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    balance_cents: Cents,
}

impl Account {
    /// Open an account with a zero balance.
    pub fn new(id: AccountId) -> Self {
        Self {
            id,
            balance_cents: 0,
        }
    }

    pub fn balance_cents(&self) -> Cents {
        self.balance_cents
    }

    /// True if the balance covers a withdrawal of `amount_cents`.
    pub fn can_cover(&self, amount_cents: Cents) -> bool {
        amount_cents <= self.balance_cents
    }

    /// Increase the balance. The caller has already validated the amount.
    pub(crate) fn credit(&mut self, amount_cents: Cents) {
        debug_assert!(amount_cents > 0);
        self.balance_cents += amount_cents;
    }

    /// Decrease the balance. The caller has already validated the amount
    /// and checked coverage, so the balance stays non-negative.
    pub(crate) fn debit(&mut self, amount_cents: Cents) {
        debug_assert!(amount_cents > 0 && self.can_cover(amount_cents));
        self.balance_cents -= amount_cents;
    }
}
