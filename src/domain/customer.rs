use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Account, AccountId};

pub type CustomerId = Uuid;

/// A bank customer. Every customer owns exactly one account, opened
/// together with the customer record and sharing its lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub account: Account,
}

impl Customer {
    pub fn new(id: CustomerId, name: impl Into<String>, account_id: AccountId) -> Self {
        Self {
            id,
            name: name.into(),
            account: Account::new(account_id),
        }
    }

    pub fn account_id(&self) -> AccountId {
        self.account.id
    }
}
