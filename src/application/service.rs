use crate::domain::{
    audit_balances, AccountId, AuditReport, Cents, Clock, Customer, IdSource, RandomIds,
    SystemClock, Transaction, TransactionKind,
};
use crate::storage::Repository;

use super::BankError;

/// Application service providing the bank's operations: open an account,
/// deposit, withdraw, query balances and history. This is the only write
/// path to the underlying repository.
///
/// A service starts with an empty ledger and is owned by its caller; state
/// lives for the lifetime of the value and is dropped with it. Mutating
/// operations take `&mut self`, so the balance read-modify-write is
/// exclusive by construction; callers sharing a service across threads
/// wrap it in a `Mutex`.
pub struct BankService {
    repo: Repository,
    ids: Box<dyn IdSource>,
    clock: Box<dyn Clock>,
}

impl Default for BankService {
    fn default() -> Self {
        Self::new()
    }
}

impl BankService {
    /// Empty ledger using random identifiers and the system clock.
    pub fn new() -> Self {
        Self::with_sources(Box::new(RandomIds), Box::new(SystemClock))
    }

    /// Empty ledger with caller-supplied id and clock sources. Tests pass
    /// deterministic sources here.
    pub fn with_sources(ids: Box<dyn IdSource>, clock: Box<dyn Clock>) -> Self {
        Self {
            repo: Repository::new(),
            ids,
            clock,
        }
    }

    // ========================
    // Customer operations
    // ========================

    /// Open an account for a new customer and return the account id.
    /// The display name is taken as given.
    pub fn open_account(&mut self, name: impl Into<String>) -> AccountId {
        let customer_id = self.ids.next_id();
        let account_id = self.ids.next_id();

        self.repo
            .insert_customer(Customer::new(customer_id, name, account_id));

        account_id
    }

    /// Look up the customer owning the given account.
    pub fn customer(&self, account_id: AccountId) -> Result<&Customer, BankError> {
        self.repo
            .customer(account_id)
            .ok_or(BankError::AccountNotFound(account_id))
    }

    /// All customers, in no particular order.
    pub fn customers(&self) -> Vec<&Customer> {
        self.repo.customers()
    }

    // ========================
    // Account operations
    // ========================

    /// Deposit into an account. On success the balance is increased and a
    /// deposit record is appended to the log; the record is returned.
    pub fn deposit(
        &mut self,
        account_id: AccountId,
        amount_cents: Cents,
    ) -> Result<Transaction, BankError> {
        let customer = self
            .repo
            .customer_mut(account_id)
            .ok_or(BankError::AccountNotFound(account_id))?;

        if amount_cents <= 0 {
            return Err(BankError::InvalidAmount(amount_cents));
        }

        customer.account.credit(amount_cents);
        Ok(self.record(account_id, TransactionKind::Deposit, amount_cents))
    }

    /// Withdraw from an account. Rejected without mutation when the amount
    /// exceeds the current balance, keeping the balance non-negative.
    pub fn withdraw(
        &mut self,
        account_id: AccountId,
        amount_cents: Cents,
    ) -> Result<Transaction, BankError> {
        let customer = self
            .repo
            .customer_mut(account_id)
            .ok_or(BankError::AccountNotFound(account_id))?;

        if amount_cents <= 0 {
            return Err(BankError::InvalidAmount(amount_cents));
        }

        if !customer.account.can_cover(amount_cents) {
            return Err(BankError::InsufficientBalance {
                account_id,
                balance_cents: customer.account.balance_cents(),
                requested_cents: amount_cents,
            });
        }

        customer.account.debit(amount_cents);
        Ok(self.record(account_id, TransactionKind::Withdrawal, amount_cents))
    }

    /// Current balance of an account. Read-only.
    pub fn balance(&self, account_id: AccountId) -> Result<Cents, BankError> {
        Ok(self.customer(account_id)?.account.balance_cents())
    }

    // ========================
    // Transaction log
    // ========================

    /// Transactions affecting an account, in the order they were recorded
    /// (the log is append-only, so recorded order is chronological order).
    /// An account with no activity yields an empty list; an unknown
    /// account is an error, consistent with `balance`.
    pub fn history(&self, account_id: AccountId) -> Result<Vec<Transaction>, BankError> {
        self.customer(account_id)?;
        Ok(self.repo.transactions_for_account(account_id))
    }

    /// The whole log across all accounts, in recorded order.
    pub fn transactions(&self) -> &[Transaction] {
        self.repo.transactions()
    }

    /// Check every stored balance against a replay of the transaction log.
    pub fn check(&self) -> AuditReport {
        let stored: Vec<(AccountId, Cents)> = self
            .repo
            .customers()
            .into_iter()
            .map(|c| (c.account.id, c.account.balance_cents()))
            .collect();

        audit_balances(&stored, self.repo.transactions())
    }

    /// Append a freshly stamped record for a mutation that already
    /// happened. Must only be called after the balance change succeeded.
    fn record(
        &mut self,
        account_id: AccountId,
        kind: TransactionKind,
        amount_cents: Cents,
    ) -> Transaction {
        let transaction = Transaction::new(
            self.ids.next_id(),
            account_id,
            kind,
            amount_cents,
            self.clock.now(),
        );
        self.repo.append_transaction(transaction.clone());
        transaction
    }
}
