// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use teller::application::BankService;
use teller::domain::{AccountId, Cents, FixedClock, SequentialIds};

/// Instant the deterministic test clock is frozen at.
pub fn test_epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()
}

/// Service with deterministic id and clock sources.
pub fn test_service() -> BankService {
    BankService::with_sources(
        Box::new(SequentialIds::default()),
        Box::new(FixedClock(test_epoch())),
    )
}

/// Open an account and fund it with an initial deposit.
pub fn funded_account(service: &mut BankService, name: &str, amount_cents: Cents) -> AccountId {
    let account_id = service.open_account(name);
    service
        .deposit(account_id, amount_cents)
        .expect("initial deposit should succeed");
    account_id
}
