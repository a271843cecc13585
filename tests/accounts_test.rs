mod common;

use anyhow::Result;
use teller::application::BankError;
use uuid::Uuid;

use common::test_service;

#[test]
fn test_open_account_starts_at_zero() -> Result<()> {
    let mut service = test_service();
    let account_id = service.open_account("John Doe");

    assert_eq!(service.balance(account_id)?, 0);
    assert!(service.history(account_id)?.is_empty());
    Ok(())
}

#[test]
fn test_open_account_identifiers_never_repeat() {
    let mut service = test_service();
    let first = service.open_account("John Doe");
    let second = service.open_account("Jane Roe");

    assert_ne!(first, second);

    let first_customer = service.customer(first).unwrap().id;
    let second_customer = service.customer(second).unwrap().id;
    assert_ne!(first_customer, second_customer);
    assert_ne!(first_customer, first);
    assert_ne!(second_customer, second);
}

#[test]
fn test_customer_lookup_returns_display_name() {
    let mut service = test_service();
    let account_id = service.open_account("John Doe");

    let customer = service.customer(account_id).unwrap();
    assert_eq!(customer.name, "John Doe");
    assert_eq!(customer.account_id(), account_id);
    assert_eq!(service.customers().len(), 1);
}

#[test]
fn test_unknown_account_is_an_error_everywhere() {
    let mut service = test_service();
    service.open_account("John Doe");
    let ghost = Uuid::new_v4();

    assert!(matches!(
        service.balance(ghost),
        Err(BankError::AccountNotFound(id)) if id == ghost
    ));
    assert!(matches!(
        service.deposit(ghost, 100),
        Err(BankError::AccountNotFound(_))
    ));
    assert!(matches!(
        service.withdraw(ghost, 100),
        Err(BankError::AccountNotFound(_))
    ));
    assert!(matches!(
        service.history(ghost),
        Err(BankError::AccountNotFound(_))
    ));

    // None of the failures left a record behind.
    assert!(service.transactions().is_empty());
}

#[test]
fn test_unknown_account_wins_over_bad_amount() {
    let mut service = test_service();

    // The account lookup happens before amount validation.
    assert!(matches!(
        service.deposit(Uuid::new_v4(), -5),
        Err(BankError::AccountNotFound(_))
    ));
}
