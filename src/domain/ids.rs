use uuid::Uuid;

/// Source of identifiers for customers, accounts, and transactions.
/// Injected into the service so tests can substitute a deterministic
/// sequence for the random default.
pub trait IdSource {
    fn next_id(&mut self) -> Uuid;
}

/// Random v4 identifiers. Within a process lifetime a collision is
/// vanishingly unlikely; the repository treats one as a fatal invariant
/// violation rather than handling it.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&mut self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Deterministic identifiers for tests: 1, 2, 3, ... encoded as uuids.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialIds {
    next: u128,
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> Uuid {
        self.next += 1;
        Uuid::from_u128(self.next)
    }
}
