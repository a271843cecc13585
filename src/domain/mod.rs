mod account;
mod clock;
mod customer;
mod ids;
mod ledger;
mod money;
mod transaction;

pub use account::*;
pub use clock::*;
pub use customer::*;
pub use ids::*;
pub use ledger::*;
pub use money::*;
pub use transaction::*;
