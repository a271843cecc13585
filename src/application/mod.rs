// Application layer - the bank's operations and their error taxonomy.

pub mod error;
pub mod service;

pub use error::*;
pub use service::*;
