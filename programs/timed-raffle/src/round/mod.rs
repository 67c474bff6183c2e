pub use clock::*;
pub use coordinator::*;
pub use ledger::*;
pub use resolver::*;

pub mod clock;
pub mod coordinator;
pub mod ledger;
pub mod resolver;
pub mod upkeep;
