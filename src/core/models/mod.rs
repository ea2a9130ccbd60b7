pub mod audit;
pub mod expense;
pub mod group;
pub mod participant;
pub mod settlement;

pub use audit::AppLog;
pub use expense::{Expense, Split};
pub use group::{Group, GroupDetails};
pub use participant::{Participant, ParticipantId};
pub use settlement::{Balances, GroupBalance, Transfer};
