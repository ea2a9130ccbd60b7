pub mod api;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use crate::core::errors::LedgerError;
pub use crate::core::ledger::compute_balances;
pub use crate::core::services::LedgerService;
pub use crate::core::settlement::{check_reconciliation, compute_settlements};
pub use crate::core::split::equal_split;

#[cfg(test)]
mod tests;
