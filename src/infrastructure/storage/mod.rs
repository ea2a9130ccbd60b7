use crate::core::errors::LedgerError;
use crate::core::models::{Expense, Group, Participant};
use async_trait::async_trait;

/// Participants and expenses of one group, read under a single lock scope.
#[derive(Clone, Debug, Default)]
pub struct LedgerSnapshot {
    pub participants: Vec<Participant>,
    pub expenses: Vec<Expense>,
}

#[async_trait]
pub trait Storage: Send + Sync {
    async fn save_group(&self, group: Group) -> Result<(), LedgerError>;
    async fn get_group(&self, group_id: &str) -> Result<Option<Group>, LedgerError>;
    async fn list_groups(&self) -> Result<Vec<Group>, LedgerError>;
    async fn save_participant(&self, participant: Participant) -> Result<(), LedgerError>;
    async fn get_participant(&self, group_id: &str, participant_id: &str) -> Result<Option<Participant>, LedgerError>;
    async fn list_participants(&self, group_id: &str) -> Result<Vec<Participant>, LedgerError>;
    async fn save_expense(&self, expense: Expense) -> Result<(), LedgerError>;
    async fn list_expenses(&self, group_id: &str) -> Result<Vec<Expense>, LedgerError>;
    async fn get_ledger_snapshot(&self, group_id: &str) -> Result<LedgerSnapshot, LedgerError>;
}

pub mod in_memory;
