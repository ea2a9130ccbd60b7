use crate::core::errors::LedgerError;
use crate::core::models::{Expense, Group, Participant};
use crate::infrastructure::storage::{LedgerSnapshot, Storage};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

// Lock order is groups, participants, expenses.
#[derive(Clone, Default)]
pub struct InMemoryStorage {
    groups: Arc<RwLock<HashMap<String, Group>>>,
    participants: Arc<RwLock<HashMap<String, Vec<Participant>>>>,
    expenses: Arc<RwLock<HashMap<String, Vec<Expense>>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage {
            groups: Arc::new(RwLock::new(HashMap::new())),
            participants: Arc::new(RwLock::new(HashMap::new())),
            expenses: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

fn newest_first(expenses: &mut [Expense]) {
    expenses.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id)));
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn save_group(&self, group: Group) -> Result<(), LedgerError> {
        let mut groups = self.groups.write().await;
        groups.insert(group.id.clone(), group);
        Ok(())
    }

    async fn get_group(&self, group_id: &str) -> Result<Option<Group>, LedgerError> {
        let groups = self.groups.read().await;
        Ok(groups.get(group_id).cloned())
    }

    async fn list_groups(&self) -> Result<Vec<Group>, LedgerError> {
        let groups = self.groups.read().await;
        let mut groups: Vec<Group> = groups.values().cloned().collect();
        groups.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(groups)
    }

    async fn save_participant(&self, participant: Participant) -> Result<(), LedgerError> {
        let groups = self.groups.read().await;
        if !groups.contains_key(&participant.group_id) {
            return Err(LedgerError::GroupNotFound(participant.group_id));
        }
        let mut participants = self.participants.write().await;
        participants
            .entry(participant.group_id.clone())
            .or_default()
            .push(participant);
        Ok(())
    }

    async fn get_participant(&self, group_id: &str, participant_id: &str) -> Result<Option<Participant>, LedgerError> {
        let participants = self.participants.read().await;
        Ok(participants
            .get(group_id)
            .and_then(|ps| ps.iter().find(|p| p.id.as_str() == participant_id))
            .cloned())
    }

    async fn list_participants(&self, group_id: &str) -> Result<Vec<Participant>, LedgerError> {
        let participants = self.participants.read().await;
        Ok(participants.get(group_id).cloned().unwrap_or_default())
    }

    async fn save_expense(&self, expense: Expense) -> Result<(), LedgerError> {
        let groups = self.groups.read().await;
        if !groups.contains_key(&expense.group_id) {
            return Err(LedgerError::GroupNotFound(expense.group_id));
        }
        let mut expenses = self.expenses.write().await;
        expenses.entry(expense.group_id.clone()).or_default().push(expense);
        Ok(())
    }

    async fn list_expenses(&self, group_id: &str) -> Result<Vec<Expense>, LedgerError> {
        let expenses = self.expenses.read().await;
        let mut expenses = expenses.get(group_id).cloned().unwrap_or_default();
        newest_first(&mut expenses);
        Ok(expenses)
    }

    async fn get_ledger_snapshot(&self, group_id: &str) -> Result<LedgerSnapshot, LedgerError> {
        let participants = self.participants.read().await;
        let expenses = self.expenses.read().await;
        Ok(LedgerSnapshot {
            participants: participants.get(group_id).cloned().unwrap_or_default(),
            expenses: expenses.get(group_id).cloned().unwrap_or_default(),
        })
    }
}
