mod ledger_tests;
mod logging_tests;
mod split_tests;

use crate::core::models::{Expense, Participant, ParticipantId, Split};
use crate::core::services::LedgerService;
use crate::infrastructure::logging::in_memory::InMemoryLogging;
use crate::infrastructure::storage::in_memory::InMemoryStorage;
use chrono::Utc;

pub fn create_test_service() -> LedgerService<InMemoryLogging, InMemoryStorage> {
    let storage = InMemoryStorage::new();
    let logging = InMemoryLogging::new();
    LedgerService::new(storage, logging).with_strict_reconciliation(false)
}

pub fn participant(id: &str, name: &str) -> Participant {
    Participant {
        id: ParticipantId::from(id),
        group_id: "g1".to_string(),
        name: name.to_string(),
    }
}

/// Expense in group `g1` with explicit (participant, amount owed) shares.
pub fn expense(id: &str, payer: &str, amount: f64, shares: &[(&str, f64)]) -> Expense {
    Expense {
        id: id.to_string(),
        group_id: "g1".to_string(),
        title: format!("Expense {}", id),
        amount,
        payer_id: ParticipantId::from(payer),
        created_at: Utc::now(),
        splits: shares
            .iter()
            .map(|(pid, owed)| Split {
                expense_id: id.to_string(),
                participant_id: ParticipantId::from(*pid),
                amount_owed: *owed,
            })
            .collect(),
    }
}

pub fn pid(id: &str) -> ParticipantId {
    ParticipantId::from(id)
}
