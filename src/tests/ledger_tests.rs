use super::{expense, participant, pid};
use crate::core::errors::LedgerError;
use crate::core::ledger::compute_balances;
use crate::core::models::{Expense, ParticipantId};
use crate::core::split::equal_split;
use chrono::Utc;
use proptest::prelude::*;

#[test]
fn test_empty_group_has_all_zero_balances() {
    let _ = env_logger::try_init();
    let participants = vec![participant("alice", "Alice"), participant("bob", "Bob")];

    let balances = compute_balances(&participants, &[]).unwrap();

    assert_eq!(balances.len(), 2);
    assert_eq!(balances[&pid("alice")], 0.0);
    assert_eq!(balances[&pid("bob")], 0.0);
}

#[test]
fn test_payer_credited_and_splits_debited() {
    let _ = env_logger::try_init();
    let participants = vec![participant("alice", "Alice"), participant("bob", "Bob")];
    let expenses = vec![expense("e1", "alice", 100.0, &[("alice", 50.0), ("bob", 50.0)])];

    let balances = compute_balances(&participants, &expenses).unwrap();

    assert_eq!(balances[&pid("alice")], 50.0);
    assert_eq!(balances[&pid("bob")], -50.0);
}

#[test]
fn test_inactive_participant_stays_at_zero() {
    let _ = env_logger::try_init();
    let participants = vec![
        participant("alice", "Alice"),
        participant("bob", "Bob"),
        participant("carol", "Carol"),
        participant("dave", "Dave"),
    ];
    let expenses = vec![
        expense("e1", "alice", 90.0, &[("alice", 30.0), ("bob", 30.0), ("carol", 30.0)]),
        expense("e2", "bob", 20.0, &[("alice", 10.0), ("carol", 10.0)]),
    ];

    let balances = compute_balances(&participants, &expenses).unwrap();

    assert_eq!(balances[&pid("alice")], 50.0);
    assert_eq!(balances[&pid("bob")], -10.0);
    assert_eq!(balances[&pid("carol")], -40.0);
    assert_eq!(balances[&pid("dave")], 0.0);
}

#[test]
fn test_payer_outside_split_is_owed_full_amount() {
    let participants = vec![participant("alice", "Alice"), participant("bob", "Bob")];
    let expenses = vec![expense("e1", "alice", 40.0, &[("bob", 40.0)])];

    let balances = compute_balances(&participants, &expenses).unwrap();

    assert_eq!(balances[&pid("alice")], 40.0);
    assert_eq!(balances[&pid("bob")], -40.0);
}

#[test]
fn test_unknown_split_participant_is_rejected() {
    let participants = vec![participant("alice", "Alice")];
    let expenses = vec![expense("e1", "alice", 10.0, &[("alice", 5.0), ("mallory", 5.0)])];

    let result = compute_balances(&participants, &expenses);

    assert!(matches!(result, Err(LedgerError::UnknownParticipant(id)) if id == "mallory"));
}

#[test]
fn test_unknown_payer_is_rejected() {
    let participants = vec![participant("alice", "Alice")];
    let expenses = vec![expense("e1", "zed", 10.0, &[("alice", 10.0)])];

    let result = compute_balances(&participants, &expenses);

    assert!(matches!(result, Err(LedgerError::UnknownParticipant(id)) if id == "zed"));
}

#[test]
fn test_compute_balances_is_idempotent() {
    let participants = vec![
        participant("alice", "Alice"),
        participant("bob", "Bob"),
        participant("carol", "Carol"),
    ];
    let expenses = vec![
        expense("e1", "carol", 33.33, &[("alice", 11.11), ("bob", 11.11), ("carol", 11.11)]),
        expense("e2", "bob", 7.5, &[("alice", 7.5)]),
    ];

    let first = compute_balances(&participants, &expenses).unwrap();
    let second = compute_balances(&participants, &expenses).unwrap();

    assert_eq!(first, second);
}

fn generated_expenses(
    participants: &[ParticipantId],
    amounts: &[u32],
    payers: &[usize],
    masks: &[u8],
) -> Vec<Expense> {
    amounts
        .iter()
        .enumerate()
        .filter_map(|(idx, &cents)| {
            let payer = participants[payers[idx % payers.len()] % participants.len()].clone();
            let mask = masks[idx % masks.len()];
            let involved: Vec<ParticipantId> = participants
                .iter()
                .enumerate()
                .filter(|(bit, _)| mask & (1 << bit) != 0)
                .map(|(_, id)| id.clone())
                .collect();
            let id = format!("e{}", idx);
            let amount = cents as f64 / 100.0;
            let splits = equal_split(&id, amount, &involved).ok()?;
            Some(Expense {
                id,
                group_id: "g1".to_string(),
                title: "generated".to_string(),
                amount,
                payer_id: payer,
                created_at: Utc::now(),
                splits,
            })
        })
        .collect()
}

proptest! {
    #[test]
    fn balances_sum_to_zero(
        member_count in 1usize..=6,
        amounts in prop::collection::vec(1u32..=10_000, 0..=20),
        payers in prop::collection::vec(0usize..=5, 1..=20),
        masks in prop::collection::vec(1u8..=63, 1..=20),
    ) {
        let participants: Vec<_> = (0..member_count)
            .map(|idx| participant(&format!("p{}", idx), &format!("P{}", idx)))
            .collect();
        let ids: Vec<ParticipantId> = participants.iter().map(|p| p.id.clone()).collect();
        let expenses = generated_expenses(&ids, &amounts, &payers, &masks);

        let balances = compute_balances(&participants, &expenses).unwrap();
        let total: f64 = balances.values().sum();

        prop_assert_eq!(balances.len(), member_count);
        prop_assert!(total.abs() < 1e-9, "balances sum to {}", total);
    }
}
