use super::pid;
use crate::core::errors::LedgerError;
use crate::core::split::equal_split;

#[test]
fn test_even_split() {
    let splits = equal_split("e1", 100.0, &[pid("alice"), pid("bob")]).unwrap();

    assert_eq!(splits.len(), 2);
    assert!(splits.iter().all(|s| s.amount_owed == 50.0 && s.expense_id == "e1"));
}

#[test]
fn test_remainder_cents_go_to_lowest_ids() {
    let splits = equal_split("e1", 100.0, &[pid("carol"), pid("alice"), pid("bob")]).unwrap();

    let owed: Vec<(String, f64)> = splits
        .iter()
        .map(|s| (s.participant_id.to_string(), s.amount_owed))
        .collect();
    assert_eq!(
        owed,
        vec![
            ("alice".to_string(), 33.34),
            ("bob".to_string(), 33.33),
            ("carol".to_string(), 33.33),
        ]
    );
}

#[test]
fn test_splits_sum_to_amount_in_cents() {
    let splits = equal_split("e1", 10.0, &[pid("a"), pid("b"), pid("c"), pid("d"), pid("e"), pid("f")]).unwrap();

    let total_cents: i64 = splits.iter().map(|s| (s.amount_owed * 100.0).round() as i64).sum();
    assert_eq!(total_cents, 1000);
    assert_eq!(splits.iter().filter(|s| s.amount_owed == 1.67).count(), 4);
    assert_eq!(splits.iter().filter(|s| s.amount_owed == 1.66).count(), 2);
}

#[test]
fn test_duplicate_participants_count_once() {
    let splits = equal_split("e1", 90.0, &[pid("a"), pid("b"), pid("a"), pid("c")]).unwrap();

    assert_eq!(splits.len(), 3);
    assert!(splits.iter().all(|s| s.amount_owed == 30.0));
}

#[test]
fn test_empty_involved_is_rejected() {
    let result = equal_split("e1", 10.0, &[]);
    assert!(matches!(result, Err(LedgerError::NoParticipantsInvolved)));
}

#[test]
fn test_sub_cent_amount_is_rejected() {
    let result = equal_split("e1", 0.004, &[pid("a")]);
    assert!(matches!(result, Err(LedgerError::InvalidSplit)));
}
