use crate::core::constants::DEAD_ZONE;
use crate::core::errors::LedgerError;
use crate::core::models::{Balances, ParticipantId, Transfer};
use log::debug;

/// Rounds to two decimals from the exact stored value, so `0.015` (stored
/// just below the half-way point) becomes `0.01`.
fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

/// Splits balances into debtors (negative, most negative first) and creditors
/// (positive, largest first). Rounded balances inside the dead-zone are
/// dropped. Equal amounts are ordered by participant id.
fn classify(balances: &Balances) -> (Vec<(ParticipantId, f64)>, Vec<(ParticipantId, f64)>) {
    let mut debtors = Vec::new();
    let mut creditors = Vec::new();

    for (id, &balance) in balances {
        let balance = round2(balance);
        if balance < -DEAD_ZONE {
            debtors.push((id.clone(), balance));
        } else if balance > DEAD_ZONE {
            creditors.push((id.clone(), balance));
        }
    }

    debtors.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
    creditors.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    (debtors, creditors)
}

/// Produces the transfers that settle `balances`, using a greedy match of the
/// largest debtor against the largest creditor.
///
/// The result is not guaranteed to be the shortest possible plan. Every
/// emitted amount is rounded to two decimals and strictly positive. When
/// total debt and total credit do not match exactly, whatever remains after
/// one side is exhausted is left unsettled.
pub fn compute_settlements(balances: &Balances) -> Vec<Transfer> {
    debug!("Simplifying debts with balances: {:?}", balances);
    let (mut debtors, mut creditors) = classify(balances);

    let mut settlements = Vec::new();
    let mut i = 0;
    let mut j = 0;

    while i < debtors.len() && j < creditors.len() {
        let (debtor_id, debt) = &mut debtors[i];
        let (creditor_id, credit) = &mut creditors[j];

        let amount = debt.abs().min(*credit);
        settlements.push(Transfer {
            from: debtor_id.clone(),
            to: creditor_id.clone(),
            amount: round2(amount),
        });

        *debt += amount;
        *credit -= amount;

        if debt.abs() < DEAD_ZONE {
            i += 1;
        }
        if *credit < DEAD_ZONE {
            j += 1;
        }
    }

    debug!("Simplified debts: {:?}", settlements);
    settlements
}

/// Fails when total debt and total credit, after the same rounding and
/// dead-zone filtering the planner applies, diverge by more than the
/// dead-zone.
pub fn check_reconciliation(balances: &Balances) -> Result<(), LedgerError> {
    let (debtors, creditors) = classify(balances);
    let debt: f64 = debtors.iter().map(|(_, amount)| amount.abs()).sum();
    let credit: f64 = creditors.iter().map(|(_, amount)| amount).sum();

    if (debt - credit).abs() > DEAD_ZONE {
        return Err(LedgerError::Unreconciled { debt, credit });
    }
    Ok(())
}
