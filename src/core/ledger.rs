use crate::core::errors::LedgerError;
use crate::core::models::{Balances, Expense, Participant, ParticipantId};
use log::debug;

/// Folds a group's expenses into a net balance per participant.
///
/// Every participant in `participants` appears in the result, with `0.0` when
/// they have no activity. The payer of an expense is credited the full amount
/// and each split debits its participant by the amount owed. No rounding is
/// applied here.
///
/// A payer or split that references a participant missing from
/// `participants` is rejected with [`LedgerError::UnknownParticipant`].
pub fn compute_balances(
    participants: &[Participant],
    expenses: &[Expense],
) -> Result<Balances, LedgerError> {
    debug!(
        "Calculating balances for {} participants over {} expenses",
        participants.len(),
        expenses.len()
    );
    let mut balances: Balances = participants
        .iter()
        .map(|p| (p.id.clone(), 0.0))
        .collect();

    for expense in expenses {
        apply(&mut balances, &expense.payer_id, expense.amount)?;
        for split in &expense.splits {
            apply(&mut balances, &split.participant_id, -split.amount_owed)?;
        }
    }

    debug!("Balances calculated: {:?}", balances);
    Ok(balances)
}

fn apply(balances: &mut Balances, id: &ParticipantId, delta: f64) -> Result<(), LedgerError> {
    let entry = balances
        .get_mut(id)
        .ok_or_else(|| LedgerError::UnknownParticipant(id.to_string()))?;
    *entry += delta;
    Ok(())
}
