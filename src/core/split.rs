use crate::core::errors::LedgerError;
use crate::core::models::{ParticipantId, Split};
use std::collections::BTreeSet;

/// Converts an amount to whole cents.
pub(crate) fn to_cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

/// Divides `amount` evenly among `involved`, one share per distinct
/// participant.
///
/// Shares are computed in cents. Leftover cents go one each to the first
/// participants in id order, so the shares always sum to the amount:
/// `100.00` over three participants yields `33.34, 33.33, 33.33`.
pub fn equal_split(
    expense_id: &str,
    amount: f64,
    involved: &[ParticipantId],
) -> Result<Vec<Split>, LedgerError> {
    let involved: BTreeSet<&ParticipantId> = involved.iter().collect();
    if involved.is_empty() {
        return Err(LedgerError::NoParticipantsInvolved);
    }

    let total = to_cents(amount);
    if total <= 0 {
        return Err(LedgerError::InvalidSplit);
    }

    let count = involved.len() as i64;
    let base = total / count;
    let remainder = total % count;

    Ok(involved
        .into_iter()
        .enumerate()
        .map(|(idx, participant_id)| {
            let cents = if (idx as i64) < remainder { base + 1 } else { base };
            Split {
                expense_id: expense_id.to_string(),
                participant_id: participant_id.clone(),
                amount_owed: cents as f64 / 100.0,
            }
        })
        .collect())
}
