use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub title: String,
    pub description: String,
}

#[derive(Error, Debug, Serialize)]
pub enum LedgerError {
    /// Group with given ID not found
    #[error("Group {0} not found")]
    GroupNotFound(String),

    /// Participant with given ID not found
    #[error("Participant {0} not found")]
    ParticipantNotFound(String),

    /// An expense or split references a participant outside the supplied set
    #[error("Unknown participant {0}")]
    UnknownParticipant(String),

    /// Payer does not belong to the expense's group
    #[error("Payer {0} is not a participant of the group")]
    PayerNotInGroup(String),

    #[error("No participants involved")]
    NoParticipantsInvolved,

    /// Split amounts cannot be derived from the expense amount
    #[error("Invalid split amounts")]
    InvalidSplit,

    /// Generic input validation error with detailed field information
    #[error("Invalid input for field `{0}`: {1:?}")]
    InvalidInput(String, FieldError),

    /// Total debt and total credit diverge by more than the dead-zone
    #[error("Balances do not reconcile: debt {debt:.2}, credit {credit:.2}")]
    Unreconciled { debt: f64, credit: f64 },

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Logging error: {0}")]
    LoggingError(String),
}
