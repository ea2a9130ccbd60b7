use super::participant::ParticipantId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Net balance per participant: positive is owed money, negative owes money.
pub type Balances = BTreeMap<ParticipantId, f64>;

/// A recommended payment from one participant to another.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Transfer {
    pub from: ParticipantId,
    pub to: ParticipantId,
    pub amount: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct GroupBalance {
    #[schema(value_type = Object)]
    pub balances: Balances,
    pub settlements: Vec<Transfer>,
}
