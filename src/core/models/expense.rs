use super::participant::ParticipantId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct Split {
    pub expense_id: String,
    pub participant_id: ParticipantId,
    pub amount_owed: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct Expense {
    pub id: String,
    pub group_id: String,
    pub title: String,
    pub amount: f64,
    pub payer_id: ParticipantId,
    #[schema(value_type = String, example = "2024-06-01T12:34:56Z")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub splits: Vec<Split>,
}
