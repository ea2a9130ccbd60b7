use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::errors::LedgerError;
use crate::core::models::ParticipantId;

// Request structs for JSON payloads
#[derive(Deserialize, ToSchema)]
pub struct CreateGroupRequest {
    pub name: String,
    pub currency: Option<String>,
    #[serde(default)]
    pub participants: Vec<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct AddParticipantRequest {
    pub name: String,
}

#[derive(Deserialize, ToSchema)]
pub struct AddExpenseRequest {
    pub title: String,
    pub amount: f64,
    pub payer_id: ParticipantId,
    #[serde(default)]
    pub involved_ids: Vec<ParticipantId>,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

// Newtype wrapper for LedgerError to implement IntoResponse
pub struct ApiError(pub LedgerError);

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        ApiError(err)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self.0 {
            LedgerError::GroupNotFound(_) | LedgerError::ParticipantNotFound(_) => StatusCode::NOT_FOUND,
            LedgerError::PayerNotInGroup(_)
            | LedgerError::NoParticipantsInvolved
            | LedgerError::InvalidSplit
            | LedgerError::InvalidInput(..) => StatusCode::BAD_REQUEST,
            LedgerError::UnknownParticipant(_) | LedgerError::Unreconciled { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            LedgerError::StorageError(_) | LedgerError::LoggingError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let error = match &self.0 {
            LedgerError::InvalidInput(_, detail) => format!("{}: {}", detail.title, detail.description),
            other => other.to_string(),
        };
        (status, Json(ErrorResponse { error })).into_response()
    }
}
