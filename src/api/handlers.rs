use crate::{
    api::models::*,
    core::{
        models::{AppLog, Expense, Group, GroupBalance, GroupDetails, Participant},
        services::LedgerService,
    },
    infrastructure::{logging::in_memory::InMemoryLogging, storage::in_memory::InMemoryStorage},
};
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use std::sync::Arc;

pub type SharedService = Arc<LedgerService<InMemoryLogging, InMemoryStorage>>;

// Define API routes
pub fn api_routes(service: SharedService) -> Router {
    Router::new()
        .route("/groups", get(list_groups).post(create_group))
        .route("/groups/{group_id}", get(get_group))
        .route(
            "/groups/{group_id}/participants",
            axum::routing::post(add_participant),
        )
        .route(
            "/groups/{group_id}/expenses",
            get(list_expenses).post(add_expense),
        )
        .route("/groups/{group_id}/balance", get(get_group_balance))
        .route("/groups/{group_id}/logs", get(get_group_logs))
        .route("/logs", get(get_app_logs))
        .with_state(service)
}

#[utoipa::path(
    post,
    path = "/api/groups",
    request_body = CreateGroupRequest,
    responses(
        (status = 201, description = "Group created successfully", body = GroupDetails),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_group(
    State(service): State<SharedService>,
    Json(req): Json<CreateGroupRequest>,
) -> Result<(StatusCode, Json<GroupDetails>), ApiError> {
    let details = service
        .create_group(req.name, req.currency, req.participants)
        .await?;
    Ok((StatusCode::CREATED, Json(details)))
}

#[utoipa::path(
    get,
    path = "/api/groups",
    responses(
        (status = 200, description = "Groups, newest first", body = Vec<Group>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_groups(State(service): State<SharedService>) -> Result<Json<Vec<Group>>, ApiError> {
    let groups = service.list_groups().await?;
    Ok(Json(groups))
}

#[utoipa::path(
    get,
    path = "/api/groups/{group_id}",
    params(
        ("group_id" = String, Path, description = "ID of the group to retrieve")
    ),
    responses(
        (status = 200, description = "Group and its participants", body = GroupDetails),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_group(
    State(service): State<SharedService>,
    Path(group_id): Path<String>,
) -> Result<Json<GroupDetails>, ApiError> {
    let details = service.get_group(&group_id).await?;
    Ok(Json(details))
}

#[utoipa::path(
    post,
    path = "/api/groups/{group_id}/participants",
    request_body = AddParticipantRequest,
    params(
        ("group_id" = String, Path, description = "ID of the group")
    ),
    responses(
        (status = 201, description = "Participant added", body = Participant),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn add_participant(
    State(service): State<SharedService>,
    Path(group_id): Path<String>,
    Json(req): Json<AddParticipantRequest>,
) -> Result<(StatusCode, Json<Participant>), ApiError> {
    let participant = service.add_participant(&group_id, req.name).await?;
    Ok((StatusCode::CREATED, Json(participant)))
}

#[utoipa::path(
    post,
    path = "/api/groups/{group_id}/expenses",
    request_body = AddExpenseRequest,
    params(
        ("group_id" = String, Path, description = "ID of the group")
    ),
    responses(
        (status = 201, description = "Expense recorded with equal splits", body = Expense),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 404, description = "Group or participant not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn add_expense(
    State(service): State<SharedService>,
    Path(group_id): Path<String>,
    Json(req): Json<AddExpenseRequest>,
) -> Result<(StatusCode, Json<Expense>), ApiError> {
    let expense = service
        .add_expense(&group_id, req.title, req.amount, &req.payer_id, &req.involved_ids)
        .await?;
    Ok((StatusCode::CREATED, Json(expense)))
}

#[utoipa::path(
    get,
    path = "/api/groups/{group_id}/expenses",
    params(
        ("group_id" = String, Path, description = "ID of the group")
    ),
    responses(
        (status = 200, description = "Expenses, newest first", body = Vec<Expense>),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_expenses(
    State(service): State<SharedService>,
    Path(group_id): Path<String>,
) -> Result<Json<Vec<Expense>>, ApiError> {
    let expenses = service.list_expenses(&group_id).await?;
    Ok(Json(expenses))
}

#[utoipa::path(
    get,
    path = "/api/groups/{group_id}/balance",
    params(
        ("group_id" = String, Path, description = "ID of the group")
    ),
    responses(
        (status = 200, description = "Net balances and settlement plan", body = GroupBalance),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 422, description = "Stored ledger is inconsistent", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_group_balance(
    State(service): State<SharedService>,
    Path(group_id): Path<String>,
) -> Result<Json<GroupBalance>, ApiError> {
    let balance = service.get_group_balance(&group_id).await?;
    Ok(Json(balance))
}

#[utoipa::path(
    get,
    path = "/api/logs",
    responses(
        (status = 200, description = "Audit log entries", body = Vec<AppLog>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_app_logs(State(service): State<SharedService>) -> Result<Json<Vec<AppLog>>, ApiError> {
    let logs = service.get_app_logs().await?;
    Ok(Json(logs))
}

#[utoipa::path(
    get,
    path = "/api/groups/{group_id}/logs",
    params(("group_id" = String, Path, description = "Group ID")),
    responses(
        (status = 200, description = "Audit log entries for the group", body = Vec<AppLog>),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_group_logs(
    State(service): State<SharedService>,
    Path(group_id): Path<String>,
) -> Result<Json<Vec<AppLog>>, ApiError> {
    let logs = service.get_group_logs(&group_id).await?;
    Ok(Json(logs))
}
