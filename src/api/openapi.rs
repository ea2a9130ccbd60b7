use utoipa::OpenApi;

use crate::{
    api::models::{AddExpenseRequest, AddParticipantRequest, CreateGroupRequest, ErrorResponse},
    core::models::{AppLog, Expense, Group, GroupBalance, GroupDetails, Participant, ParticipantId, Split, Transfer},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::create_group,
        super::handlers::list_groups,
        super::handlers::get_group,
        super::handlers::add_participant,
        super::handlers::add_expense,
        super::handlers::list_expenses,
        super::handlers::get_group_balance,
        super::handlers::get_app_logs,
        super::handlers::get_group_logs
    ),
    components(schemas(
        CreateGroupRequest,
        AddParticipantRequest,
        AddExpenseRequest,
        ErrorResponse,
        Group,
        GroupDetails,
        Participant,
        ParticipantId,
        Expense,
        Split,
        Transfer,
        GroupBalance,
        AppLog
    )),
    info(
        title = "evenup API",
        description = "API for recording shared group expenses and settling balances",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
