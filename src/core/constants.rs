/// Balances within this band around zero are treated as settled.
pub const DEAD_ZONE: f64 = 0.01;

pub const MAX_AMOUNT: f64 = 1_000_000.0;
pub const MAX_GROUP_NAME_LEN: usize = 100;
pub const MAX_PARTICIPANT_NAME_LEN: usize = 50;
pub const MAX_EXPENSE_TITLE_LEN: usize = 100;

// Audit actions
pub const GROUP_CREATED: &str = "GROUP_CREATED";
pub const PARTICIPANT_ADDED: &str = "PARTICIPANT_ADDED";
pub const EXPENSE_ADDED: &str = "EXPENSE_ADDED";
