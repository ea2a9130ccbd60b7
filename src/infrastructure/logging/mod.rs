pub mod in_memory;

use crate::core::errors::LedgerError;
use crate::core::models::AppLog;
use async_trait::async_trait;

/// Audit trail of ledger mutations.
#[async_trait]
pub trait LoggingService: Send + Sync {
    /// Appends an entry. `details` must be a JSON object.
    async fn log_action(
        &self,
        action: &str,
        details: serde_json::Value,
        group_id: Option<&str>,
    ) -> Result<(), LedgerError>;

    /// All entries, oldest first.
    async fn get_logs(&self) -> Result<Vec<AppLog>, LedgerError>;

    /// Entries recorded against `group_id`, oldest first.
    async fn get_group_logs(&self, group_id: &str) -> Result<Vec<AppLog>, LedgerError>;
}
