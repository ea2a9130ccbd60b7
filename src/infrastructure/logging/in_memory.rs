use crate::core::errors::LedgerError;
use crate::core::models::AppLog;
use crate::infrastructure::logging::LoggingService;
use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
struct AuditTrail {
    entries: Vec<AppLog>,
    // positions into `entries`, per group
    by_group: HashMap<String, Vec<usize>>,
}

#[derive(Clone, Default)]
pub struct InMemoryLogging {
    trail: Arc<RwLock<AuditTrail>>,
}

impl InMemoryLogging {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LoggingService for InMemoryLogging {
    async fn log_action(
        &self,
        action: &str,
        details: Value,
        group_id: Option<&str>,
    ) -> Result<(), LedgerError> {
        let details = match details {
            Value::Object(map) => map.into_iter().collect(),
            other => {
                return Err(LedgerError::LoggingError(format!(
                    "Audit details for {} must be a JSON object, got {}",
                    action, other
                )));
            }
        };
        let entry = AppLog {
            id: Uuid::new_v4().to_string(),
            action: action.to_string(),
            group_id: group_id.map(String::from),
            details,
            timestamp: Utc::now(),
        };

        let mut trail = self.trail.write().await;
        let position = trail.entries.len();
        if let Some(group_id) = group_id {
            trail
                .by_group
                .entry(group_id.to_string())
                .or_default()
                .push(position);
        }
        trail.entries.push(entry);
        Ok(())
    }

    async fn get_logs(&self) -> Result<Vec<AppLog>, LedgerError> {
        let trail = self.trail.read().await;
        Ok(trail.entries.clone())
    }

    async fn get_group_logs(&self, group_id: &str) -> Result<Vec<AppLog>, LedgerError> {
        let trail = self.trail.read().await;
        Ok(trail
            .by_group
            .get(group_id)
            .map(|positions| positions.iter().map(|&i| trail.entries[i].clone()).collect())
            .unwrap_or_default())
    }
}
