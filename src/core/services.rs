use crate::config::CONFIG;
use crate::core::constants::{
    EXPENSE_ADDED, GROUP_CREATED, MAX_AMOUNT, MAX_EXPENSE_TITLE_LEN, MAX_GROUP_NAME_LEN,
    MAX_PARTICIPANT_NAME_LEN, PARTICIPANT_ADDED,
};
use crate::core::errors::{FieldError, LedgerError};
use crate::core::ledger::compute_balances;
use crate::core::models::{
    AppLog, Expense, Group, GroupBalance, GroupDetails, Participant, ParticipantId,
};
use crate::core::settlement::{check_reconciliation, compute_settlements};
use crate::core::split::{equal_split, to_cents};
use crate::infrastructure::logging::LoggingService;
use crate::infrastructure::storage::Storage;
use chrono::Utc;
use log::{debug, info, warn};
use serde_json::json;
use uuid::Uuid;

pub struct LedgerService<L: LoggingService, S: Storage> {
    storage: S,
    logging: L,
    strict_reconciliation: bool,
}

impl<L: LoggingService, S: Storage> LedgerService<L, S> {
    pub fn new(storage: S, logging: L) -> Self {
        info!("Initializing LedgerService");
        LedgerService {
            storage,
            logging,
            strict_reconciliation: CONFIG.strict_reconciliation,
        }
    }

    pub fn with_strict_reconciliation(mut self, strict: bool) -> Self {
        self.strict_reconciliation = strict;
        self
    }

    async fn require_group(&self, group_id: &str) -> Result<Group, LedgerError> {
        self.storage
            .get_group(group_id)
            .await?
            .ok_or_else(|| LedgerError::GroupNotFound(group_id.to_string()))
    }

    fn validate_string_input(&self, field: &str, value: &str, max_length: usize) -> Result<(), LedgerError> {
        if value.trim().is_empty() {
            return Err(LedgerError::InvalidInput(
                field.to_string(),
                FieldError {
                    field: field.to_string(),
                    title: format!("Invalid {}", field),
                    description: format!("{} cannot be empty", field),
                },
            ));
        }
        if value.chars().count() > max_length {
            return Err(LedgerError::InvalidInput(
                field.to_string(),
                FieldError {
                    field: field.to_string(),
                    title: format!("{} Too Long", field),
                    description: format!("{} cannot exceed {} characters", field, max_length),
                },
            ));
        }
        if value.chars().any(|c| c.is_control() || "<>{}[]".contains(c)) {
            return Err(LedgerError::InvalidInput(
                field.to_string(),
                FieldError {
                    field: field.to_string(),
                    title: format!("Invalid {}", field),
                    description: format!("{} contains invalid characters", field),
                },
            ));
        }
        Ok(())
    }

    fn validate_amount_input(&self, field: &str, amount: f64) -> Result<(), LedgerError> {
        let invalid = |title: &str, description: &str| {
            LedgerError::InvalidInput(
                field.to_string(),
                FieldError {
                    field: field.to_string(),
                    title: title.to_string(),
                    description: description.to_string(),
                },
            )
        };

        if !amount.is_finite() {
            return Err(invalid("Invalid Amount", "Amount must be a finite number"));
        }
        if amount <= 0.0 {
            return Err(invalid("Invalid Amount", "Amount must be greater than 0"));
        }
        if amount > MAX_AMOUNT {
            return Err(invalid("Amount Too Large", "Amount cannot exceed 1,000,000"));
        }
        let scaled = amount * 100.0;
        if (scaled - scaled.round()).abs() > 1e-6 {
            return Err(invalid(
                "Invalid Amount",
                "Amount cannot have more than 2 decimal places",
            ));
        }
        Ok(())
    }

    async fn log_action(
        &self,
        group_id: Option<&str>,
        action: &str,
        details: serde_json::Value,
    ) -> Result<(), LedgerError> {
        self.logging.log_action(action, details, group_id).await
    }

    // GROUPS & PARTICIPANTS

    pub async fn create_group(
        &self,
        name: String,
        currency: Option<String>,
        participant_names: Vec<String>,
    ) -> Result<GroupDetails, LedgerError> {
        info!("Creating group '{}' with {} participants", name, participant_names.len());
        self.validate_string_input("name", &name, MAX_GROUP_NAME_LEN)?;
        for participant_name in &participant_names {
            self.validate_string_input("participants", participant_name, MAX_PARTICIPANT_NAME_LEN)?;
        }
        let currency = match currency {
            Some(currency) => {
                self.validate_string_input("currency", &currency, 10)?;
                currency
            }
            None => CONFIG.default_currency.clone(),
        };

        let group = Group {
            id: Uuid::new_v4().to_string(),
            name,
            currency,
            created_at: Utc::now(),
        };
        self.storage.save_group(group.clone()).await?;

        let mut participants = Vec::with_capacity(participant_names.len());
        for participant_name in participant_names {
            let participant = Participant {
                id: ParticipantId::new(),
                group_id: group.id.clone(),
                name: participant_name,
            };
            self.storage.save_participant(participant.clone()).await?;
            participants.push(participant);
        }
        debug!("Group created with ID: {}", group.id);

        self.log_action(
            Some(&group.id),
            GROUP_CREATED,
            json!({
                "group_id": group.id,
                "name": group.name,
                "currency": group.currency,
                "participant_count": participants.len()
            }),
        )
        .await?;

        Ok(GroupDetails { group, participants })
    }

    pub async fn get_group(&self, group_id: &str) -> Result<GroupDetails, LedgerError> {
        let group = self.require_group(group_id).await?;
        let participants = self.storage.list_participants(group_id).await?;
        Ok(GroupDetails { group, participants })
    }

    pub async fn list_groups(&self) -> Result<Vec<Group>, LedgerError> {
        self.storage.list_groups().await
    }

    pub async fn add_participant(&self, group_id: &str, name: String) -> Result<Participant, LedgerError> {
        info!("Adding participant '{}' to group {}", name, group_id);
        self.require_group(group_id).await?;
        self.validate_string_input("name", &name, MAX_PARTICIPANT_NAME_LEN)?;

        let participant = Participant {
            id: ParticipantId::new(),
            group_id: group_id.to_string(),
            name,
        };
        self.storage.save_participant(participant.clone()).await?;

        self.log_action(
            Some(group_id),
            PARTICIPANT_ADDED,
            json!({ "participant_id": participant.id, "name": participant.name }),
        )
        .await?;

        Ok(participant)
    }

    // EXPENSES

    /// Records an expense paid by `payer_id` and split equally among
    /// `involved_ids`. Duplicate ids in `involved_ids` count once.
    pub async fn add_expense(
        &self,
        group_id: &str,
        title: String,
        amount: f64,
        payer_id: &ParticipantId,
        involved_ids: &[ParticipantId],
    ) -> Result<Expense, LedgerError> {
        info!("Adding expense '{}' of {} to group {}", title, amount, group_id);
        self.require_group(group_id).await?;
        self.validate_string_input("title", &title, MAX_EXPENSE_TITLE_LEN)?;
        self.validate_amount_input("amount", amount)?;

        if self
            .storage
            .get_participant(group_id, payer_id.as_str())
            .await?
            .is_none()
        {
            warn!("Payer {} not in group {}", payer_id, group_id);
            return Err(LedgerError::PayerNotInGroup(payer_id.to_string()));
        }
        if involved_ids.is_empty() {
            warn!("No participants involved in expense for group {}", group_id);
            return Err(LedgerError::NoParticipantsInvolved);
        }
        for participant_id in involved_ids {
            if self
                .storage
                .get_participant(group_id, participant_id.as_str())
                .await?
                .is_none()
            {
                warn!("Participant {} in splits not in group {}", participant_id, group_id);
                return Err(LedgerError::ParticipantNotFound(participant_id.to_string()));
            }
        }

        let expense_id = Uuid::new_v4().to_string();
        let splits = equal_split(&expense_id, amount, involved_ids)?;
        let expense = Expense {
            id: expense_id,
            group_id: group_id.to_string(),
            title,
            amount: to_cents(amount) as f64 / 100.0,
            payer_id: payer_id.clone(),
            created_at: Utc::now(),
            splits,
        };
        self.storage.save_expense(expense.clone()).await?;
        debug!("Expense created with ID: {}", expense.id);

        self.log_action(
            Some(group_id),
            EXPENSE_ADDED,
            json!({
                "expense_id": expense.id,
                "title": expense.title,
                "amount": expense.amount,
                "payer_id": expense.payer_id,
                "involved_count": expense.splits.len()
            }),
        )
        .await?;

        Ok(expense)
    }

    pub async fn list_expenses(&self, group_id: &str) -> Result<Vec<Expense>, LedgerError> {
        self.require_group(group_id).await?;
        self.storage.list_expenses(group_id).await
    }

    // BALANCES & SETTLEMENT

    /// Recomputes the group's net balances and settlement plan from a fresh
    /// storage snapshot.
    pub async fn get_group_balance(&self, group_id: &str) -> Result<GroupBalance, LedgerError> {
        self.require_group(group_id).await?;
        let snapshot = self.storage.get_ledger_snapshot(group_id).await?;

        let balances = compute_balances(&snapshot.participants, &snapshot.expenses)?;
        if let Err(err) = check_reconciliation(&balances) {
            if self.strict_reconciliation {
                return Err(err);
            }
            warn!("Settlement plan for group {} may leave residue: {}", group_id, err);
        }
        let settlements = compute_settlements(&balances);
        debug!(
            "Group {} balance: {} participants, {} settlements",
            group_id,
            balances.len(),
            settlements.len()
        );

        Ok(GroupBalance { balances, settlements })
    }

    pub async fn get_app_logs(&self) -> Result<Vec<AppLog>, LedgerError> {
        self.logging.get_logs().await
    }

    pub async fn get_group_logs(&self, group_id: &str) -> Result<Vec<AppLog>, LedgerError> {
        self.require_group(group_id).await?;
        self.logging.get_group_logs(group_id).await
    }
}
