//! Wire-level request and response shapes
//!
//! A transport layer decodes a [`ValidationPayload`], checks its shape with a
//! [`PayloadValidator`](crate::traits::PayloadValidator), converts it into domain values,
//! and turns the engine's [`ValidationResult`] back into a [`ValidationResponse`].

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::config::ReconciliationConfig;
use crate::types::*;
use crate::utils::validation::validate_date_format;

/// Status returned with an accepted ledger
pub const ACCEPTED_STATUS: u16 = 202;
/// Status returned with a rejected ledger
pub const REJECTED_STATUS: u16 = 418;

/// Raw movement as submitted, date still a string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovementRecord {
    pub id: i64,
    pub date: String,
    #[serde(alias = "wording")]
    pub description: String,
    #[serde(with = "bigdecimal::serde::json_num")]
    pub amount: BigDecimal,
}

/// Raw checkpoint as submitted, date still a string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckpointRecord {
    pub date: String,
    #[serde(with = "bigdecimal::serde::json_num")]
    pub balance: BigDecimal,
}

/// Body of a validation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationPayload {
    pub movements: Vec<MovementRecord>,
    pub balances: Vec<CheckpointRecord>,
}

impl ValidationPayload {
    /// Decode a JSON request body
    pub fn from_json(input: &str) -> LedgerResult<Self> {
        serde_json::from_str(input).map_err(|e| LedgerError::Serialization(e.to_string()))
    }

    /// Convert raw records into domain values, parsing every date
    pub fn to_domain(&self) -> LedgerResult<(Vec<Movement>, Vec<Checkpoint>)> {
        let movements = self
            .movements
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let date = validate_date_format(&format!("movements[{}].date", i), &record.date)?;
                Ok(Movement::new(
                    record.id,
                    date,
                    record.description.clone(),
                    record.amount.clone(),
                ))
            })
            .collect::<LedgerResult<Vec<_>>>()?;

        let checkpoints = self
            .balances
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let date = validate_date_format(&format!("balances[{}].date", i), &record.date)?;
                Ok(Checkpoint::new(date, record.balance.clone()))
            })
            .collect::<LedgerResult<Vec<_>>>()?;

        Ok((movements, checkpoints))
    }
}

/// Body of a validation response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResponse {
    pub message: String,
    pub reasons: Vec<Reason>,
}

impl ValidationResponse {
    /// Map an engine result to a response using the configured messages
    pub fn from_result(result: &ValidationResult, config: &ReconciliationConfig) -> Self {
        if result.accepted {
            Self {
                message: config.accepted_message.clone(),
                reasons: Vec::new(),
            }
        } else {
            Self {
                message: config.rejected_message.clone(),
                reasons: result.reasons.clone(),
            }
        }
    }

    /// Check if the response reports an accepted ledger
    pub fn is_accepted(&self) -> bool {
        self.reasons.is_empty()
    }

    /// Transport status for this response
    pub fn status_code(&self) -> u16 {
        if self.is_accepted() {
            ACCEPTED_STATUS
        } else {
            REJECTED_STATUS
        }
    }

    /// Encode the response as JSON
    pub fn to_json(&self) -> LedgerResult<String> {
        serde_json::to_string(self).map_err(|e| LedgerError::Serialization(e.to_string()))
    }
}
