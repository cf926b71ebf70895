//! Traits for ordering and payload validation

use crate::config::ReconciliationConfig;
use crate::payload::ValidationPayload;
use crate::types::*;
use crate::utils::validation::{validate_checkpoint_count, validate_date_format};

/// Anything placed on the ledger timeline
pub trait Dated {
    /// Calendar day of the item
    fn date(&self) -> LedgerDate;
}

impl Dated for Movement {
    fn date(&self) -> LedgerDate {
        self.date
    }
}

impl Dated for Checkpoint {
    fn date(&self) -> LedgerDate {
        self.date
    }
}

/// Trait for implementing shape checks run before a payload reaches the engine
///
/// Implementations reject payloads the engine cannot reason about (malformed dates,
/// too few checkpoints). They never judge whether the ledger itself balances.
pub trait PayloadValidator: Send + Sync {
    /// Validate a decoded payload
    fn validate_payload(&self, payload: &ValidationPayload) -> LedgerResult<()>;
}

/// Default payload validator: date shapes and checkpoint count
#[derive(Debug, Clone)]
pub struct DefaultPayloadValidator {
    min_checkpoints: usize,
}

impl DefaultPayloadValidator {
    /// Create a validator requiring at least `min_checkpoints` checkpoints
    pub fn new(min_checkpoints: usize) -> Self {
        Self { min_checkpoints }
    }

    /// Create a validator from engine configuration
    pub fn from_config(config: &ReconciliationConfig) -> Self {
        Self::new(config.min_checkpoints)
    }
}

impl Default for DefaultPayloadValidator {
    fn default() -> Self {
        Self::from_config(&ReconciliationConfig::default())
    }
}

impl PayloadValidator for DefaultPayloadValidator {
    fn validate_payload(&self, payload: &ValidationPayload) -> LedgerResult<()> {
        for (i, movement) in payload.movements.iter().enumerate() {
            validate_date_format(&format!("movements[{}].date", i), &movement.date)?;
        }

        for (i, checkpoint) in payload.balances.iter().enumerate() {
            validate_date_format(&format!("balances[{}].date", i), &checkpoint.date)?;
        }

        validate_checkpoint_count(payload.balances.len(), self.min_checkpoints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::{CheckpointRecord, MovementRecord};
    use bigdecimal::BigDecimal;

    fn checkpoint(date: &str) -> CheckpointRecord {
        CheckpointRecord {
            date: date.to_string(),
            balance: BigDecimal::from(0),
        }
    }

    #[test]
    fn test_default_validator_accepts_well_formed_payload() {
        let payload = ValidationPayload {
            movements: vec![MovementRecord {
                id: 1,
                date: "2023-01-05".to_string(),
                description: "Coffee".to_string(),
                amount: BigDecimal::from(-3),
            }],
            balances: vec![checkpoint("2023-01-01"), checkpoint("2023-01-31")],
        };

        assert!(DefaultPayloadValidator::default()
            .validate_payload(&payload)
            .is_ok());
    }

    #[test]
    fn test_default_validator_names_bad_field() {
        let payload = ValidationPayload {
            movements: Vec::new(),
            balances: vec![checkpoint("2023-01-01"), checkpoint("01/31/2023")],
        };

        match DefaultPayloadValidator::default().validate_payload(&payload) {
            Err(LedgerError::InvalidDate { field, value }) => {
                assert_eq!(field, "balances[1].date");
                assert_eq!(value, "01/31/2023");
            }
            other => panic!("expected invalid date, got {:?}", other),
        }
    }

    #[test]
    fn test_default_validator_requires_two_checkpoints() {
        let payload = ValidationPayload {
            movements: Vec::new(),
            balances: vec![checkpoint("2023-01-01")],
        };

        assert!(matches!(
            DefaultPayloadValidator::default().validate_payload(&payload),
            Err(LedgerError::Validation(_))
        ));
    }
}
