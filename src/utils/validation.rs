//! Validation utilities

use crate::config::ReconciliationConfig;
use crate::payload::ValidationPayload;
use crate::traits::*;
use crate::types::*;

/// Validate that a field holds a real `YYYY-MM-DD` calendar day
pub fn validate_date_format(field: &str, value: &str) -> LedgerResult<LedgerDate> {
    LedgerDate::parse(value).map_err(|_| LedgerError::InvalidDate {
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Validate that enough checkpoints were supplied to form an interval
pub fn validate_checkpoint_count(count: usize, min_checkpoints: usize) -> LedgerResult<()> {
    if count < min_checkpoints {
        Err(LedgerError::Validation(format!(
            "balances must contain at least {} checkpoints, got {}",
            min_checkpoints, count
        )))
    } else {
        Ok(())
    }
}

/// Validate that a movement description is valid
pub fn validate_description(field: &str, description: &str, max_length: usize) -> LedgerResult<()> {
    if description.trim().is_empty() {
        return Err(LedgerError::Validation(format!("{} cannot be empty", field)));
    }

    if description.chars().count() > max_length {
        return Err(LedgerError::Validation(format!(
            "{} cannot exceed {} characters",
            field, max_length
        )));
    }

    Ok(())
}

/// Enhanced payload validator: default checks plus description rules
#[derive(Debug, Clone)]
pub struct EnhancedPayloadValidator {
    base: DefaultPayloadValidator,
    max_description_length: usize,
}

impl EnhancedPayloadValidator {
    /// Create a validator from engine configuration
    pub fn from_config(config: &ReconciliationConfig) -> Self {
        Self {
            base: DefaultPayloadValidator::from_config(config),
            max_description_length: config.max_description_length,
        }
    }
}

impl Default for EnhancedPayloadValidator {
    fn default() -> Self {
        Self::from_config(&ReconciliationConfig::default())
    }
}

impl PayloadValidator for EnhancedPayloadValidator {
    fn validate_payload(&self, payload: &ValidationPayload) -> LedgerResult<()> {
        // Basic validation
        self.base.validate_payload(payload)?;

        for (i, movement) in payload.movements.iter().enumerate() {
            validate_description(
                &format!("movements[{}].description", i),
                &movement.description,
                self.max_description_length,
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::{CheckpointRecord, MovementRecord};
    use bigdecimal::BigDecimal;

    #[test]
    fn test_validate_date_format() {
        let date = validate_date_format("date", "2024-02-29").unwrap();
        assert_eq!(date, LedgerDate::from_ymd(2024, 2, 29).unwrap());

        match validate_date_format("movements[0].date", "2023-02-29") {
            Err(LedgerError::InvalidDate { field, .. }) => assert_eq!(field, "movements[0].date"),
            other => panic!("expected invalid date, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_checkpoint_count() {
        assert!(validate_checkpoint_count(2, 2).is_ok());
        assert!(validate_checkpoint_count(5, 2).is_ok());
        assert!(validate_checkpoint_count(0, 2).is_err());
        assert!(validate_checkpoint_count(2, 3).is_err());
    }

    #[test]
    fn test_validate_description() {
        assert!(validate_description("d", "Rent", 10).is_ok());
        assert!(validate_description("d", "   ", 10).is_err());
        assert!(validate_description("d", "a very long label", 10).is_err());
    }

    #[test]
    fn test_enhanced_validator_rejects_blank_description() {
        let payload = ValidationPayload {
            movements: vec![MovementRecord {
                id: 1,
                date: "2023-01-05".to_string(),
                description: " ".to_string(),
                amount: BigDecimal::from(10),
            }],
            balances: vec![
                CheckpointRecord {
                    date: "2023-01-01".to_string(),
                    balance: BigDecimal::from(0),
                },
                CheckpointRecord {
                    date: "2023-01-31".to_string(),
                    balance: BigDecimal::from(10),
                },
            ],
        };

        assert!(DefaultPayloadValidator::default()
            .validate_payload(&payload)
            .is_ok());
        assert!(matches!(
            EnhancedPayloadValidator::default().validate_payload(&payload),
            Err(LedgerError::Validation(_))
        ));
    }
}
