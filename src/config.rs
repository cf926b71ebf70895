//! Engine and response configuration

use serde::{Deserialize, Serialize};

use crate::types::*;

/// Settings for a [`ReconciliationEngine`](crate::reconciliation::ReconciliationEngine)
///
/// Every field has a default, so an empty TOML document is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconciliationConfig {
    /// Decimal places both sides of an interval comparison are rounded to
    pub precision: i64,
    /// Message returned with an accepted ledger
    pub accepted_message: String,
    /// Message returned with a rejected ledger
    pub rejected_message: String,
    /// Minimum number of checkpoints a payload must carry
    pub min_checkpoints: usize,
    /// Longest description accepted by the enhanced payload validator
    pub max_description_length: usize,
}

impl Default for ReconciliationConfig {
    fn default() -> Self {
        Self {
            precision: 2,
            accepted_message: "Accepted".to_string(),
            rejected_message: "Movements are not valid".to_string(),
            min_checkpoints: 2,
            max_description_length: 500,
        }
    }
}

impl ReconciliationConfig {
    /// Parse and validate a TOML configuration
    pub fn from_toml(input: &str) -> LedgerResult<Self> {
        let config: ReconciliationConfig =
            toml::from_str(input).map_err(|e| LedgerError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the settings are usable
    pub fn validate(&self) -> LedgerResult<()> {
        if !(0..=8).contains(&self.precision) {
            return Err(LedgerError::Config(format!(
                "precision must be between 0 and 8, got {}",
                self.precision
            )));
        }

        // an interval needs two ends
        if self.min_checkpoints < 2 {
            return Err(LedgerError::Config(format!(
                "min_checkpoints must be at least 2, got {}",
                self.min_checkpoints
            )));
        }

        if self.max_description_length == 0 {
            return Err(LedgerError::Config(
                "max_description_length must be positive".to_string(),
            ));
        }

        if self.accepted_message.trim().is_empty() || self.rejected_message.trim().is_empty() {
            return Err(LedgerError::Config(
                "response messages cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
