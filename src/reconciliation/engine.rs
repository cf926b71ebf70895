//! Reconciliation engine tying the pipeline stages together

use tracing::{debug, info, warn};

use crate::config::ReconciliationConfig;
use crate::payload::{ValidationPayload, ValidationResponse};
use crate::reconciliation::duplicates::check_duplicates;
use crate::reconciliation::ordering::sort_by_date;
use crate::reconciliation::verifier::verify;
use crate::reconciliation::window::{partition, window};
use crate::traits::*;
use crate::types::*;
use crate::utils::validation::EnhancedPayloadValidator;

/// Validates ledgers against their balance checkpoints
///
/// The engine holds only configuration; every call works on its own sorted copies of
/// the input, so one engine can serve concurrent callers.
pub struct ReconciliationEngine {
    config: ReconciliationConfig,
    validator: Box<dyn PayloadValidator>,
}

impl Default for ReconciliationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ReconciliationEngine {
    /// Create an engine with the default configuration
    pub fn new() -> Self {
        Self::with_config(ReconciliationConfig::default())
    }

    /// Create an engine with custom configuration
    pub fn with_config(config: ReconciliationConfig) -> Self {
        let validator = Box::new(DefaultPayloadValidator::from_config(&config));
        Self { config, validator }
    }

    /// Create an engine with a custom payload validator
    pub fn with_validator(config: ReconciliationConfig, validator: Box<dyn PayloadValidator>) -> Self {
        Self { config, validator }
    }

    /// Create an engine that also enforces description rules on payloads
    pub fn strict(config: ReconciliationConfig) -> Self {
        let validator = Box::new(EnhancedPayloadValidator::from_config(&config));
        Self::with_validator(config, validator)
    }

    /// Engine configuration
    pub fn config(&self) -> &ReconciliationConfig {
        &self.config
    }

    /// Check that the movements explain every balance change between checkpoints
    ///
    /// Duplicate ids or checkpoint dates reject the ledger immediately; no arithmetic is
    /// attempted in that case.
    pub fn validate(&self, movements: &[Movement], checkpoints: &[Checkpoint]) -> ValidationResult {
        let duplicates = check_duplicates(movements, checkpoints);
        if !duplicates.is_empty() {
            info!(
                reasons = duplicates.len(),
                "ledger rejected: duplicate movements or checkpoints"
            );
            return ValidationResult::from_reasons(duplicates);
        }

        let movements = sort_by_date(movements);
        let checkpoints = sort_by_date(checkpoints);

        if checkpoints.len() < 2 {
            warn!(
                checkpoints = checkpoints.len(),
                "fewer than two checkpoints, nothing to verify"
            );
        }

        let in_window = window(&movements, &checkpoints).len();
        debug!(
            movements = movements.len(),
            in_window,
            dropped = movements.len() - in_window,
            "movements windowed to checkpoint span"
        );

        let intervals = partition(&movements, &checkpoints);
        let reasons = verify(&intervals, self.config.precision);

        let result = ValidationResult::from_reasons(reasons);
        info!(
            accepted = result.accepted,
            intervals = intervals.len(),
            reasons = result.reasons.len(),
            "ledger validated"
        );
        result
    }

    /// Shape-check, convert and validate a decoded payload, then build the response
    ///
    /// Errors are returned only for malformed payloads; an unbalanced ledger is a
    /// successful call with a rejecting response.
    pub fn process_payload(&self, payload: &ValidationPayload) -> LedgerResult<ValidationResponse> {
        self.validator.validate_payload(payload)?;
        let (movements, checkpoints) = payload.to_domain()?;

        let result = self.validate(&movements, &checkpoints);
        Ok(ValidationResponse::from_result(&result, &self.config))
    }

    /// Same as [`process_payload`](Self::process_payload), starting from a JSON body
    pub fn process_json(&self, body: &str) -> LedgerResult<ValidationResponse> {
        let payload = ValidationPayload::from_json(body)?;
        self.process_payload(&payload)
    }
}

/// Validate with the default configuration
pub fn validate(movements: &[Movement], checkpoints: &[Checkpoint]) -> ValidationResult {
    ReconciliationEngine::new().validate(movements, checkpoints)
}
