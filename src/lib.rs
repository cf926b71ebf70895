//! # Ledger Reconciliation
//!
//! Validates imported ledgers: given dated movements and dated balance checkpoints,
//! decides whether the movements fully explain every balance change between
//! consecutive checkpoints.
//!
//! ## Features
//!
//! - **Duplicate detection**: repeated movement ids or checkpoint dates reject the ledger outright
//! - **Interval verification**: movements are bucketed between adjacent checkpoints and summed
//! - **Cent tolerance**: both sides of each comparison are rounded before they are compared
//! - **Payload layer**: JSON request decoding, shape validation and response mapping
//!
//! ## Quick Start
//!
//! ```rust
//! use ledger_reconciliation::{validate, Checkpoint, LedgerDate, Movement};
//! use bigdecimal::BigDecimal;
//!
//! let day = |d| LedgerDate::from_ymd(2023, 1, d).unwrap();
//! let movements = vec![
//!     Movement::new(1, day(5), "Salary".to_string(), BigDecimal::from(50)),
//!     Movement::new(2, day(10), "Groceries".to_string(), BigDecimal::from(-20)),
//! ];
//! let checkpoints = vec![
//!     Checkpoint::new(day(1), BigDecimal::from(100)),
//!     Checkpoint::new(day(15), BigDecimal::from(130)),
//! ];
//!
//! let result = validate(&movements, &checkpoints);
//! assert!(result.accepted);
//! ```

pub mod config;
pub mod payload;
pub mod reconciliation;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use config::ReconciliationConfig;
pub use payload::{ValidationPayload, ValidationResponse};
pub use reconciliation::{validate, ReconciliationEngine};
pub use traits::*;
pub use types::*;
