//! Reconciliation of movements against balance checkpoints
//!
//! The pipeline runs in four stages: duplicate detection, chronological ordering,
//! windowing into checkpoint intervals, and balance verification.

pub mod duplicates;
pub mod engine;
pub mod ordering;
pub mod verifier;
pub mod window;

pub use duplicates::*;
pub use engine::*;
pub use ordering::*;
pub use verifier::*;
pub use window::*;
