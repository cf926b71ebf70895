//! Core types and data structures for ledger validation

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Calendar day used to order movements and checkpoints
///
/// Comparison is by (year, month, day) only; two dates written differently but naming
/// the same day are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LedgerDate(NaiveDate);

impl LedgerDate {
    /// Wire format for dates (`2023-06-04`)
    pub const FORMAT: &'static str = "%Y-%m-%d";

    /// Wrap an existing calendar date
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Build a date from its parts, `None` if the day does not exist
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parse a strict `YYYY-MM-DD` string
    pub fn parse(value: &str) -> LedgerResult<Self> {
        let bytes = value.as_bytes();
        let well_shaped = bytes.len() == 10
            && bytes.iter().enumerate().all(|(i, b)| match i {
                4 | 7 => *b == b'-',
                _ => b.is_ascii_digit(),
            });

        if !well_shaped {
            return Err(LedgerError::InvalidDate {
                field: "date".to_string(),
                value: value.to_string(),
            });
        }

        NaiveDate::parse_from_str(value, Self::FORMAT)
            .map(Self)
            .map_err(|_| LedgerError::InvalidDate {
                field: "date".to_string(),
                value: value.to_string(),
            })
    }

    /// The underlying chrono date
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// Strictly later than `other`
    pub fn is_after(&self, other: &LedgerDate) -> bool {
        self.0 > other.0
    }

    /// Same day as `other`, or earlier
    pub fn is_on_or_before(&self, other: &LedgerDate) -> bool {
        self.0 <= other.0
    }
}

impl From<NaiveDate> for LedgerDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl TryFrom<String> for LedgerDate {
    type Error = LedgerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<LedgerDate> for String {
    fn from(date: LedgerDate) -> Self {
        date.to_string()
    }
}

impl FromStr for LedgerDate {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for LedgerDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

/// A single dated ledger transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    /// Identifier, expected to be unique within one submission
    pub id: i64,
    /// Day the movement was booked
    pub date: LedgerDate,
    /// Free-text label of the movement
    #[serde(alias = "wording")]
    pub description: String,
    /// Signed amount: positive for credits, negative for debits
    pub amount: BigDecimal,
}

impl Movement {
    /// Create a new movement
    pub fn new(id: i64, date: LedgerDate, description: String, amount: BigDecimal) -> Self {
        Self {
            id,
            date,
            description,
            amount,
        }
    }
}

/// A trusted balance snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Day the balance was observed
    pub date: LedgerDate,
    /// Balance as of the end of that day
    pub balance: BigDecimal,
}

impl Checkpoint {
    /// Create a new checkpoint
    pub fn new(date: LedgerDate, balance: BigDecimal) -> Self {
        Self { date, balance }
    }
}

/// Category of a validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReasonKind {
    /// The same movement id appears more than once
    MovementUsedManyTimes,
    /// The same checkpoint date appears more than once
    CheckpointUsedManyTimes,
    /// Movements between two checkpoints do not add up to the balance change
    MovementsIsNotCompatibleCheckpoints,
}

impl ReasonKind {
    /// Wire identifier of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ReasonKind::MovementUsedManyTimes => "MOVEMENT_USED_MANY_TIMES",
            ReasonKind::CheckpointUsedManyTimes => "CHECKPOINT_USED_MANY_TIMES",
            ReasonKind::MovementsIsNotCompatibleCheckpoints => {
                "MOVEMENTS_IS_NOT_COMPATIBLE_CHECKPOINTS"
            }
        }
    }

    /// Human label shown alongside the detail
    pub fn title(&self) -> &'static str {
        match self {
            ReasonKind::MovementUsedManyTimes => "Movement used many times",
            ReasonKind::CheckpointUsedManyTimes => "Checkpoint used many times",
            ReasonKind::MovementsIsNotCompatibleCheckpoints => {
                "Movements not compatible with checkpoints"
            }
        }
    }
}

impl fmt::Display for ReasonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One structured diagnostic describing a validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reason {
    /// Failure category, serialized under `type`
    #[serde(rename = "type")]
    pub kind: ReasonKind,
    /// Human label derived from the kind
    pub title: String,
    /// Explanation naming the offending id, date or interval
    pub detail: String,
}

impl Reason {
    /// Create a reason whose title is derived from its kind
    pub fn new(kind: ReasonKind, detail: String) -> Self {
        Self {
            kind,
            title: kind.title().to_string(),
            detail,
        }
    }

    /// A movement id seen `count` times
    pub fn duplicate_movement(id: i64, count: usize) -> Self {
        Self::new(
            ReasonKind::MovementUsedManyTimes,
            format!("the movement with ( id = {} ) exists {} times", id, count),
        )
    }

    /// A checkpoint date seen `count` times
    pub fn duplicate_checkpoint(date: LedgerDate, count: usize) -> Self {
        Self::new(
            ReasonKind::CheckpointUsedManyTimes,
            format!("the checkpoint with ( date = {} ) exists {} times", date, count),
        )
    }

    /// Movements between two checkpoints that do not explain the balance change
    pub fn incompatible_interval(opening: LedgerDate, closing: LedgerDate) -> Self {
        Self::new(
            ReasonKind::MovementsIsNotCompatibleCheckpoints,
            format!(
                "the movements between {} and {} are invalid",
                opening, closing
            ),
        )
    }
}

/// Accept/reject outcome of one validation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True iff `reasons` is empty
    pub accepted: bool,
    /// Every failure found, in detection order
    pub reasons: Vec<Reason>,
}

impl ValidationResult {
    /// A passing result
    pub fn accepted() -> Self {
        Self {
            accepted: true,
            reasons: Vec::new(),
        }
    }

    /// Build a result from collected reasons; accepted only when there are none
    pub fn from_reasons(reasons: Vec<Reason>) -> Self {
        Self {
            accepted: reasons.is_empty(),
            reasons,
        }
    }

    /// Check if the ledger was accepted
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Reasons of a single kind
    pub fn reasons_of_kind(&self, kind: ReasonKind) -> impl Iterator<Item = &Reason> {
        self.reasons.iter().filter(move |r| r.kind == kind)
    }
}

/// Errors raised while preparing input or configuration
///
/// Business-rule failures are never errors; they are reported as [`Reason`]s.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Invalid date for {field}: '{value}' (expected YYYY-MM-DD)")]
    InvalidDate { field: String, value: String },
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
