//! Balance verification for checkpoint intervals

use bigdecimal::BigDecimal;
use tracing::warn;

use crate::reconciliation::window::Interval;
use crate::types::*;

/// Round to `precision` decimal places (half-even)
pub fn round_to(value: &BigDecimal, precision: i64) -> BigDecimal {
    value.round(precision)
}

/// Arithmetic outcome for one interval
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalCheck {
    pub opening: LedgerDate,
    pub closing: LedgerDate,
    pub movement_count: usize,
    /// Sum of movement amounts in the interval
    pub movements_variation: BigDecimal,
    /// Closing balance minus opening balance
    pub balances_variation: BigDecimal,
    pub compatible: bool,
}

impl IntervalCheck {
    /// Reason to report, if the interval does not balance
    pub fn reason(&self) -> Option<Reason> {
        if self.compatible {
            None
        } else {
            Some(Reason::incompatible_interval(self.opening, self.closing))
        }
    }
}

/// Compare an interval's movements against its balance change
///
/// Each side is rounded on its own before comparing, so differences below the
/// rounding unit are tolerated.
pub fn check_interval(interval: &Interval<'_>, precision: i64) -> IntervalCheck {
    let movements_variation: BigDecimal = interval.movements.iter().map(|m| &m.amount).sum();
    let balances_variation = &interval.closing.balance - &interval.opening.balance;

    let compatible = round_to(&movements_variation, precision)
        == round_to(&balances_variation, precision);

    IntervalCheck {
        opening: interval.opening.date,
        closing: interval.closing.date,
        movement_count: interval.movements.len(),
        movements_variation,
        balances_variation,
        compatible,
    }
}

/// Check every interval, collecting one reason per mismatch
pub fn verify(intervals: &[Interval<'_>], precision: i64) -> Vec<Reason> {
    intervals
        .iter()
        .map(|interval| check_interval(interval, precision))
        .filter_map(|check| {
            if !check.compatible {
                warn!(
                    opening = %check.opening,
                    closing = %check.closing,
                    movements = check.movement_count,
                    movements_variation = %check.movements_variation,
                    balances_variation = %check.balances_variation,
                    "movements do not explain balance change"
                );
            }
            check.reason()
        })
        .collect()
}
