//! Windowing of movements into checkpoint intervals
//!
//! Both inputs must already be in chronological order. Every interval is open on the
//! left and closed on the right: a movement dated on a checkpoint's day belongs to the
//! interval that checkpoint closes.

use crate::types::*;

/// Movements between two adjacent checkpoints
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval<'a> {
    /// Checkpoint the interval starts after
    pub opening: &'a Checkpoint,
    /// Checkpoint the interval ends on, inclusive
    pub closing: &'a Checkpoint,
    /// Movements assigned to the interval, in date order
    pub movements: &'a [Movement],
}

/// Movements strictly after the first checkpoint and on or before the last
///
/// Both slices must be sorted by date; unsorted input gives an unspecified window.
/// Returns an empty slice when there are fewer than two checkpoints.
pub fn window<'a>(movements: &'a [Movement], checkpoints: &[Checkpoint]) -> &'a [Movement] {
    let (first, last) = match (checkpoints.first(), checkpoints.last()) {
        (Some(first), Some(last)) if checkpoints.len() >= 2 => (first, last),
        _ => return &movements[..0],
    };

    let start = movements.partition_point(|m| m.date.is_on_or_before(&first.date));
    let end = movements.partition_point(|m| m.date.is_on_or_before(&last.date));

    &movements[start..end.max(start)]
}

/// Split the windowed movements into `checkpoints.len() - 1` intervals
///
/// Intervals are contiguous, disjoint sub-slices of the window, found with a single
/// forward cursor. Fewer than two checkpoints yields no intervals.
pub fn partition<'a>(movements: &'a [Movement], checkpoints: &'a [Checkpoint]) -> Vec<Interval<'a>> {
    if checkpoints.len() < 2 {
        return Vec::new();
    }

    let windowed = window(movements, checkpoints);
    let mut cursor = 0;

    checkpoints
        .windows(2)
        .map(|pair| {
            let (opening, closing) = (&pair[0], &pair[1]);
            let taken = windowed[cursor..]
                .iter()
                .take_while(|m| m.date.is_on_or_before(&closing.date))
                .count();
            let bucket = &windowed[cursor..cursor + taken];
            cursor += taken;

            Interval {
                opening,
                closing,
                movements: bucket,
            }
        })
        .collect()
}
