//! Duplicate movement ids and checkpoint dates

use std::collections::HashMap;
use std::hash::Hash;

use crate::types::*;

/// Count occurrences of each key, keeping first-occurrence order
fn count_occurrences<K, I>(keys: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Copy,
    I: IntoIterator<Item = K>,
{
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();

    for key in keys {
        match positions.get(&key) {
            Some(&pos) => counts[pos].1 += 1,
            None => {
                positions.insert(key, counts.len());
                counts.push((key, 1));
            }
        }
    }

    counts
}

/// One reason per movement id used more than once
pub fn check_movement_duplicates(movements: &[Movement]) -> Vec<Reason> {
    count_occurrences(movements.iter().map(|m| m.id))
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(id, count)| Reason::duplicate_movement(id, count))
        .collect()
}

/// One reason per checkpoint date used more than once
pub fn check_checkpoint_duplicates(checkpoints: &[Checkpoint]) -> Vec<Reason> {
    count_occurrences(checkpoints.iter().map(|c| c.date))
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(date, count)| Reason::duplicate_checkpoint(date, count))
        .collect()
}

/// Movement duplicates followed by checkpoint duplicates
pub fn check_duplicates(movements: &[Movement], checkpoints: &[Checkpoint]) -> Vec<Reason> {
    let mut reasons = check_movement_duplicates(movements);
    reasons.extend(check_checkpoint_duplicates(checkpoints));
    reasons
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;

    fn date(day: u32) -> LedgerDate {
        LedgerDate::from_ymd(2023, 1, day).unwrap()
    }

    fn movement(id: i64, day: u32) -> Movement {
        Movement::new(id, date(day), format!("mv{}", id), BigDecimal::from(1))
    }

    #[test]
    fn test_no_duplicates() {
        let movements = vec![movement(1, 2), movement(2, 2), movement(3, 4)];
        let checkpoints = vec![
            Checkpoint::new(date(1), BigDecimal::from(0)),
            Checkpoint::new(date(5), BigDecimal::from(3)),
        ];

        assert!(check_duplicates(&movements, &checkpoints).is_empty());
    }

    #[test]
    fn test_movement_duplicates_counted_per_id() {
        let movements = vec![
            movement(4, 1),
            movement(1, 2),
            movement(4, 3),
            movement(1, 4),
            movement(4, 5),
            movement(9, 6),
        ];

        let reasons = check_movement_duplicates(&movements);
        assert_eq!(reasons.len(), 2);
        assert_eq!(reasons[0].detail, "the movement with ( id = 4 ) exists 3 times");
        assert_eq!(reasons[1].detail, "the movement with ( id = 1 ) exists 2 times");
        assert!(reasons
            .iter()
            .all(|r| r.kind == ReasonKind::MovementUsedManyTimes));
    }

    #[test]
    fn test_checkpoint_duplicates_counted_per_date() {
        let checkpoints = vec![
            Checkpoint::new(date(1), BigDecimal::from(0)),
            Checkpoint::new(date(15), BigDecimal::from(10)),
            Checkpoint::new(date(1), BigDecimal::from(5)),
        ];

        let reasons = check_checkpoint_duplicates(&checkpoints);
        assert_eq!(reasons.len(), 1);
        assert_eq!(reasons[0].kind, ReasonKind::CheckpointUsedManyTimes);
        assert_eq!(
            reasons[0].detail,
            "the checkpoint with ( date = 2023-01-01 ) exists 2 times"
        );
    }

    #[test]
    fn test_movement_reasons_precede_checkpoint_reasons() {
        let movements = vec![movement(1, 2), movement(1, 3)];
        let checkpoints = vec![
            Checkpoint::new(date(1), BigDecimal::from(0)),
            Checkpoint::new(date(1), BigDecimal::from(0)),
        ];

        let kinds: Vec<_> = check_duplicates(&movements, &checkpoints)
            .into_iter()
            .map(|r| r.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                ReasonKind::MovementUsedManyTimes,
                ReasonKind::CheckpointUsedManyTimes
            ]
        );
    }
}
