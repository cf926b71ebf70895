//! Chronological ordering

use crate::traits::Dated;

/// Copy of `items` sorted by date, ascending
///
/// The sort is stable: items sharing a date keep their input order.
pub fn sort_by_date<T: Dated + Clone>(items: &[T]) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by_key(|item| item.date());
    sorted
}

/// Check if `items` are already in chronological order
pub fn is_chronological<T: Dated>(items: &[T]) -> bool {
    items
        .windows(2)
        .all(|pair| pair[0].date().is_on_or_before(&pair[1].date()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::*;
    use bigdecimal::BigDecimal;

    fn movement(id: i64, day: u32) -> Movement {
        Movement::new(
            id,
            LedgerDate::from_ymd(2023, 3, day).unwrap(),
            String::new(),
            BigDecimal::from(id),
        )
    }

    #[test]
    fn test_sort_by_date_is_stable() {
        let movements = vec![movement(1, 9), movement(2, 3), movement(3, 9), movement(4, 3)];
        let ids: Vec<i64> = sort_by_date(&movements).iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_sort_leaves_input_untouched() {
        let movements = vec![movement(1, 9), movement(2, 3)];
        let _ = sort_by_date(&movements);
        assert_eq!(movements[0].id, 1);
        assert!(!is_chronological(&movements));
    }

    #[test]
    fn test_sorting_sorted_input_is_noop() {
        let sorted = sort_by_date(&[movement(1, 9), movement(2, 3), movement(3, 3)]);
        assert!(is_chronological(&sorted));
        assert_eq!(sort_by_date(&sorted), sorted);
    }

    #[test]
    fn test_checkpoints_sort() {
        let checkpoints = vec![
            Checkpoint::new(LedgerDate::from_ymd(2023, 2, 1).unwrap(), BigDecimal::from(2)),
            Checkpoint::new(LedgerDate::from_ymd(2022, 12, 31).unwrap(), BigDecimal::from(1)),
        ];
        let sorted = sort_by_date(&checkpoints);
        assert_eq!(sorted[0].balance, BigDecimal::from(1));
        assert!(is_chronological(&sorted));
    }
}
