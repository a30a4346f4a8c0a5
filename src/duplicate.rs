use crate::generator::Combination;
use crate::history::{DrawRecord, History};
use crate::utils::format_number;

const SEPARATOR: &str = "-";

/// Canonical form of a set of numbers: ascending, two-digit, dash separated.
pub fn signature(numbers: &[u32], display_zero: bool) -> String {
    let mut sorted = numbers.to_vec();
    sorted.sort_unstable();
    sorted
        .iter()
        .map(|&n| format_number(n, display_zero))
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// The most recent draw with exactly the numbers of `combination`, if any.
pub fn find_match<'a>(combination: &Combination, history: &'a History) -> Option<&'a DrawRecord> {
    if combination.is_empty() {
        return None;
    }
    let wanted = signature(combination.numbers(), combination.display_zero());

    history
        .draws()
        .iter()
        .filter(|draw| !draw.numbers.is_empty())
        .find(|draw| signature(&draw.numbers, combination.display_zero()) == wanted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::UNKNOWN_DATE;

    fn draw(id: u32, numbers: &[u32]) -> DrawRecord {
        DrawRecord {
            id,
            date: UNKNOWN_DATE.to_string(),
            numbers: numbers.to_vec(),
        }
    }

    #[test]
    fn test_signature_is_order_independent() {
        assert_eq!(signature(&[6, 1, 33], false), "01-06-33");
        assert_eq!(signature(&[0, 99, 5], true), "00-05-99");
    }

    #[test]
    fn test_exact_match_round_trip() {
        let history = History::from_records(vec![draw(99, &[7, 8, 9, 10, 11, 12]), draw(100, &[1, 2, 3, 4, 5, 6])]);

        let hit = Combination::from_labels(&["01", "02", "03", "04", "05", "06"], false).unwrap();
        assert_eq!(find_match(&hit, &history).map(|d| d.id), Some(100));

        let miss = Combination::from_labels(&["01", "02", "03", "04", "05", "07"], false).unwrap();
        assert!(find_match(&miss, &history).is_none());
    }

    #[test]
    fn test_unsorted_history_numbers_still_match() {
        let history = History::from_records(vec![draw(5, &[42, 3, 17, 8, 60, 21])]);
        let combination = Combination::from_numbers(vec![3, 8, 17, 21, 42, 60], false);
        assert_eq!(find_match(&combination, &history).map(|d| d.id), Some(5));
    }

    #[test]
    fn test_most_recent_occurrence_wins() {
        let history = History::from_records(vec![draw(10, &[1, 2, 3]), draw(30, &[1, 2, 3]), draw(20, &[1, 2, 3])]);
        let combination = Combination::from_numbers(vec![1, 2, 3], false);
        assert_eq!(find_match(&combination, &history).map(|d| d.id), Some(30));
    }

    #[test]
    fn test_subset_is_not_a_match() {
        let history = History::from_records(vec![draw(1, &[1, 2, 3, 4, 5, 6])]);
        let combination = Combination::from_numbers(vec![1, 2, 3, 4, 5], false);
        assert!(find_match(&combination, &history).is_none());
    }

    #[test]
    fn test_empty_records_and_history_never_match() {
        let history = History::from_records(vec![draw(1, &[])]);
        let combination = Combination::from_numbers(vec![], false);
        assert!(find_match(&combination, &history).is_none());

        let combination = Combination::from_numbers(vec![1, 2], false);
        assert!(find_match(&combination, &History::default()).is_none());
    }
}
