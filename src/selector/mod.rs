//! Threshold table selection
//!
//! Judgment tiers and sub-score segments use two separate scans: the tier
//! scan tests each candidate's own threshold, the segment scan tests the
//! threshold of the entry it currently holds.


use crate::config::{Judgment, Segment, TimeSegment};
use log::debug;

/// Pick the judgment tier for a total score
///
/// Returns the first index whose threshold `value` reaches. When no tier
/// qualifies the scan ends on the last entry, which acts as the floor.
/// `None` only for an empty table. Tables are expected in descending
/// threshold order; nothing is sorted here.
pub fn select_judgment(table: &[Judgment], value: i32) -> Option<usize> {
    if table.is_empty() {
        return None;
    }

    let last = table.len() - 1;
    let index = table
        .iter()
        .position(|judgment| value >= judgment.threshold)
        .unwrap_or(last);
    Some(index)
}

/// Pick the segment for an integer sub-score
pub fn select_segment(table: &[Segment], value: i32) -> Option<&Segment> {
    let index = scan_segments(table, value, |segment| segment.threshold)?;
    let segment = &table[index];
    debug!("Got best segment: {} for: {}", segment.text, value);
    Some(segment)
}

/// Pick the segment for a time dependence value
pub fn select_time_segment(table: &[TimeSegment], value: f32) -> Option<&TimeSegment> {
    let index = scan_segments(table, value, |segment| segment.threshold)?;
    let segment = &table[index];
    debug!("Got best time segment: {} for: {}", segment.text, value);
    Some(segment)
}

/// Segment scan: hold the current best until `value` reaches its threshold,
/// otherwise advance to the next entry
fn scan_segments<T, V, F>(table: &[T], value: V, threshold: F) -> Option<usize>
where
    V: PartialOrd + Copy,
    F: Fn(&T) -> V,
{
    if table.is_empty() {
        return None;
    }

    let mut best = 0;
    for i in 1..table.len() {
        if value >= threshold(&table[best]) {
            break;
        }
        best = i;
    }
    Some(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Color;

    fn judgments(thresholds: &[i32]) -> Vec<Judgment> {
        thresholds
            .iter()
            .map(|&t| Judgment::new(t, &t.to_string(), Color::WHITE))
            .collect()
    }

    fn segments(thresholds: &[i32]) -> Vec<Segment> {
        thresholds
            .iter()
            .map(|&t| Segment::new(t, &t.to_string()))
            .collect()
    }

    #[test]
    fn test_judgment_empty() {
        assert_eq!(select_judgment(&[], 100), None);
    }

    #[test]
    fn test_judgment_first_reached() {
        let table = judgments(&[115, 101, 90, 80, 60, 0]);
        assert_eq!(select_judgment(&table, 115), Some(0));
        assert_eq!(select_judgment(&table, 114), Some(1));
        assert_eq!(select_judgment(&table, 90), Some(2));
        assert_eq!(select_judgment(&table, 59), Some(5));
    }

    #[test]
    fn test_judgment_below_all_returns_last() {
        let table = judgments(&[100, 50]);
        assert_eq!(select_judgment(&table, 10), Some(1));
        assert_eq!(select_judgment(&table, -5), Some(1));
    }

    #[test]
    fn test_judgment_unsorted_takes_first_match() {
        let table = judgments(&[10, 100, 50]);
        assert_eq!(select_judgment(&table, 60), Some(0));
        assert_eq!(select_judgment(&table, 5), Some(2));
    }

    #[test]
    fn test_judgment_ties_keep_insertion_order() {
        let table = vec![
            Judgment::new(50, "first", Color::WHITE),
            Judgment::new(50, "second", Color::WHITE),
        ];
        assert_eq!(select_judgment(&table, 50), Some(0));
    }

    #[test]
    fn test_segment_empty() {
        assert!(select_segment(&[], 10).is_none());
        assert!(select_time_segment(&[], 0.5).is_none());
    }

    #[test]
    fn test_segment_single_entry_always_matches() {
        let table = segments(&[70]);
        assert_eq!(select_segment(&table, 0).unwrap().text, "70");
        assert_eq!(select_segment(&table, 100).unwrap().text, "70");
    }

    #[test]
    fn test_segment_descending() {
        let table = segments(&[70, 40, 0]);
        assert_eq!(select_segment(&table, 70).unwrap().text, "70");
        assert_eq!(select_segment(&table, 69).unwrap().text, "40");
        assert_eq!(select_segment(&table, 10).unwrap().text, "0");
        assert_eq!(select_segment(&table, -1).unwrap().text, "0");
    }

    #[test]
    fn test_segment_unsorted() {
        let table = segments(&[10, 100, 50]);
        assert_eq!(select_segment(&table, 60).unwrap().text, "10");
        assert_eq!(select_segment(&table, 5).unwrap().text, "50");
    }

    #[test]
    fn test_time_segment_fractional_thresholds() {
        let table = vec![
            TimeSegment::new(0.5, "late"),
            TimeSegment::new(0.1, "ok"),
            TimeSegment::new(0.0, "tight"),
        ];
        assert_eq!(select_time_segment(&table, 0.75).unwrap().text, "late");
        assert_eq!(select_time_segment(&table, 0.25).unwrap().text, "ok");
        assert_eq!(select_time_segment(&table, 0.05).unwrap().text, "tight");
    }
}
