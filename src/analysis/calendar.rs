use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

use super::chart::PRIMARY_COLOR;

/// Marker for one date on the consistency calendar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarMark {
    pub marked: bool,
    #[serde(rename = "dotColor")]
    pub dot_color: &'static str,
}

/// Mark every date that has a workout log.
pub fn marked_dates(dates: &[NaiveDate]) -> BTreeMap<NaiveDate, CalendarMark> {
    dates
        .iter()
        .map(|date| {
            (
                *date,
                CalendarMark {
                    marked: true,
                    dot_color: PRIMARY_COLOR,
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_every_date() {
        let dates = vec![
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
        ];
        let marks = marked_dates(&dates);
        assert_eq!(marks.len(), 2);
        assert!(marks.values().all(|m| m.marked && m.dot_color == PRIMARY_COLOR));
    }

    #[test]
    fn test_empty_input() {
        assert!(marked_dates(&[]).is_empty());
    }
}
