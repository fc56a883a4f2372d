use serde::{Deserialize, Serialize};

use super::value::lenient_f64;

/// Daily nutrition/hydration counters, keyed by date in the store.
///
/// Field names match the stored records. Older records hold these as
/// strings (typed into a form), newer ones as numbers (stepper counters),
/// so decoding is lenient; anything unreadable counts as 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DailyLog {
    #[serde(deserialize_with = "lenient_f64")]
    pub calorie_intake: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub water_intake: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub alcohol_intake: f64,
}

impl DailyLog {
    pub fn is_empty(&self) -> bool {
        self.calorie_intake == 0.0 && self.water_intake == 0.0 && self.alcohol_intake == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zeroed() {
        let log = DailyLog::default();
        assert!(log.is_empty());
    }

    #[test]
    fn test_reads_numeric_fields() {
        let log: DailyLog = serde_json::from_str(
            r#"{"calorieIntake": 2100, "waterIntake": 3, "alcoholIntake": 0}"#,
        )
        .unwrap();
        assert_eq!(log.calorie_intake, 2100.0);
        assert_eq!(log.water_intake, 3.0);
    }

    #[test]
    fn test_reads_string_fields() {
        // Records edited through the day-details form stored strings.
        let log: DailyLog = serde_json::from_str(
            r#"{"calorieIntake": "1800", "waterIntake": "", "alcoholIntake": "2"}"#,
        )
        .unwrap();
        assert_eq!(log.calorie_intake, 1800.0);
        assert_eq!(log.water_intake, 0.0);
        assert_eq!(log.alcohol_intake, 2.0);
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let log: DailyLog = serde_json::from_str(r#"{"calorieIntake": 500}"#).unwrap();
        assert_eq!(log.calorie_intake, 500.0);
        assert_eq!(log.water_intake, 0.0);
        assert_eq!(log.alcohol_intake, 0.0);
    }

    #[test]
    fn test_writes_camel_case_numbers() {
        let log = DailyLog {
            calorie_intake: 2200.0,
            water_intake: 2.0,
            alcohol_intake: 1.0,
        };
        let json = serde_json::to_string(&log).unwrap();
        assert_eq!(
            json,
            r#"{"calorieIntake":2200.0,"waterIntake":2.0,"alcoholIntake":1.0}"#
        );
    }
}
