use std::collections::BTreeSet;

use super::chart::{palette_color, ChartSeries, Dataset, PRIMARY_COLOR};
use crate::models::MeasurementLog;

/// The measurement name that gets its own dedicated chart.
const WEIGHT: &str = "Weight";

/// The two measurement trend charts: body weight on its own, everything
/// else combined into one multi-series chart. Either is `None` when no
/// series survives.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendCharts {
    pub weight: Option<ChartSeries>,
    pub other: Option<ChartSeries>,
}

/// Build the aligned trend series from the measurement log.
///
/// Dates are sorted ascending and shared as one label axis per chart
/// (`MM-DD` display form). A position holds a value only when the
/// source value is present, numeric, and strictly positive; otherwise
/// it is null so gaps stay gaps. Series with no values at all are
/// omitted, as is a chart left with no series. The returned charts are
/// not yet compacted; callers apply [`ChartSeries::compact`] before
/// rendering.
pub fn measurement_trends(log: &MeasurementLog) -> TrendCharts {
    let dates: Vec<&str> = log.dates().collect();
    if dates.is_empty() {
        return TrendCharts {
            weight: None,
            other: None,
        };
    }

    let labels: Vec<String> = dates.iter().map(|d| short_label(d)).collect();

    // Every non-Weight measurement name observed on any date, sorted so
    // palette ranks are stable.
    let other_names: BTreeSet<&str> = dates
        .iter()
        .filter_map(|date| log.for_date(date))
        .flat_map(|day| day.keys().map(|s| s.as_str()))
        .filter(|name| *name != WEIGHT)
        .collect();

    let weight_data: Vec<Option<f64>> = dates
        .iter()
        .map(|date| value_at(log, date, WEIGHT))
        .collect();

    let weight = weight_data.iter().any(Option::is_some).then(|| ChartSeries {
        labels: labels.clone(),
        datasets: vec![Dataset::new(weight_data)
            .with_color(PRIMARY_COLOR)
            .with_stroke_width(3)],
        legend: vec![format!("{} (lbs)", WEIGHT)],
    });

    let mut datasets = Vec::new();
    let mut legend = Vec::new();
    for (rank, name) in other_names.iter().enumerate() {
        let data: Vec<Option<f64>> = dates.iter().map(|date| value_at(log, date, name)).collect();
        let dataset = Dataset::new(data).with_color(palette_color(rank));
        if dataset.has_data() {
            datasets.push(dataset);
            legend.push(format!("{} (in)", name));
        }
    }

    let other = (!datasets.is_empty()).then(|| ChartSeries {
        labels,
        datasets,
        legend,
    });

    TrendCharts { weight, other }
}

/// The measurement value at one date, if present, numeric, and > 0.
fn value_at(log: &MeasurementLog, date: &str, name: &str) -> Option<f64> {
    let value = log.for_date(date)?.get(name)?;
    let parsed: f64 = value.trim().parse().ok()?;
    (parsed > 0.0).then_some(parsed)
}

/// `YYYY-MM-DD` -> `MM-DD` for axis labels.
fn short_label(date: &str) -> String {
    date.get(5..).unwrap_or(date).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_of(entries: &[(&str, &[(&str, &str)])]) -> MeasurementLog {
        let mut log = MeasurementLog::default();
        for (date, values) in entries {
            for (name, value) in *values {
                log.record(date, name, value);
            }
        }
        log
    }

    #[test]
    fn test_empty_log_has_no_charts() {
        let charts = measurement_trends(&MeasurementLog::default());
        assert!(charts.weight.is_none());
        assert!(charts.other.is_none());
    }

    #[test]
    fn test_weight_series_aligned_with_null_gaps() {
        let log = log_of(&[
            ("2024-01-01", &[("Weight", "180")]),
            ("2024-01-08", &[("Weight", "0")]),
            ("2024-01-15", &[("Weight", "178")]),
        ]);

        let charts = measurement_trends(&log);
        let weight = charts.weight.unwrap();
        assert_eq!(weight.labels, vec!["01-01", "01-08", "01-15"]);
        // Zero is not a plausible weight; it becomes a gap, not a point.
        assert_eq!(weight.datasets[0].data, vec![Some(180.0), None, Some(178.0)]);
        assert_eq!(weight.legend, vec!["Weight (lbs)"]);
        assert_eq!(weight.datasets[0].stroke_width, Some(3));
        assert!(charts.other.is_none());
    }

    #[test]
    fn test_dates_sorted_not_insertion_order() {
        let log = log_of(&[
            ("2024-02-10", &[("Weight", "181")]),
            ("2024-01-05", &[("Weight", "183")]),
        ]);
        let weight = measurement_trends(&log).weight.unwrap();
        assert_eq!(weight.labels, vec!["01-05", "02-10"]);
        assert_eq!(weight.datasets[0].data, vec![Some(183.0), Some(181.0)]);
    }

    #[test]
    fn test_all_invalid_weight_omits_chart() {
        let log = log_of(&[
            ("2024-01-01", &[("Weight", ""), ("Waist", "34")]),
            ("2024-01-08", &[("Weight", "abc")]),
        ]);
        let charts = measurement_trends(&log);
        assert!(charts.weight.is_none());
        assert!(charts.other.is_some());
    }

    #[test]
    fn test_other_measurements_share_axis_and_colors_by_sorted_rank() {
        let log = log_of(&[
            ("2024-01-01", &[("Waist", "34"), ("Chest", "42")]),
            ("2024-01-08", &[("Waist", "33.5")]),
        ]);

        let other = measurement_trends(&log).other.unwrap();
        assert_eq!(other.labels, vec!["01-01", "01-08"]);
        // Sorted-name order: Chest before Waist.
        assert_eq!(other.legend, vec!["Chest (in)", "Waist (in)"]);
        assert_eq!(other.datasets[0].color, Some(palette_color(0)));
        assert_eq!(other.datasets[1].color, Some(palette_color(1)));
        assert_eq!(other.datasets[0].data, vec![Some(42.0), None]);
        assert_eq!(other.datasets[1].data, vec![Some(34.0), Some(33.5)]);
    }

    #[test]
    fn test_all_null_series_is_omitted() {
        let log = log_of(&[
            ("2024-01-01", &[("Waist", "34"), ("Hips", "not-a-number")]),
            ("2024-01-08", &[("Hips", "")]),
        ]);

        let other = measurement_trends(&log).other.unwrap();
        assert_eq!(other.legend, vec!["Waist (in)"]);
        assert_eq!(other.datasets.len(), 1);
        // The omitted series still occupied a palette rank: Hips sorts
        // before Waist, so Waist keeps rank 1.
        assert_eq!(other.datasets[0].color, Some(palette_color(1)));
    }

    #[test]
    fn test_compaction_per_chart_is_independent() {
        let log = log_of(&[
            ("2024-01-01", &[("Weight", "180")]),
            ("2024-01-08", &[("Waist", "34")]),
        ]);

        let charts = measurement_trends(&log);
        let weight = charts.weight.unwrap().compact();
        let other = charts.other.unwrap().compact();

        assert_eq!(weight.labels, vec!["01-01"]);
        assert_eq!(other.labels, vec!["01-08"]);
    }
}
