use chrono::NaiveDate;
use std::collections::BTreeMap;

use super::chart::{ChartSeries, Dataset};
use crate::models::{LoggedExercise, WorkoutLog};

/// Per-exercise weight progression over time.
///
/// For each exercise name, a compact chronological series of the best
/// parseable positive weight per date. Dates where the exercise is
/// absent, or where no set has a parseable positive weight, are left
/// out entirely; unlike the measurement trends there is no null
/// padding, every exercise gets its own x-axis. Exercises with no
/// surviving point never appear. Keys are sorted, so the first entry is
/// a deterministic default selection.
pub fn exercise_progression(logs: &[(NaiveDate, WorkoutLog)]) -> BTreeMap<String, ChartSeries> {
    // Storage enumeration order is arbitrary; chronology comes from an
    // explicit sort.
    let mut ordered: Vec<&(NaiveDate, WorkoutLog)> = logs.iter().collect();
    ordered.sort_by_key(|(date, _)| *date);

    let mut progress: BTreeMap<String, (Vec<String>, Vec<Option<f64>>)> = BTreeMap::new();

    for (date, log) in ordered {
        for exercise in &log.exercises {
            let Some(max_weight) = best_weight(exercise) else {
                continue;
            };
            let (labels, data) = progress.entry(exercise.name.clone()).or_default();
            labels.push(date.format("%m-%d").to_string());
            data.push(Some(max_weight as f64));
        }
    }

    progress
        .into_iter()
        .map(|(name, (labels, data))| {
            let chart = ChartSeries {
                labels,
                datasets: vec![Dataset::new(data)],
                legend: Vec::new(),
            };
            (name, chart)
        })
        .collect()
}

/// Best parseable, strictly positive weight across an exercise's sets.
fn best_weight(exercise: &LoggedExercise) -> Option<i64> {
    exercise
        .sets
        .iter()
        .filter_map(|set| set.weight.as_int())
        .filter(|w| *w > 0)
        .max()
}
