use chrono::NaiveDate;
use std::collections::HashMap;

use crate::models::WorkoutLog;

/// Best weight ever logged per exercise name.
///
/// Identity is the name string: same-named exercises from different
/// days merge into one record, a renamed exercise starts fresh. Only
/// weights whose integer parse succeeds count; an exercise whose sets
/// are all unparseable never appears (no fabricated zero entries).
pub fn personal_records(logs: &[(NaiveDate, WorkoutLog)]) -> HashMap<String, i64> {
    let mut records: HashMap<String, i64> = HashMap::new();

    for (_, log) in logs {
        for exercise in &log.exercises {
            for set in &exercise.sets {
                let Some(weight) = set.weight.as_int() else {
                    continue;
                };
                match records.get(&exercise.name) {
                    Some(best) if *best >= weight => {}
                    _ => {
                        records.insert(exercise.name.clone(), weight);
                    }
                }
            }
        }
    }

    records
}
