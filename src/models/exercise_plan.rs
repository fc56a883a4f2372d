use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One exercise in a weekday's configured plan.
///
/// `id` is assigned once at creation (millisecond-timestamp string) and
/// stays stable from then on; the workout-session merge matches logged
/// exercises against the plan by this id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedExercise {
    #[serde(default)]
    pub id: String,
    pub name: String,
    /// Target number of sets.
    pub sets: i64,
    /// Target reps per set.
    pub reps: i64,
}

impl PlannedExercise {
    pub fn new(name: impl Into<String>, sets: i64, reps: i64) -> Self {
        Self {
            id: Utc::now().timestamp_millis().to_string(),
            name: name.into(),
            sets,
            reps,
        }
    }
}

impl fmt::Display for PlannedExercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} x {})", self.name, self.sets, self.reps)
    }
}

/// Backfill ids for plan entries stored before ids existed.
///
/// Every entry with a blank id gets `<now-millis>-<index>`, unique
/// within the list and stable for the rest of the session.
pub fn ensure_ids(exercises: &mut [PlannedExercise]) {
    let now = Utc::now().timestamp_millis();
    for (index, ex) in exercises.iter_mut().enumerate() {
        if ex.id.trim().is_empty() {
            ex.id = format!("{}-{}", now, index);
        }
    }
}
