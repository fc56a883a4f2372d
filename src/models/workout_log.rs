use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{PlannedExercise, Scalar, Weekday};

/// One performed (or blank) set inside a logged exercise.
///
/// Weight and reps keep whatever shape they were entered in; untouched
/// placeholders are empty strings, matching the stored form data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetEntry {
    #[serde(default)]
    pub weight: Scalar,
    #[serde(default)]
    pub reps: Scalar,
}

impl SetEntry {
    pub fn is_blank(&self) -> bool {
        self.weight.is_empty() && self.reps.is_empty()
    }
}

/// An exercise as it appears inside a workout log: the plan fields plus
/// the performed sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedExercise {
    #[serde(default)]
    pub id: String,
    pub name: String,
    /// Target reps per set, carried over from the plan entry.
    #[serde(default)]
    pub reps: i64,
    #[serde(default)]
    pub sets: Vec<SetEntry>,
}

impl LoggedExercise {
    /// Initialize from a plan entry with empty placeholder sets sized to
    /// the planned set count.
    pub fn from_plan(plan: &PlannedExercise) -> Self {
        let count = plan.sets.max(0) as usize;
        Self {
            id: plan.id.clone(),
            name: plan.name.clone(),
            reps: plan.reps,
            sets: vec![SetEntry::default(); count],
        }
    }
}

/// The as-performed record of one workout session, keyed by date in the
/// store. Always written wholesale on save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutLog {
    pub day: Weekday,
    #[serde(rename = "completedAt")]
    pub completed_at: DateTime<Utc>,
    #[serde(default)]
    pub exercises: Vec<LoggedExercise>,
}

impl WorkoutLog {
    pub fn new(day: Weekday) -> Self {
        Self {
            day,
            completed_at: Utc::now(),
            exercises: Vec::new(),
        }
    }
}
