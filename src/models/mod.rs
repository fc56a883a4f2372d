mod daily_log;
mod exercise_plan;
mod goals;
mod measurements;
mod schedule;
mod value;
mod weekday;
mod workout_log;

pub use daily_log::DailyLog;
pub use exercise_plan::{ensure_ids, PlannedExercise};
pub use goals::Goals;
pub use measurements::{MeasurementCatalog, MeasurementLog};
pub use schedule::Schedule;
pub use value::Scalar;
pub use weekday::Weekday;
pub use workout_log::{LoggedExercise, SetEntry, WorkoutLog};
