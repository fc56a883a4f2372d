mod config_cmd;
mod daily;
mod dashboard;
mod day;
mod goals;
mod measure;
mod plan;
mod progress;
mod schedule;
mod workout;

pub use config_cmd::ConfigCommand;
pub use daily::DailyCommand;
pub use dashboard::{DashboardCommand, DashboardRepos};
pub use day::{DayCommand, DayRepos};
pub use goals::GoalsCommand;
pub use measure::MeasureCommand;
pub use plan::PlanCommand;
pub use progress::ProgressCommand;
pub use schedule::ScheduleCommand;
pub use workout::WorkoutCommand;

use chrono::{Local, NaiveDate};

/// Parse an optional `YYYY-MM-DD` argument, defaulting to today.
///
/// Dates after today are rejected here, before any storage access.
pub(crate) fn resolve_date(date: &Option<String>) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    let today = Local::now().date_naive();
    let date = match date {
        Some(d) => NaiveDate::parse_from_str(d, "%Y-%m-%d")
            .map_err(|_| format!("Invalid date format '{}'. Use YYYY-MM-DD.", d))?,
        None => today,
    };
    if date > today {
        return Err("You cannot view or edit details for a future date.".into());
    }
    Ok(date)
}
