use clap::Args;

use super::resolve_date;
use crate::db::{DailyLogRepository, MeasurementRepository, WorkoutLogRepository};
use crate::models::Weekday;

/// Repositories needed for the day-details view
pub struct DayRepos<'a> {
    pub workouts: &'a WorkoutLogRepository,
    pub dailies: &'a DailyLogRepository,
    pub measurements: &'a MeasurementRepository,
}

/// Everything recorded for one past date: workout, health check-in,
/// body measurements.
#[derive(Args)]
pub struct DayCommand {
    /// Date (YYYY-MM-DD)
    pub date: String,
}

impl DayCommand {
    pub async fn run(&self, repos: DayRepos<'_>) -> Result<(), Box<dyn std::error::Error>> {
        let date = resolve_date(&Some(self.date.clone()))?;
        let weekday = Weekday::from(date);

        println!("Details for {}", date);
        println!("==========================\n");

        println!("{} Workout", weekday);
        println!("{}", "-".repeat(10));
        match repos.workouts.get(date).await? {
            Some(log) => {
                for exercise in &log.exercises {
                    println!("  {}", exercise.name);
                    for (i, set) in exercise.sets.iter().enumerate() {
                        let weight = if set.weight.is_empty() {
                            "N/A".to_string()
                        } else {
                            set.weight.to_string()
                        };
                        let reps = if set.reps.is_empty() {
                            "N/A".to_string()
                        } else {
                            set.reps.to_string()
                        };
                        println!("    Set {}: {} lbs x {} reps", i + 1, weight, reps);
                    }
                }
            }
            None => println!("  No workout logged."),
        }
        println!();

        println!("Health Check-in");
        println!("{}", "-".repeat(10));
        let daily = repos.dailies.get(date).await?.unwrap_or_default();
        if daily.is_empty() {
            println!("  No health check-in logged.");
        } else {
            println!("  Calories: {} kcal", daily.calorie_intake);
            println!("  Water:    {} liters", daily.water_intake);
            println!("  Alcohol:  {} drinks", daily.alcohol_intake);
        }
        println!();

        println!("Body Measurements");
        println!("{}", "-".repeat(10));
        let measurement_log = repos.measurements.log().await?;
        match measurement_log.for_date(&date.to_string()) {
            Some(values) if !values.is_empty() => {
                for (name, value) in values {
                    println!("  {:<12} {}", name, value);
                }
            }
            _ => println!("  No measurements logged."),
        }

        Ok(())
    }
}
