use chrono::Local;
use clap::Args;

use crate::analysis::personal_records;
use crate::db::{
    DailyLogRepository, MeasurementRepository, PlanRepository, ScheduleRepository,
    WorkoutLogRepository,
};
use crate::models::Weekday;

/// Repositories needed for the dashboard
pub struct DashboardRepos<'a> {
    pub schedules: &'a ScheduleRepository,
    pub plans: &'a PlanRepository,
    pub workouts: &'a WorkoutLogRepository,
    pub dailies: &'a DailyLogRepository,
    pub measurements: &'a MeasurementRepository,
}

/// Today at a glance: scheduled workout, health check-in, whether
/// anything has been logged yet, and the personal-records board.
#[derive(Args)]
pub struct DashboardCommand {}

impl DashboardCommand {
    pub async fn run(&self, repos: DashboardRepos<'_>) -> Result<(), Box<dyn std::error::Error>> {
        let today = Local::now().date_naive();
        let weekday = Weekday::from(today);

        let schedule = repos.schedules.get().await?;
        let plan_count = repos.plans.get(weekday).await?.len();
        let workout_logged = repos.workouts.get(today).await?.is_some();

        println!("Dashboard");
        println!("=========\n");

        println!("Today's Workout: {}", weekday);
        println!("  {}", schedule.display_for(weekday, plan_count));
        if schedule.title(weekday).is_some() || plan_count > 0 {
            if workout_logged {
                println!("  (logged, `liftlog workout show` to review)");
            } else {
                println!("  (not logged yet, `liftlog workout log` to start)");
            }
        }
        println!();

        println!("Daily Health Check-in");
        let daily = repos.dailies.get(today).await?.unwrap_or_default();
        println!("  Calories: {} kcal", daily.calorie_intake);
        println!("  Water:    {} liters", daily.water_intake);
        println!("  Alcohol:  {} drinks", daily.alcohol_intake);
        println!();

        let measurement_log = repos.measurements.log().await?;
        let measurements_logged = measurement_log
            .for_date(&today.to_string())
            .map(|values| !values.is_empty())
            .unwrap_or(false);
        println!(
            "Body Measurements: {}",
            if measurements_logged {
                "logged today"
            } else {
                "not logged today"
            }
        );
        println!();

        println!("Personal Records");
        let logs = repos.workouts.all().await?;
        let records = personal_records(&logs);
        if records.is_empty() {
            println!("  No records yet. Complete a workout to see them here!");
        } else {
            let mut names: Vec<&String> = records.keys().collect();
            names.sort();
            for name in names {
                println!("  {:<20} {} lbs", name, records[name]);
            }
        }

        Ok(())
    }
}
