use clap::{Args, Subcommand};

use crate::db::{PlanRepository, ScheduleRepository};
use crate::models::Weekday;

#[derive(Args)]
pub struct ScheduleCommand {
    #[command(subcommand)]
    pub command: ScheduleSubcommand,
}

#[derive(Subcommand)]
pub enum ScheduleSubcommand {
    /// Show the weekly workout schedule
    Show,

    /// Set a day's workout title
    Set {
        /// Weekday (Monday through Sunday)
        day: String,
        /// Workout title, e.g. "Push Day"
        title: String,
    },

    /// Clear a day's workout title, making it a rest day
    Clear {
        /// Weekday (Monday through Sunday)
        day: String,
    },
}

impl ScheduleCommand {
    pub async fn run(
        &self,
        schedules: &ScheduleRepository,
        plans: &PlanRepository,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            ScheduleSubcommand::Show => {
                let schedule = schedules.get().await?;
                let counts = plans.counts().await?;

                println!("Weekly Workout Schedule");
                println!("=======================\n");
                for day in Weekday::ALL {
                    let count = counts.get(&day).copied().unwrap_or(0);
                    println!("  {:<10} {}", day, schedule.display_for(day, count));
                }
                Ok(())
            }
            ScheduleSubcommand::Set { day, title } => {
                let day: Weekday = day.parse()?;
                let mut schedule = schedules.get().await?;
                schedule.set_title(day, title.trim());
                schedules.save(&schedule).await?;

                println!("Scheduled '{}' for {}", title.trim(), day);
                Ok(())
            }
            ScheduleSubcommand::Clear { day } => {
                let day: Weekday = day.parse()?;
                let mut schedule = schedules.get().await?;
                schedule.clear(day);
                schedules.save(&schedule).await?;

                println!("{} is now a rest day", day);
                Ok(())
            }
        }
    }
}
