use clap::{Args, Subcommand};

use super::resolve_date;
use crate::db::DailyLogRepository;

#[derive(Args)]
pub struct DailyCommand {
    #[command(subcommand)]
    pub command: DailySubcommand,
}

#[derive(Subcommand)]
pub enum DailySubcommand {
    /// Show the health check-in for a date
    Show {
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long, short)]
        date: Option<String>,
    },

    /// Update the health check-in for a date
    Set {
        /// Calorie intake (kcal)
        #[arg(long)]
        calories: Option<f64>,

        /// Water intake (liters)
        #[arg(long)]
        water: Option<f64>,

        /// Alcoholic drinks
        #[arg(long)]
        alcohol: Option<f64>,

        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long, short)]
        date: Option<String>,
    },
}

impl DailyCommand {
    pub async fn run(
        &self,
        dailies: &DailyLogRepository,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            DailySubcommand::Show { date } => {
                let date = resolve_date(date)?;
                let log = dailies.get(date).await?.unwrap_or_default();

                println!("Health Check-in for {}", date);
                println!("{}", "-".repeat(10));
                println!("  Calories: {} kcal", log.calorie_intake);
                println!("  Water:    {} liters", log.water_intake);
                println!("  Alcohol:  {} drinks", log.alcohol_intake);
                Ok(())
            }
            DailySubcommand::Set {
                calories,
                water,
                alcohol,
                date,
            } => {
                if calories.is_none() && water.is_none() && alcohol.is_none() {
                    return Err(
                        "Nothing to set. Pass --calories, --water, and/or --alcohol.".into(),
                    );
                }

                let date = resolve_date(date)?;
                let mut log = dailies.get(date).await?.unwrap_or_default();
                if let Some(calories) = calories {
                    log.calorie_intake = calories.max(0.0);
                }
                if let Some(water) = water {
                    log.water_intake = water.max(0.0);
                }
                if let Some(alcohol) = alcohol {
                    log.alcohol_intake = alcohol.max(0.0);
                }
                dailies.save(date, &log).await?;

                println!("Saved health check-in for {}.", date);
                Ok(())
            }
        }
    }
}
