use clap::{Args, Subcommand};

use crate::db::PlanRepository;
use crate::models::{PlannedExercise, Weekday};

#[derive(Args)]
pub struct PlanCommand {
    #[command(subcommand)]
    pub command: PlanSubcommand,
}

#[derive(Subcommand)]
pub enum PlanSubcommand {
    /// List a day's configured exercises
    List {
        /// Weekday (Monday through Sunday)
        day: String,
    },

    /// Add an exercise to a day's plan
    Add {
        /// Weekday (Monday through Sunday)
        day: String,

        /// Exercise name, e.g. "Bench Press"
        #[arg(long)]
        name: String,

        /// Target number of sets
        #[arg(long)]
        sets: i64,

        /// Target reps per set
        #[arg(long)]
        reps: i64,
    },

    /// Remove an exercise from a day's plan, by name or id
    Remove {
        /// Weekday (Monday through Sunday)
        day: String,

        /// Exercise name (or id) to remove
        exercise: String,
    },
}

impl PlanCommand {
    pub async fn run(&self, plans: &PlanRepository) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            PlanSubcommand::List { day } => {
                let day: Weekday = day.parse()?;
                let plan = plans.get(day).await?;

                if plan.is_empty() {
                    println!("No exercises configured for {}.", day);
                    return Ok(());
                }

                println!("{}'s Exercises", day);
                println!("{}", "-".repeat(10));
                for exercise in &plan {
                    println!("  {}  [{}]", exercise, exercise.id);
                }
                Ok(())
            }
            PlanSubcommand::Add {
                day,
                name,
                sets,
                reps,
            } => {
                let day: Weekday = day.parse()?;
                let name = name.trim();
                if name.is_empty() {
                    return Err("Exercise name cannot be empty".into());
                }
                if *sets <= 0 || *reps <= 0 {
                    return Err("Sets and reps must be positive".into());
                }

                let mut plan = plans.get(day).await?;
                let exercise = PlannedExercise::new(name, *sets, *reps);
                plan.push(exercise.clone());
                plans.save(day, &plan).await?;

                println!("Added {} to {}", exercise, day);
                Ok(())
            }
            PlanSubcommand::Remove { day, exercise } => {
                let day: Weekday = day.parse()?;
                let mut plan = plans.get(day).await?;

                let before = plan.len();
                plan.retain(|ex| ex.name != *exercise && ex.id != *exercise);
                if plan.len() == before {
                    return Err(format!("Exercise not found in {}'s plan: {}", day, exercise).into());
                }
                plans.save(day, &plan).await?;

                println!("Removed {} from {}", exercise, day);
                Ok(())
            }
        }
    }
}
