use chrono::{NaiveDate, Utc};
use clap::{Args, Subcommand};

use super::resolve_date;
use crate::analysis::reconcile_session;
use crate::db::{PlanRepository, WorkoutLogRepository};
use crate::models::{LoggedExercise, PlannedExercise, Scalar, Weekday, WorkoutLog};

#[derive(Args)]
pub struct WorkoutCommand {
    #[command(subcommand)]
    pub command: WorkoutSubcommand,
}

#[derive(Subcommand)]
pub enum WorkoutSubcommand {
    /// Show the session for a date (plan merged with anything logged)
    Show {
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long, short)]
        date: Option<String>,

        /// Weekday whose plan to use, defaults to the date's weekday
        #[arg(long)]
        day: Option<String>,
    },

    /// Record one set's weight and reps, saving the whole session
    Log {
        /// Exercise name as it appears in the session
        #[arg(long, short)]
        exercise: String,

        /// Set number, starting at 1
        #[arg(long, short)]
        set: usize,

        /// Weight lifted (lbs)
        #[arg(long, short)]
        weight: String,

        /// Reps performed
        #[arg(long, short)]
        reps: String,

        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long, short)]
        date: Option<String>,

        /// Weekday whose plan to use, defaults to the date's weekday
        #[arg(long)]
        day: Option<String>,
    },

    /// Add an ad-hoc exercise to the session
    Add {
        /// Exercise name
        #[arg(long)]
        name: String,

        /// Number of sets
        #[arg(long)]
        sets: i64,

        /// Target reps per set
        #[arg(long)]
        reps: i64,

        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long, short)]
        date: Option<String>,

        /// Weekday whose plan to use, defaults to the date's weekday
        #[arg(long)]
        day: Option<String>,
    },

    /// Save the session as finished
    Finish {
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long, short)]
        date: Option<String>,

        /// Weekday whose plan to use, defaults to the date's weekday
        #[arg(long)]
        day: Option<String>,
    },
}

impl WorkoutCommand {
    pub async fn run(
        &self,
        plans: &PlanRepository,
        logs: &WorkoutLogRepository,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            WorkoutSubcommand::Show { date, day } => {
                let (date, weekday) = resolve_target(date, day)?;
                let session = load_session(plans, logs, date, weekday).await?;

                if session.is_empty() {
                    println!("No exercises configured for {}.", weekday);
                    return Ok(());
                }

                println!("{}'s Workout ({})", weekday, date);
                println!("{}", "-".repeat(10));
                for exercise in &session {
                    println!("{} (Target: {} reps)", exercise.name, exercise.reps);
                    for (i, set) in exercise.sets.iter().enumerate() {
                        if set.is_blank() {
                            println!("  Set {}: -", i + 1);
                        } else {
                            println!(
                                "  Set {}: {} lbs x {} reps",
                                i + 1,
                                set.weight,
                                set.reps
                            );
                        }
                    }
                }
                Ok(())
            }
            WorkoutSubcommand::Log {
                exercise,
                set,
                weight,
                reps,
                date,
                day,
            } => {
                let (date, weekday) = resolve_target(date, day)?;
                if *set == 0 {
                    return Err("Set numbers start at 1".into());
                }

                let mut session = load_session(plans, logs, date, weekday).await?;
                let Some(entry) = session.iter_mut().find(|ex| ex.name == *exercise) else {
                    return Err(format!("No exercise named '{}' in this session", exercise).into());
                };

                // Sets can be edited past the planned count.
                if *set > entry.sets.len() {
                    entry.sets.resize(*set, Default::default());
                }
                entry.sets[*set - 1].weight = Scalar::Text(weight.trim().to_string());
                entry.sets[*set - 1].reps = Scalar::Text(reps.trim().to_string());

                save_session(logs, date, weekday, session).await?;
                println!("Logged {} set {}: {} lbs x {} reps", exercise, set, weight, reps);
                Ok(())
            }
            WorkoutSubcommand::Add {
                name,
                sets,
                reps,
                date,
                day,
            } => {
                let (date, weekday) = resolve_target(date, day)?;
                let name = name.trim();
                if name.is_empty() {
                    return Err("Exercise name cannot be empty".into());
                }
                if *sets <= 0 || *reps <= 0 {
                    return Err("Sets and reps must be positive".into());
                }

                let mut session = load_session(plans, logs, date, weekday).await?;
                // Ad-hoc exercises get a fresh id, beyond the plan.
                session.push(LoggedExercise::from_plan(&PlannedExercise::new(
                    name, *sets, *reps,
                )));

                save_session(logs, date, weekday, session).await?;
                println!("Added {} to {}'s session", name, date);
                Ok(())
            }
            WorkoutSubcommand::Finish { date, day } => {
                let (date, weekday) = resolve_target(date, day)?;
                let session = load_session(plans, logs, date, weekday).await?;

                save_session(logs, date, weekday, session).await?;
                println!("Workout saved.");
                Ok(())
            }
        }
    }
}

fn resolve_target(
    date: &Option<String>,
    day: &Option<String>,
) -> Result<(NaiveDate, Weekday), Box<dyn std::error::Error>> {
    let date = resolve_date(date)?;
    let weekday = match day {
        Some(d) => d.parse()?,
        None => Weekday::from(date),
    };
    Ok((date, weekday))
}

/// Load the reconciled session for a date: any saved log merged with
/// the weekday's current plan. A read or parse failure aborts before
/// anything is written.
async fn load_session(
    plans: &PlanRepository,
    logs: &WorkoutLogRepository,
    date: NaiveDate,
    weekday: Weekday,
) -> Result<Vec<LoggedExercise>, Box<dyn std::error::Error>> {
    let plan = plans.get(weekday).await?;
    let existing = logs.get(date).await?;
    Ok(reconcile_session(&plan, existing.as_ref()))
}

/// Write the whole session back as the date's log.
async fn save_session(
    logs: &WorkoutLogRepository,
    date: NaiveDate,
    weekday: Weekday,
    exercises: Vec<LoggedExercise>,
) -> Result<(), Box<dyn std::error::Error>> {
    let log = WorkoutLog {
        day: weekday,
        completed_at: Utc::now(),
        exercises,
    };
    logs.save(date, &log).await?;
    Ok(())
}
