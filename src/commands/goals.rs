use clap::{Args, Subcommand};

use crate::db::GoalsRepository;

#[derive(Args)]
pub struct GoalsCommand {
    #[command(subcommand)]
    pub command: GoalsSubcommand,
}

#[derive(Subcommand)]
pub enum GoalsSubcommand {
    /// Show health goals
    Show,

    /// Set one or more health goals
    Set {
        /// Daily calorie goal (kcal)
        #[arg(long)]
        calories: Option<String>,

        /// Daily water intake goal (liters)
        #[arg(long)]
        water: Option<String>,

        /// Weekly alcohol limit (drinks)
        #[arg(long)]
        alcohol: Option<String>,
    },
}

fn display(value: &str) -> &str {
    let value = value.trim();
    if value.is_empty() {
        "not set"
    } else {
        value
    }
}

impl GoalsCommand {
    pub async fn run(&self, goals: &GoalsRepository) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            GoalsSubcommand::Show => {
                let current = goals.get().await?;

                println!("Health Goals");
                println!("============\n");
                if current.is_empty() {
                    println!("  No goals set yet.");
                    return Ok(());
                }
                println!("  Daily calories (kcal):    {}", display(&current.calories));
                println!("  Daily water (liters):     {}", display(&current.water));
                println!("  Weekly alcohol (drinks):  {}", display(&current.alcohol));
                Ok(())
            }
            GoalsSubcommand::Set {
                calories,
                water,
                alcohol,
            } => {
                if calories.is_none() && water.is_none() && alcohol.is_none() {
                    return Err(
                        "Nothing to set. Pass --calories, --water, and/or --alcohol.".into(),
                    );
                }

                let mut current = goals.get().await?;
                if let Some(calories) = calories {
                    current.calories = calories.trim().to_string();
                }
                if let Some(water) = water {
                    current.water = water.trim().to_string();
                }
                if let Some(alcohol) = alcohol {
                    current.alcohol = alcohol.trim().to_string();
                }
                goals.save(&current).await?;

                println!("Goals saved.");
                Ok(())
            }
        }
    }
}
