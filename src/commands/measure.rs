use clap::{Args, Subcommand};

use super::resolve_date;
use crate::db::MeasurementRepository;

#[derive(Args)]
pub struct MeasureCommand {
    #[command(subcommand)]
    pub command: MeasureSubcommand,
}

#[derive(Subcommand)]
pub enum MeasureSubcommand {
    /// List the measurements being tracked
    List,

    /// Add a measurement to track
    Add {
        /// Measurement name, e.g. "Waist"
        name: String,
    },

    /// Stop tracking a measurement
    Remove {
        /// Measurement name
        name: String,
    },

    /// Log a measurement value for a date
    Log {
        /// Measurement name (does not have to be in the tracked list)
        name: String,

        /// Value, e.g. "181" or "34.5"
        value: String,

        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long, short)]
        date: Option<String>,
    },

    /// Show logged measurements for a date
    Show {
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long, short)]
        date: Option<String>,
    },
}

impl MeasureCommand {
    pub async fn run(
        &self,
        measurements: &MeasurementRepository,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            MeasureSubcommand::List => {
                let catalog = measurements.catalog().await?;
                println!("Body Measurements to Track");
                println!("{}", "-".repeat(10));
                for name in catalog.names() {
                    println!("  {}", name);
                }
                Ok(())
            }
            MeasureSubcommand::Add { name } => {
                let mut catalog = measurements.catalog().await?;
                if !catalog.add(name) {
                    return Err(format!("'{}' is already tracked (or blank)", name.trim()).into());
                }
                measurements.save_catalog(&catalog).await?;

                println!("Now tracking '{}'", name.trim());
                Ok(())
            }
            MeasureSubcommand::Remove { name } => {
                let mut catalog = measurements.catalog().await?;
                if !catalog.remove(name) {
                    return Err(format!("'{}' is not tracked", name).into());
                }
                measurements.save_catalog(&catalog).await?;

                println!("Stopped tracking '{}'", name);
                Ok(())
            }
            MeasureSubcommand::Log { name, value, date } => {
                let date = resolve_date(date)?;
                let name = name.trim();
                let value = value.trim();
                if name.is_empty() || value.is_empty() {
                    return Err("Measurement name and value cannot be empty".into());
                }

                let mut log = measurements.log().await?;
                log.record(&date.to_string(), name, value);
                measurements.save_log(&log).await?;

                println!("Measurements saved for {}.", date);
                Ok(())
            }
            MeasureSubcommand::Show { date } => {
                let date = resolve_date(date)?;
                let log = measurements.log().await?;

                match log.for_date(&date.to_string()) {
                    Some(values) if !values.is_empty() => {
                        println!("Measurements for {}", date);
                        println!("{}", "-".repeat(10));
                        for (name, value) in values {
                            println!("  {:<12} {}", name, value);
                        }
                    }
                    _ => println!("No measurements logged for {}.", date),
                }
                Ok(())
            }
        }
    }
}
