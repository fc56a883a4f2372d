use clap::{Args, Subcommand, ValueEnum};
use serde::Serialize;

use crate::analysis::{
    exercise_progression, marked_dates, measurement_trends, personal_records, ChartSeries,
};
use crate::db::{MeasurementRepository, WorkoutLogRepository};

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct PersonalRecord {
    name: String,
    weight: i64,
}

#[derive(Args)]
pub struct ProgressCommand {
    #[command(subcommand)]
    pub command: ProgressSubcommand,
}

#[derive(Subcommand)]
pub enum ProgressSubcommand {
    /// Best weight ever logged per exercise
    Records {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Workout-consistency calendar
    Calendar,

    /// Measurement trend charts
    Measurements,

    /// Weight progression for one exercise
    Exercise {
        /// Exercise name; defaults to the first one with data
        name: Option<String>,
    },
}

impl ProgressCommand {
    pub async fn run(
        &self,
        workouts: &WorkoutLogRepository,
        measurements: &MeasurementRepository,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            ProgressSubcommand::Records { format } => {
                let logs = workouts.all().await?;
                let mut records: Vec<PersonalRecord> = personal_records(&logs)
                    .into_iter()
                    .map(|(name, weight)| PersonalRecord { name, weight })
                    .collect();
                records.sort_by(|a, b| a.name.cmp(&b.name));

                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&records)?);
                    }
                    OutputFormat::Text => {
                        if records.is_empty() {
                            println!("No records yet. Complete a workout to see them here!");
                            return Ok(());
                        }
                        println!("Personal Records");
                        println!("{}", "-".repeat(10));
                        for record in &records {
                            println!("  {:<20} {} lbs", record.name, record.weight);
                        }
                    }
                }
                Ok(())
            }
            ProgressSubcommand::Calendar => {
                let dates = workouts.dates().await?;
                let marks = marked_dates(&dates);

                if marks.is_empty() {
                    println!("No workouts logged yet.");
                    return Ok(());
                }

                println!("Consistency");
                println!("{}", "-".repeat(10));
                for date in marks.keys() {
                    println!("  {} *", date);
                }
                println!("\nTotal: {} workout(s)", marks.len());
                Ok(())
            }
            ProgressSubcommand::Measurements => {
                let log = measurements.log().await?;
                if log.is_empty() {
                    println!("No measurement data logged yet.");
                    return Ok(());
                }
                let charts = measurement_trends(&log);

                let weight = charts.weight.map(|c| c.compact());
                let other = charts.other.map(|c| c.compact());

                if weight.is_none() && other.is_none() {
                    println!("No measurement data logged yet.");
                    return Ok(());
                }

                if let Some(chart) = weight {
                    println!("Weight Trend (lbs)");
                    println!("{}", "-".repeat(10));
                    render_chart(&chart);
                    println!();
                }
                if let Some(chart) = other {
                    println!("Other Measurements (in)");
                    println!("{}", "-".repeat(10));
                    render_chart(&chart);
                }
                Ok(())
            }
            ProgressSubcommand::Exercise { name } => {
                let logs = workouts.all().await?;
                let progression = exercise_progression(&logs);

                if progression.is_empty() {
                    println!("No workout data logged yet.");
                    return Ok(());
                }

                let selected = match name {
                    Some(name) => name.clone(),
                    // Deterministic default: first exercise with data.
                    None => progression.keys().next().cloned().unwrap_or_default(),
                };
                let Some(chart) = progression.get(&selected) else {
                    let available: Vec<&str> =
                        progression.keys().map(String::as_str).collect();
                    return Err(format!(
                        "No progression data for '{}'. Available: {}",
                        selected,
                        available.join(", ")
                    )
                    .into());
                };

                println!("Exercise Progress: {}", selected);
                println!("{}", "-".repeat(10));
                render_chart(&chart.compact());
                Ok(())
            }
        }
    }
}

fn render_chart(chart: &ChartSeries) {
    if !chart.legend.is_empty() {
        println!("  {:<6} {}", "", chart.legend.join("  "));
    }
    for (i, label) in chart.labels.iter().enumerate() {
        let cells: Vec<String> = chart
            .datasets
            .iter()
            .map(|ds| match ds.data.get(i).copied().flatten() {
                Some(value) => format!("{:>8}", format_value(value)),
                None => format!("{:>8}", "-"),
            })
            .collect();
        println!("  {:<6} {}", label, cells.join(" "));
    }
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}
