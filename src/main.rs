use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod analysis;
mod commands;
mod config;
mod db;
mod models;

use commands::{
    ConfigCommand, DailyCommand, DashboardCommand, DashboardRepos, DayCommand, DayRepos,
    GoalsCommand, MeasureCommand, PlanCommand, ProgressCommand, ScheduleCommand, WorkoutCommand,
};
use config::Config;
use db::{
    init_db, DailyLogRepository, GoalsRepository, KvStore, MeasurementRepository, PlanRepository,
    ScheduleRepository, WorkoutLogRepository,
};

#[derive(Parser)]
#[command(name = "liftlog")]
#[command(version)]
#[command(about = "A personal fitness tracking CLI", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Today at a glance: workout, check-in, personal records
    Dashboard(DashboardCommand),

    /// Manage the weekly workout schedule
    Schedule(ScheduleCommand),

    /// Manage per-weekday exercise plans
    Plan(PlanCommand),

    /// Log workout sessions
    Workout(WorkoutCommand),

    /// Track daily calories, water, and alcohol
    Daily(DailyCommand),

    /// Manage health goals
    Goals(GoalsCommand),

    /// Track body measurements
    Measure(MeasureCommand),

    /// Show everything recorded for one date
    Day(DayCommand),

    /// Derived views: records, trends, progression, consistency
    Progress(ProgressCommand),

    /// Manage configuration
    Config(ConfigCommand),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config)?;

    match cli.command {
        Some(Commands::Dashboard(cmd)) => {
            let store = open_store(&config).await?;
            let schedules = ScheduleRepository::new(store.clone());
            let plans = PlanRepository::new(store.clone());
            let workouts = WorkoutLogRepository::new(store.clone());
            let dailies = DailyLogRepository::new(store.clone());
            let measurements = MeasurementRepository::new(store);
            cmd.run(DashboardRepos {
                schedules: &schedules,
                plans: &plans,
                workouts: &workouts,
                dailies: &dailies,
                measurements: &measurements,
            })
            .await?;
        }
        Some(Commands::Schedule(cmd)) => {
            let store = open_store(&config).await?;
            let schedules = ScheduleRepository::new(store.clone());
            let plans = PlanRepository::new(store);
            cmd.run(&schedules, &plans).await?;
        }
        Some(Commands::Plan(cmd)) => {
            let store = open_store(&config).await?;
            let plans = PlanRepository::new(store);
            cmd.run(&plans).await?;
        }
        Some(Commands::Workout(cmd)) => {
            let store = open_store(&config).await?;
            let plans = PlanRepository::new(store.clone());
            let workouts = WorkoutLogRepository::new(store);
            cmd.run(&plans, &workouts).await?;
        }
        Some(Commands::Daily(cmd)) => {
            let store = open_store(&config).await?;
            let dailies = DailyLogRepository::new(store);
            cmd.run(&dailies).await?;
        }
        Some(Commands::Goals(cmd)) => {
            let store = open_store(&config).await?;
            let goals = GoalsRepository::new(store);
            cmd.run(&goals).await?;
        }
        Some(Commands::Measure(cmd)) => {
            let store = open_store(&config).await?;
            let measurements = MeasurementRepository::new(store);
            cmd.run(&measurements).await?;
        }
        Some(Commands::Day(cmd)) => {
            let store = open_store(&config).await?;
            let workouts = WorkoutLogRepository::new(store.clone());
            let dailies = DailyLogRepository::new(store.clone());
            let measurements = MeasurementRepository::new(store);
            cmd.run(DayRepos {
                workouts: &workouts,
                dailies: &dailies,
                measurements: &measurements,
            })
            .await?;
        }
        Some(Commands::Progress(cmd)) => {
            let store = open_store(&config).await?;
            let workouts = WorkoutLogRepository::new(store.clone());
            let measurements = MeasurementRepository::new(store);
            cmd.run(&workouts, &measurements).await?;
        }
        Some(Commands::Config(cmd)) => {
            cmd.run(&config)?;
        }
        None => {
            println!("Use --help to see available commands");
        }
    }

    Ok(())
}

async fn open_store(config: &Config) -> Result<KvStore, Box<dyn std::error::Error>> {
    let pool = init_db(config.database_path.value.clone()).await?;
    Ok(KvStore::new(pool))
}
