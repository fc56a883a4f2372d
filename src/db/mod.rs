mod daily_repo;
mod goals_repo;
mod measurement_repo;
mod plan_repo;
mod schedule_repo;
mod workout_repo;

pub use daily_repo::DailyLogRepository;
pub use goals_repo::GoalsRepository;
pub use measurement_repo::MeasurementRepository;
pub use plan_repo::PlanRepository;
pub use schedule_repo::ScheduleRepository;
pub use workout_repo::WorkoutLogRepository;

use chrono::NaiveDate;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::PathBuf;
use std::str::FromStr;

use crate::models::Weekday;

// Key conventions for the flat record namespace. Dated records carry an
// ISO date suffix; everything else is a fixed singleton key.
pub const SCHEDULE_KEY: &str = "user_schedule";
pub const GOALS_KEY: &str = "user_goals";
pub const MEASUREMENT_CATALOG_KEY: &str = "user_measurements";
pub const MEASUREMENT_LOG_KEY: &str = "measurement_logs";
pub const WORKOUT_LOG_PREFIX: &str = "workout_log_";
pub const DAILY_LOG_PREFIX: &str = "daily_log_";
pub const EXERCISE_PLAN_PREFIX: &str = "exercises_";

pub fn workout_log_key(date: NaiveDate) -> String {
    format!("{}{}", WORKOUT_LOG_PREFIX, date)
}

pub fn daily_log_key(date: NaiveDate) -> String {
    format!("{}{}", DAILY_LOG_PREFIX, date)
}

pub fn exercise_plan_key(day: Weekday) -> String {
    format!("{}{}", EXERCISE_PLAN_PREFIX, day)
}

/// Recover the date from a dated key such as `workout_log_2024-01-15`.
pub fn date_from_key(key: &str, prefix: &str) -> Option<NaiveDate> {
    let suffix = key.strip_prefix(prefix)?;
    NaiveDate::parse_from_str(suffix, "%Y-%m-%d").ok()
}

/// Initialize the database connection pool and run migrations
pub async fn init_db(db_path: PathBuf) -> Result<SqlitePool, sqlx::Error> {
    // Ensure parent directory exists
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create database directory");
    }

    let db_url = format!("sqlite:{}?mode=rwc", db_path.display());

    let options = SqliteConnectOptions::from_str(&db_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    // Run migrations
    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}

/// Read or parse failure against the record store. Both collapse into
/// one user-visible "failed to load/save" message; the distinction only
/// matters for logging.
#[derive(Debug)]
pub enum StoreError {
    Database(sqlx::Error),
    Corrupt(String, serde_json::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Database(e) => write!(f, "Failed to load/save data: {}", e),
            StoreError::Corrupt(key, e) => {
                write!(f, "Failed to load/save data ('{}' is malformed: {})", key, e)
            }
        }
    }
}

impl std::error::Error for StoreError {}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError::Database(e)
    }
}

/// The flat string-keyed, string-valued store every repository sits on.
#[derive(Clone)]
pub struct KvStore {
    pool: SqlitePool,
}

impl KvStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let row: Option<(String,)> = sqlx::query_as("SELECT value FROM records WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|(value,)| value))
    }

    pub async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO records (key, value) VALUES (?, ?) ON CONFLICT(key) DO UPDATE SET value = excluded.value")
            .bind(key)
            .bind(value)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// All keys starting with `prefix`, ascending.
    pub async fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, StoreError> {
        let pattern = format!("{}%", prefix);
        let rows: Vec<(String,)> =
            sqlx::query_as("SELECT key FROM records WHERE key LIKE ? ORDER BY key")
                .bind(&pattern)
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().map(|(key,)| key).collect())
    }

    /// Bulk fetch; keys with no record are skipped.
    pub async fn multi_get(&self, keys: &[String]) -> Result<Vec<(String, String)>, StoreError> {
        let mut pairs = Vec::with_capacity(keys.len());
        for key in keys {
            if let Some(value) = self.get(key).await? {
                pairs.push((key.clone(), value));
            }
        }
        Ok(pairs)
    }

    /// Decode a stored JSON record, treating malformed data as a load failure.
    pub fn decode<T: serde::de::DeserializeOwned>(
        key: &str,
        value: &str,
    ) -> Result<T, StoreError> {
        serde_json::from_str(value).map_err(|e| StoreError::Corrupt(key.to_string(), e))
    }

    /// Encode and write a record under `key`.
    pub async fn put<T: serde::Serialize>(&self, key: &str, record: &T) -> Result<(), StoreError> {
        let value = serde_json::to_string(record)
            .map_err(|e| StoreError::Corrupt(key.to_string(), e))?;
        self.set(key, &value).await
    }
}
