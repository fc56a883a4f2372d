use chrono::NaiveDate;

use super::{date_from_key, workout_log_key, KvStore, StoreError, WORKOUT_LOG_PREFIX};
use crate::models::WorkoutLog;

/// Workout logs, one record per calendar date. Saves always write the
/// whole log; there is no partial patch at this layer.
pub struct WorkoutLogRepository {
    store: KvStore,
}

impl WorkoutLogRepository {
    pub fn new(store: KvStore) -> Self {
        Self { store }
    }

    pub async fn get(&self, date: NaiveDate) -> Result<Option<WorkoutLog>, StoreError> {
        let key = workout_log_key(date);
        match self.store.get(&key).await? {
            Some(value) => KvStore::decode(&key, &value).map(Some),
            None => Ok(None),
        }
    }

    pub async fn save(&self, date: NaiveDate, log: &WorkoutLog) -> Result<(), StoreError> {
        self.store.put(&workout_log_key(date), log).await
    }

    /// Dates with a logged workout, ascending.
    pub async fn dates(&self) -> Result<Vec<NaiveDate>, StoreError> {
        let keys = self.store.keys_with_prefix(WORKOUT_LOG_PREFIX).await?;
        Ok(keys
            .iter()
            .filter_map(|key| {
                let date = date_from_key(key, WORKOUT_LOG_PREFIX);
                if date.is_none() {
                    tracing::warn!(key = %key, "skipping workout log with unparseable date key");
                }
                date
            })
            .collect())
    }

    /// The full snapshot of workout logs, sorted ascending by date.
    /// Aggregation always starts from this; enumeration order of the
    /// store itself is never relied on.
    pub async fn all(&self) -> Result<Vec<(NaiveDate, WorkoutLog)>, StoreError> {
        let keys = self.store.keys_with_prefix(WORKOUT_LOG_PREFIX).await?;
        let pairs = self.store.multi_get(&keys).await?;

        let mut logs = Vec::with_capacity(pairs.len());
        for (key, value) in pairs {
            let Some(date) = date_from_key(&key, WORKOUT_LOG_PREFIX) else {
                tracing::warn!(key = %key, "skipping workout log with unparseable date key");
                continue;
            };
            logs.push((date, KvStore::decode(&key, &value)?));
        }
        logs.sort_by_key(|(date, _)| *date);
        Ok(logs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_db;
    use crate::models::{LoggedExercise, Scalar, SetEntry, Weekday};
    use tempfile::TempDir;

    struct TestContext {
        repo: WorkoutLogRepository,
        _temp_dir: TempDir,
    }

    async fn setup() -> TestContext {
        let temp_dir = TempDir::new().unwrap();
        let pool = init_db(temp_dir.path().join("test.db")).await.unwrap();
        TestContext {
            repo: WorkoutLogRepository::new(KvStore::new(pool)),
            _temp_dir: temp_dir,
        }
    }

    fn sample_log() -> WorkoutLog {
        let mut log = WorkoutLog::new(Weekday::Monday);
        log.exercises.push(LoggedExercise {
            id: "1700000000000".to_string(),
            name: "Bench Press".to_string(),
            reps: 8,
            sets: vec![
                SetEntry {
                    weight: Scalar::from("135"),
                    reps: Scalar::from("8"),
                },
                SetEntry {
                    weight: Scalar::from("155"),
                    reps: Scalar::from("6"),
                },
            ],
        });
        log
    }

    #[tokio::test]
    async fn test_save_then_get_is_identical() {
        let ctx = setup().await;
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let log = sample_log();

        ctx.repo.save(date, &log).await.unwrap();
        let fetched = ctx.repo.get(date).await.unwrap().unwrap();
        assert_eq!(fetched, log);
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let ctx = setup().await;
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert!(ctx.repo.get(date).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_overwrites_wholesale() {
        let ctx = setup().await;
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();

        ctx.repo.save(date, &sample_log()).await.unwrap();

        let replacement = WorkoutLog::new(Weekday::Monday);
        ctx.repo.save(date, &replacement).await.unwrap();

        let fetched = ctx.repo.get(date).await.unwrap().unwrap();
        assert!(fetched.exercises.is_empty());
    }

    #[tokio::test]
    async fn test_all_sorted_by_date() {
        let ctx = setup().await;
        let feb = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
        let jan = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();

        ctx.repo.save(feb, &sample_log()).await.unwrap();
        ctx.repo.save(jan, &sample_log()).await.unwrap();

        let all = ctx.repo.all().await.unwrap();
        let dates: Vec<NaiveDate> = all.iter().map(|(d, _)| *d).collect();
        assert_eq!(dates, vec![jan, feb]);

        assert_eq!(ctx.repo.dates().await.unwrap(), vec![jan, feb]);
    }

    #[tokio::test]
    async fn test_corrupt_log_is_load_failure() {
        let ctx = setup().await;
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();

        // Write garbage directly under the log's key.
        ctx.repo
            .store
            .set(&workout_log_key(date), "{not json")
            .await
            .unwrap();

        assert!(matches!(
            ctx.repo.get(date).await,
            Err(StoreError::Corrupt(_, _))
        ));
        assert!(ctx.repo.all().await.is_err());
    }
}
