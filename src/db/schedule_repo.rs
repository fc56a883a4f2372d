use super::{KvStore, StoreError, SCHEDULE_KEY};
use crate::models::Schedule;

/// The weekly schedule singleton record.
pub struct ScheduleRepository {
    store: KvStore,
}

impl ScheduleRepository {
    pub fn new(store: KvStore) -> Self {
        Self { store }
    }

    /// Load the schedule; an absent record is an empty schedule.
    pub async fn get(&self) -> Result<Schedule, StoreError> {
        match self.store.get(SCHEDULE_KEY).await? {
            Some(value) => KvStore::decode(SCHEDULE_KEY, &value),
            None => Ok(Schedule::new()),
        }
    }

    pub async fn save(&self, schedule: &Schedule) -> Result<(), StoreError> {
        self.store.put(SCHEDULE_KEY, schedule).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_db;
    use crate::models::Weekday;
    use tempfile::TempDir;

    struct TestContext {
        repo: ScheduleRepository,
        _temp_dir: TempDir,
    }

    async fn setup() -> TestContext {
        let temp_dir = TempDir::new().unwrap();
        let pool = init_db(temp_dir.path().join("test.db")).await.unwrap();
        TestContext {
            repo: ScheduleRepository::new(KvStore::new(pool)),
            _temp_dir: temp_dir,
        }
    }

    #[tokio::test]
    async fn test_absent_record_is_empty_schedule() {
        let ctx = setup().await;
        let schedule = ctx.repo.get().await.unwrap();
        assert_eq!(schedule, Schedule::new());
    }

    #[tokio::test]
    async fn test_save_and_get() {
        let ctx = setup().await;
        let mut schedule = Schedule::new();
        schedule.set_title(Weekday::Monday, "Push Day");
        schedule.set_title(Weekday::Thursday, "Leg Day");

        ctx.repo.save(&schedule).await.unwrap();
        assert_eq!(ctx.repo.get().await.unwrap(), schedule);
    }
}
