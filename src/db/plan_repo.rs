use std::collections::BTreeMap;

use super::{exercise_plan_key, KvStore, StoreError};
use crate::models::{ensure_ids, PlannedExercise, Weekday};

/// Per-weekday exercise plans, one record per weekday.
pub struct PlanRepository {
    store: KvStore,
}

impl PlanRepository {
    pub fn new(store: KvStore) -> Self {
        Self { store }
    }

    /// Load a weekday's plan. Entries persisted before ids existed are
    /// backfilled with fresh ids on the way out; the repaired ids only
    /// land in the store on the next save.
    pub async fn get(&self, day: Weekday) -> Result<Vec<PlannedExercise>, StoreError> {
        let key = exercise_plan_key(day);
        match self.store.get(&key).await? {
            Some(value) => {
                let mut exercises: Vec<PlannedExercise> = KvStore::decode(&key, &value)?;
                ensure_ids(&mut exercises);
                Ok(exercises)
            }
            None => Ok(Vec::new()),
        }
    }

    /// Replace a weekday's plan wholesale.
    pub async fn save(
        &self,
        day: Weekday,
        exercises: &[PlannedExercise],
    ) -> Result<(), StoreError> {
        self.store.put(&exercise_plan_key(day), &exercises).await
    }

    /// Planned-exercise count for every weekday, for schedule displays.
    pub async fn counts(&self) -> Result<BTreeMap<Weekday, usize>, StoreError> {
        let mut counts = BTreeMap::new();
        for day in Weekday::ALL {
            counts.insert(day, self.get(day).await?.len());
        }
        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_db;
    use tempfile::TempDir;

    struct TestContext {
        repo: PlanRepository,
        _temp_dir: TempDir,
    }

    async fn setup() -> TestContext {
        let temp_dir = TempDir::new().unwrap();
        let pool = init_db(temp_dir.path().join("test.db")).await.unwrap();
        TestContext {
            repo: PlanRepository::new(KvStore::new(pool)),
            _temp_dir: temp_dir,
        }
    }

    #[tokio::test]
    async fn test_absent_plan_is_empty() {
        let ctx = setup().await;
        assert!(ctx.repo.get(Weekday::Monday).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_and_get_preserves_order() {
        let ctx = setup().await;
        let plan = vec![
            PlannedExercise::new("Squat", 5, 5),
            PlannedExercise::new("Leg Press", 3, 10),
        ];

        ctx.repo.save(Weekday::Monday, &plan).await.unwrap();
        let fetched = ctx.repo.get(Weekday::Monday).await.unwrap();
        assert_eq!(fetched, plan);
    }

    #[tokio::test]
    async fn test_plans_are_per_day() {
        let ctx = setup().await;
        ctx.repo
            .save(Weekday::Monday, &[PlannedExercise::new("Squat", 5, 5)])
            .await
            .unwrap();

        assert!(ctx.repo.get(Weekday::Tuesday).await.unwrap().is_empty());
        assert_eq!(ctx.repo.get(Weekday::Monday).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_get_backfills_missing_ids() {
        let ctx = setup().await;
        // A record written before ids existed.
        ctx.repo
            .store
            .set(
                &exercise_plan_key(Weekday::Friday),
                r#"[{"name":"Curl","sets":3,"reps":12},{"name":"Row","sets":3,"reps":10}]"#,
            )
            .await
            .unwrap();

        let plan = ctx.repo.get(Weekday::Friday).await.unwrap();
        assert!(plan.iter().all(|ex| !ex.id.is_empty()));
        assert_ne!(plan[0].id, plan[1].id);
    }

    #[tokio::test]
    async fn test_counts() {
        let ctx = setup().await;
        ctx.repo
            .save(
                Weekday::Monday,
                &[
                    PlannedExercise::new("Squat", 5, 5),
                    PlannedExercise::new("Lunge", 3, 12),
                ],
            )
            .await
            .unwrap();

        let counts = ctx.repo.counts().await.unwrap();
        assert_eq!(counts[&Weekday::Monday], 2);
        assert_eq!(counts[&Weekday::Sunday], 0);
    }
}
