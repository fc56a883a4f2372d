use super::{KvStore, StoreError, GOALS_KEY};
use crate::models::Goals;

/// The health-goals singleton record.
pub struct GoalsRepository {
    store: KvStore,
}

impl GoalsRepository {
    pub fn new(store: KvStore) -> Self {
        Self { store }
    }

    pub async fn get(&self) -> Result<Goals, StoreError> {
        match self.store.get(GOALS_KEY).await? {
            Some(value) => KvStore::decode(GOALS_KEY, &value),
            None => Ok(Goals::default()),
        }
    }

    pub async fn save(&self, goals: &Goals) -> Result<(), StoreError> {
        self.store.put(GOALS_KEY, goals).await
    }
}
