use chrono::NaiveDate;

use super::{daily_log_key, KvStore, StoreError};
use crate::models::DailyLog;

/// Daily health check-in records, one per calendar date.
pub struct DailyLogRepository {
    store: KvStore,
}

impl DailyLogRepository {
    pub fn new(store: KvStore) -> Self {
        Self { store }
    }

    pub async fn get(&self, date: NaiveDate) -> Result<Option<DailyLog>, StoreError> {
        let key = daily_log_key(date);
        match self.store.get(&key).await? {
            Some(value) => KvStore::decode(&key, &value).map(Some),
            None => Ok(None),
        }
    }

    pub async fn save(&self, date: NaiveDate, log: &DailyLog) -> Result<(), StoreError> {
        self.store.put(&daily_log_key(date), log).await
    }
}
