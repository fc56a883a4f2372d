use super::{KvStore, StoreError, MEASUREMENT_CATALOG_KEY, MEASUREMENT_LOG_KEY};
use crate::models::{MeasurementCatalog, MeasurementLog};

/// The measurement catalog and the all-dates measurement log, each a
/// singleton record read and written wholesale.
pub struct MeasurementRepository {
    store: KvStore,
}

impl MeasurementRepository {
    pub fn new(store: KvStore) -> Self {
        Self { store }
    }

    /// Load the catalog; absent means the stock default list.
    pub async fn catalog(&self) -> Result<MeasurementCatalog, StoreError> {
        match self.store.get(MEASUREMENT_CATALOG_KEY).await? {
            Some(value) => KvStore::decode(MEASUREMENT_CATALOG_KEY, &value),
            None => Ok(MeasurementCatalog::default()),
        }
    }

    pub async fn save_catalog(&self, catalog: &MeasurementCatalog) -> Result<(), StoreError> {
        self.store.put(MEASUREMENT_CATALOG_KEY, catalog).await
    }

    pub async fn log(&self) -> Result<MeasurementLog, StoreError> {
        match self.store.get(MEASUREMENT_LOG_KEY).await? {
            Some(value) => KvStore::decode(MEASUREMENT_LOG_KEY, &value),
            None => Ok(MeasurementLog::default()),
        }
    }

    pub async fn save_log(&self, log: &MeasurementLog) -> Result<(), StoreError> {
        self.store.put(MEASUREMENT_LOG_KEY, log).await
    }
}
