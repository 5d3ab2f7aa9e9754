use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{Record, Repository};
use crate::errors::ServiceError;

/// Process-local repository backed by an ordered map.
///
/// Ids start at 1 and are never reused, matching an identity column.
pub struct MemoryRepository<M> {
    rows: RwLock<BTreeMap<i64, M>>,
    next_id: AtomicI64,
}

impl<M: Record> MemoryRepository<M> {
    pub fn new() -> Self {
        Self { rows: RwLock::new(BTreeMap::new()), next_id: AtomicI64::new(1) }
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

impl<M: Record> Default for MemoryRepository<M> {
    fn default() -> Self { Self::new() }
}

#[async_trait]
impl<M: Record> Repository<M> for MemoryRepository<M> {
    async fn insert(&self, mut record: M) -> Result<M, ServiceError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        record.set_id(id);
        self.rows.write().await.insert(id, record.clone());
        Ok(record)
    }

    async fn update(&self, record: M) -> Result<M, ServiceError> {
        let mut rows = self.rows.write().await;
        match rows.get_mut(&record.id()) {
            Some(slot) => {
                *slot = record.clone();
                Ok(record)
            }
            None => Err(ServiceError::not_found(M::ENTITY, record.id())),
        }
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<M>, ServiceError> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<M>, ServiceError> {
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(self.rows.write().await.remove(&id).is_some())
    }
}
