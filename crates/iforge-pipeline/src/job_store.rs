//! Job and infographic record stores.
//!
//! Explicit store abstractions keyed by job id, injected into the
//! orchestrator. The core pipeline holds no state of its own; distinct
//! jobs never share mutable state beyond these stores.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use iforge_models::{InfographicRecord, JobId, JobStatus};

use crate::error::StoreResult;

/// Per-job status records.
#[async_trait]
pub trait JobStore: Send + Sync {
    async fn get(&self, id: &JobId) -> StoreResult<Option<JobStatus>>;
    async fn set(&self, id: &JobId, status: JobStatus) -> StoreResult<()>;
    async fn delete(&self, id: &JobId) -> StoreResult<()>;
}

/// Completed infographic records.
#[async_trait]
pub trait InfographicStore: Send + Sync {
    async fn get(&self, id: &JobId) -> StoreResult<Option<InfographicRecord>>;
    async fn set(&self, id: &JobId, record: InfographicRecord) -> StoreResult<()>;
    async fn delete(&self, id: &JobId) -> StoreResult<()>;
}

/// In-memory job store.
#[derive(Debug, Default)]
pub struct InMemoryJobStore {
    inner: RwLock<HashMap<JobId, JobStatus>>,
}

impl InMemoryJobStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait]
impl JobStore for InMemoryJobStore {
    async fn get(&self, id: &JobId) -> StoreResult<Option<JobStatus>> {
        Ok(self.inner.read().await.get(id).cloned())
    }

    async fn set(&self, id: &JobId, status: JobStatus) -> StoreResult<()> {
        self.inner.write().await.insert(id.clone(), status);
        Ok(())
    }

    async fn delete(&self, id: &JobId) -> StoreResult<()> {
        self.inner.write().await.remove(id);
        Ok(())
    }
}

/// In-memory infographic store.
#[derive(Debug, Default)]
pub struct InMemoryInfographicStore {
    inner: RwLock<HashMap<JobId, InfographicRecord>>,
}

impl InMemoryInfographicStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait]
impl InfographicStore for InMemoryInfographicStore {
    async fn get(&self, id: &JobId) -> StoreResult<Option<InfographicRecord>> {
        Ok(self.inner.read().await.get(id).cloned())
    }

    async fn set(&self, id: &JobId, record: InfographicRecord) -> StoreResult<()> {
        self.inner.write().await.insert(id.clone(), record);
        Ok(())
    }

    async fn delete(&self, id: &JobId) -> StoreResult<()> {
        self.inner.write().await.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_job_store_round_trip() {
        let store = InMemoryJobStore::new();
        let id = JobId::new();

        assert!(store.get(&id).await.unwrap().is_none());

        store
            .set(&id, JobStatus::processing("Starting analysis...", 0, "Initializing"))
            .await
            .unwrap();
        let status = store.get(&id).await.unwrap().unwrap();
        assert_eq!(status.progress, 0);

        store
            .set(&id, JobStatus::completed("Done", "Ready for download"))
            .await
            .unwrap();
        let status = store.get(&id).await.unwrap().unwrap();
        assert_eq!(status.progress, 100);

        store.delete(&id).await.unwrap();
        assert!(store.get(&id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_job_store_isolates_jobs() {
        let store = InMemoryJobStore::new();
        let a = JobId::new();
        let b = JobId::new();

        store
            .set(&a, JobStatus::processing("stage a", 10, ""))
            .await
            .unwrap();
        store
            .set(&b, JobStatus::processing("stage b", 90, ""))
            .await
            .unwrap();

        assert_eq!(store.get(&a).await.unwrap().unwrap().progress, 10);
        assert_eq!(store.get(&b).await.unwrap().unwrap().progress, 90);
    }
}
