use crate::shared::infrastructure::log_store::{LoadedLog, LogStore, LogStoreError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

pub struct InMemoryLogStore<Record: Clone + Send + Sync + 'static> {
    inner: RwLock<HashMap<String, Vec<Record>>>,
    is_offline: bool,
    delay_append_ms: AtomicU64,
}

impl<Record: Clone + Send + Sync + 'static> Default for InMemoryLogStore<Record> {
    fn default() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
            is_offline: false,
            delay_append_ms: AtomicU64::new(0),
        }
    }
}

impl<Record: Clone + Send + Sync + 'static> InMemoryLogStore<Record> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Sleeps between the version check and the write, so racing appends can be observed.
    pub fn set_delay_append_ms(&self, delay_ms: u64) {
        self.delay_append_ms.store(delay_ms, Ordering::SeqCst);
    }
}

#[async_trait::async_trait]
impl<Record> LogStore<Record> for InMemoryLogStore<Record>
where
    Record: Clone + Send + Sync + 'static,
{
    async fn load(&self, stream_id: &str) -> Result<LoadedLog<Record>, LogStoreError> {
        if self.is_offline {
            return Err(LogStoreError::Backend("Log store offline".into()));
        }
        let guard = self.inner.read().await;
        let records = guard.get(stream_id).cloned().unwrap_or_default();
        let version = records.len() as i64;
        Ok(LoadedLog { records, version })
    }

    async fn append(
        &self,
        stream_id: &str,
        expected_version: i64,
        new_records: &[Record],
    ) -> Result<(), LogStoreError> {
        if self.is_offline {
            return Err(LogStoreError::Backend("Log store offline".into()));
        }
        let delay = self.delay_append_ms.load(Ordering::SeqCst);
        if delay == 0 {
            return self.write(stream_id, expected_version, new_records).await;
        }

        // Check, yield, then re-check under the write lock: the second writer of a race
        // observes the first writer's records and fails with a version mismatch.
        {
            let guard = self.inner.read().await;
            let actual = guard.get(stream_id).map(|r| r.len()).unwrap_or(0) as i64;
            if actual != expected_version {
                return Err(LogStoreError::VersionMismatch {
                    expected: expected_version,
                    actual,
                });
            }
        }
        tokio::time::sleep(Duration::from_millis(delay)).await;
        self.write(stream_id, expected_version, new_records).await
    }
}

impl<Record: Clone + Send + Sync + 'static> InMemoryLogStore<Record> {
    async fn write(
        &self,
        stream_id: &str,
        expected_version: i64,
        new_records: &[Record],
    ) -> Result<(), LogStoreError> {
        let mut guard = self.inner.write().await;
        let stream = guard.entry(stream_id.to_string()).or_default();
        let actual = stream.len() as i64;
        if actual != expected_version {
            return Err(LogStoreError::VersionMismatch {
                expected: expected_version,
                actual,
            });
        }
        stream.extend_from_slice(new_records);
        Ok(())
    }
}
