// Port for the append-only store that owns every vehicle's fuel log.
//
// Purpose
// - Describe the two capabilities the engine needs from the store: read a vehicle's full
//   log snapshot, and append new records under optimistic concurrency.
//
// Boundaries
// - No concrete storage here. Adapters implement the trait; `in_memory` backs tests and
//   local development.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogStoreError {
    #[error("version mismatch: expected {expected}, actual {actual}")]
    VersionMismatch { expected: i64, actual: i64 },

    #[error("backend error: {0}")]
    Backend(String),
}

/// A point-in-time snapshot of one stream, in append order.
#[derive(Debug, Clone)]
pub struct LoadedLog<Record> {
    pub records: Vec<Record>,
    pub version: i64,
}

#[async_trait]
pub trait LogStore<Record: Clone + Send + Sync + 'static>: Send + Sync {
    async fn load(&self, stream_id: &str) -> Result<LoadedLog<Record>, LogStoreError>;
    async fn append(
        &self,
        stream_id: &str,
        expected_version: i64,
        new_records: &[Record],
    ) -> Result<(), LogStoreError>;
}

pub mod in_memory;
