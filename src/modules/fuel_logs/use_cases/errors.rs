use crate::modules::fuel_logs::use_cases::record_fuel_log::decide::DecideError;
use crate::shared::infrastructure::log_store::LogStoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] LogStoreError),

    #[error("domain rejected: {0}")]
    Domain(#[from] DecideError),
}
